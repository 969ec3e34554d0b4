//! Row filters derived from a profile.
//!
//! Three outcomes must stay distinct: `None` (no queryable access),
//! [`DataFilter::Unrestricted`] (everything, serialised as `{}`) and
//! [`DataFilter::Scoped`] (equality on every non-null field).

use sekolah_models::{DaerahId, DesaId, KelompokId, OrgLocated, Role, UserProfile};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Organisational equality filter, copied verbatim from an admin profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct OrgFilter {
    pub daerah_id: Option<DaerahId>,
    pub desa_id: Option<DesaId>,
    pub kelompok_id: Option<KelompokId>,
}

impl OrgFilter {
    /// Each non-null field must equal the target's; null fields match anything.
    pub fn matches<T: OrgLocated + ?Sized>(&self, target: &T) -> bool {
        fn field_matches<I: PartialEq>(filter: Option<I>, value: Option<I>) -> bool {
            match filter {
                Some(expected) => value == Some(expected),
                None => true,
            }
        }

        field_matches(self.daerah_id, target.daerah_id())
            && field_matches(self.desa_id, target.desa_id())
            && field_matches(self.kelompok_id, target.kelompok_id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFilter {
    Unrestricted,
    Scoped(OrgFilter),
}

impl DataFilter {
    pub fn matches<T: OrgLocated + ?Sized>(&self, target: &T) -> bool {
        match self {
            DataFilter::Unrestricted => true,
            DataFilter::Scoped(filter) => filter.matches(target),
        }
    }

    /// Keep only the records this filter lets through.
    pub fn apply<'a, T: OrgLocated>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|r| self.matches(*r)).collect()
    }
}

impl Serialize for DataFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DataFilter::Unrestricted => serializer.serialize_map(Some(0))?.end(),
            DataFilter::Scoped(filter) => filter.serialize(serializer),
        }
    }
}

/// Derive the row filter for a profile.
pub fn get_data_filter(profile: &UserProfile) -> Option<DataFilter> {
    match profile.role {
        Role::Superadmin => Some(DataFilter::Unrestricted),
        Role::Admin => Some(DataFilter::Scoped(OrgFilter {
            daerah_id: profile.daerah_id,
            desa_id: profile.desa_id,
            kelompok_id: profile.kelompok_id,
        })),
        Role::Teacher | Role::Student | Role::MaterialCoordinator => None,
    }
}
