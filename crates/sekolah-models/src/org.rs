//! Organisational hierarchy: daerah ⊃ desa ⊃ kelompok.
//!
//! A profile's *scope* is the most specific tier it carries an ID for.
//! [`OrgScope`] captures that once so callers never re-derive it from three
//! nullable fields.

use crate::ids::{DaerahId, DesaId, KelompokId};
use serde::{Deserialize, Serialize};

/// Anything that sits at a place in the hierarchy (students, meetings).
pub trait OrgLocated {
    fn daerah_id(&self) -> Option<DaerahId>;
    fn desa_id(&self) -> Option<DesaId>;
    fn kelompok_id(&self) -> Option<KelompokId>;
}

/// Tier of a scope without the ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeLevel {
    Kelompok,
    Desa,
    Daerah,
}

impl ScopeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeLevel::Kelompok => "kelompok",
            ScopeLevel::Desa => "desa",
            ScopeLevel::Daerah => "daerah",
        }
    }
}

impl std::fmt::Display for ScopeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The organisational unit a profile has standing authority over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrgScope {
    Kelompok(KelompokId),
    Desa(DesaId),
    Daerah(DaerahId),
    Unscoped,
}

impl OrgScope {
    /// Resolve the scope from a set of organisational pointers.
    ///
    /// Checked kelompok, then desa, then daerah; the first present ID wins and
    /// the broader ones are ignored.
    pub fn resolve(
        daerah_id: Option<DaerahId>,
        desa_id: Option<DesaId>,
        kelompok_id: Option<KelompokId>,
    ) -> Self {
        if let Some(id) = kelompok_id {
            OrgScope::Kelompok(id)
        } else if let Some(id) = desa_id {
            OrgScope::Desa(id)
        } else if let Some(id) = daerah_id {
            OrgScope::Daerah(id)
        } else {
            OrgScope::Unscoped
        }
    }

    pub fn level(&self) -> Option<ScopeLevel> {
        match self {
            OrgScope::Kelompok(_) => Some(ScopeLevel::Kelompok),
            OrgScope::Desa(_) => Some(ScopeLevel::Desa),
            OrgScope::Daerah(_) => Some(ScopeLevel::Daerah),
            OrgScope::Unscoped => None,
        }
    }

    /// Whether `target` falls inside this scope.
    ///
    /// Only the scope-defining tier is compared. A target missing that tier's
    /// ID is outside every scope, and `Unscoped` contains nothing.
    pub fn contains<T: OrgLocated + ?Sized>(&self, target: &T) -> bool {
        match self {
            OrgScope::Kelompok(id) => target.kelompok_id() == Some(*id),
            OrgScope::Desa(id) => target.desa_id() == Some(*id),
            OrgScope::Daerah(id) => target.daerah_id() == Some(*id),
            OrgScope::Unscoped => false,
        }
    }
}

/// True when every set pointer has its parent set too (kelompok ⇒ desa ⇒ daerah).
pub fn is_chain_consistent(
    daerah_id: Option<DaerahId>,
    desa_id: Option<DesaId>,
    kelompok_id: Option<KelompokId>,
) -> bool {
    let desa_ok = desa_id.is_none() || daerah_id.is_some();
    let kelompok_ok = kelompok_id.is_none() || desa_id.is_some();
    desa_ok && kelompok_ok
}
