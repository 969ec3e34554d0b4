//! User profiles.
//!
//! A profile is the snapshot the access layer decides on: role, organisational
//! pointers and the granular permission flags an admin may hand out.

use crate::ids::{DaerahId, DesaId, KelompokId, UserId};
use crate::org::{OrgScope, is_chain_consistent};
use crate::roles::Role;
use sekolah_core::serde::deserialize_optional_id;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Granular, opt-in permission flags.
///
/// Every flag defaults to `false` when missing from the stored profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PermissionFlags {
    pub can_archive_students: bool,
    pub can_transfer_students: bool,
    pub can_soft_delete_students: bool,
    pub can_hard_delete_students: bool,
    pub can_manage_materials: bool,
}

/// An authenticated user's profile.
///
/// The organisational pointers are expected to form a chain
/// (kelompok ⇒ desa ⇒ daerah). Decisions do not enforce it; run
/// [`Validate::validate`] when loading profiles to catch broken rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_org_chain"))]
pub struct UserProfile {
    pub id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub role: Role,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub daerah_id: Option<DaerahId>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub desa_id: Option<DesaId>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub kelompok_id: Option<KelompokId>,
    #[serde(flatten)]
    pub permissions: PermissionFlags,
}

impl UserProfile {
    /// Profile with the given role and no organisational pointers or flags.
    pub fn new(id: UserId, role: Role) -> Self {
        Self {
            id,
            full_name: None,
            role,
            daerah_id: None,
            desa_id: None,
            kelompok_id: None,
            permissions: PermissionFlags::default(),
        }
    }

    pub fn with_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn with_daerah(mut self, daerah_id: DaerahId) -> Self {
        self.daerah_id = Some(daerah_id);
        self
    }

    pub fn with_desa(mut self, desa_id: DesaId) -> Self {
        self.desa_id = Some(desa_id);
        self
    }

    pub fn with_kelompok(mut self, kelompok_id: KelompokId) -> Self {
        self.kelompok_id = Some(kelompok_id);
        self
    }

    pub fn with_permissions(mut self, permissions: PermissionFlags) -> Self {
        self.permissions = permissions;
        self
    }

    /// Most specific organisational unit this profile points at.
    ///
    /// This is purely positional; whether the role actually carries authority
    /// at that scope is for the decision functions to say.
    pub fn org_scope(&self) -> OrgScope {
        OrgScope::resolve(self.daerah_id, self.desa_id, self.kelompok_id)
    }

    pub fn has_consistent_chain(&self) -> bool {
        is_chain_consistent(self.daerah_id, self.desa_id, self.kelompok_id)
    }
}

fn validate_org_chain(profile: &UserProfile) -> Result<(), ValidationError> {
    if profile.has_consistent_chain() {
        Ok(())
    } else {
        let mut err = ValidationError::new("org_chain");
        err.message = Some("kelompok requires desa and desa requires daerah".into());
        Err(err)
    }
}
