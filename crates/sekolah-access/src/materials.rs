//! Material management gates.
//!
//! The two grants are independent: the flag does not imply the role and the
//! role does not imply the flag. Callers that accept either must combine them.

use sekolah_models::{Role, UserProfile};

/// True iff the profile carries the explicit `can_manage_materials` flag.
pub fn can_manage_materials(profile: Option<&UserProfile>) -> bool {
    profile.is_some_and(|p| p.permissions.can_manage_materials)
}

pub fn is_material_coordinator(profile: Option<&UserProfile>) -> bool {
    profile.is_some_and(|p| p.role == Role::MaterialCoordinator)
}
