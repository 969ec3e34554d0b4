//! Teacher scope resolution.
//!
//! A teacher's scope is the most specific organisational tier on their
//! profile: kelompok, then desa, then daerah. Only teachers have a teacher
//! scope; every other role resolves to `None`.

use sekolah_models::{Role, ScopeLevel, UserProfile};

/// Organisational tier a teacher is authorised at, if any.
pub fn get_teacher_scope(profile: &UserProfile) -> Option<ScopeLevel> {
    match profile.role {
        Role::Teacher => profile.org_scope().level(),
        Role::Superadmin | Role::Admin | Role::Student | Role::MaterialCoordinator => None,
    }
}

pub fn is_teacher_kelompok(profile: &UserProfile) -> bool {
    get_teacher_scope(profile) == Some(ScopeLevel::Kelompok)
}

pub fn is_teacher_desa(profile: &UserProfile) -> bool {
    get_teacher_scope(profile) == Some(ScopeLevel::Desa)
}

pub fn is_teacher_daerah(profile: &UserProfile) -> bool {
    get_teacher_scope(profile) == Some(ScopeLevel::Daerah)
}

/// A teacher scoped wider than a single kelompok (desa or daerah).
pub fn is_hierarchical_teacher(profile: &UserProfile) -> bool {
    matches!(
        get_teacher_scope(profile),
        Some(ScopeLevel::Desa | ScopeLevel::Daerah)
    )
}
