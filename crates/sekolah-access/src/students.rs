//! Student access.
//!
//! Broader scopes subsume narrower ones: a desa-scoped teacher reaches every
//! kelompok inside that desa. The comparison is always on the single ID that
//! defines the scope, never on several tiers at once.

use crate::filter::get_data_filter;
use sekolah_models::{OrgScope, PermissionFlags, Role, StudentWithOrg, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Whether a teacher may read or act on a student.
pub fn can_teacher_access_student(teacher: &UserProfile, student: &StudentWithOrg) -> bool {
    match teacher.role {
        Role::Teacher => teacher.org_scope().contains(student),
        Role::Superadmin | Role::Admin | Role::Student | Role::MaterialCoordinator => false,
    }
}

/// Lifecycle actions on a student record, each behind its own permission flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudentAction {
    Archive,
    Transfer,
    SoftDelete,
    HardDelete,
}

impl StudentAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            StudentAction::Archive => "archive",
            StudentAction::Transfer => "transfer",
            StudentAction::SoftDelete => "soft_delete",
            StudentAction::HardDelete => "hard_delete",
        }
    }

    /// The flag that opts a profile into this action.
    pub fn is_granted_by(&self, flags: &PermissionFlags) -> bool {
        match self {
            StudentAction::Archive => flags.can_archive_students,
            StudentAction::Transfer => flags.can_transfer_students,
            StudentAction::SoftDelete => flags.can_soft_delete_students,
            StudentAction::HardDelete => flags.can_hard_delete_students,
        }
    }
}

/// Whether `profile` may perform `action` on `student`.
///
/// Superadmins always may. Admins and teachers need the action's flag and the
/// student inside their scope; an admin with no organisation pointers has no
/// scope and is denied. A soft-deleted student can only be hard-deleted.
pub fn can_perform_student_action(
    profile: &UserProfile,
    student: &StudentWithOrg,
    action: StudentAction,
) -> bool {
    if student.is_soft_deleted() && action != StudentAction::HardDelete {
        debug!(
            student_id = %student.id,
            action = action.as_str(),
            "Student already soft-deleted"
        );
        return false;
    }

    match profile.role {
        Role::Superadmin => true,
        Role::Admin => {
            if profile.org_scope() == OrgScope::Unscoped {
                debug!(user_id = %profile.id, "Admin has no organisation scope");
                return false;
            }
            action.is_granted_by(&profile.permissions)
                && get_data_filter(profile).is_some_and(|filter| filter.matches(student))
        }
        Role::Teacher => {
            action.is_granted_by(&profile.permissions)
                && can_teacher_access_student(profile, student)
        }
        Role::Student | Role::MaterialCoordinator => false,
    }
}
