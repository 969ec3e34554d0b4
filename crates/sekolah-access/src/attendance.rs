//! Per-record attendance edit checks.
//!
//! Within one meeting, a plain teacher who did not create it may only touch
//! attendance for students in classes they are directly assigned to.

use crate::scope::is_hierarchical_teacher;
use sekolah_models::{ClassId, MeetingOrgChain, Role, TeacherClasses, UserProfile};

/// Whether a user may edit one student's attendance record in a meeting.
///
/// `is_hierarchical_teacher` is precomputed by the caller (see
/// [`crate::scope::is_hierarchical_teacher`]).
pub fn can_user_edit_meeting_attendance(
    user_role: Role,
    is_meeting_creator: bool,
    student_class_id: ClassId,
    user_class_ids: &[ClassId],
    is_hierarchical_teacher: bool,
) -> bool {
    match user_role {
        Role::Superadmin | Role::Admin => true,
        Role::Student => false,
        Role::Teacher | Role::MaterialCoordinator => {
            is_hierarchical_teacher
                || is_meeting_creator
                || user_class_ids.contains(&student_class_id)
        }
    }
}

/// Same decision, with creator status, class assignments and teacher scope
/// derived from loaded records.
///
/// A student without a class can still be edited by anyone the first three
/// rules let through, but never through class membership.
pub fn can_edit_attendance_record(
    profile: &UserProfile,
    meeting: &MeetingOrgChain,
    assignments: &TeacherClasses,
    student_class_id: Option<ClassId>,
) -> bool {
    let is_creator = meeting.teacher_id == profile.id;
    let hierarchical = is_hierarchical_teacher(profile);
    let user_class_ids = assignments.class_ids_for(profile.id);

    match student_class_id {
        Some(class_id) => can_user_edit_meeting_attendance(
            profile.role,
            is_creator,
            class_id,
            &user_class_ids,
            hierarchical,
        ),
        None => match profile.role {
            Role::Superadmin | Role::Admin => true,
            Role::Student => false,
            Role::Teacher | Role::MaterialCoordinator => hierarchical || is_creator,
        },
    }
}
