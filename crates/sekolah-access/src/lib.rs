//! # Sekolah Access
//!
//! Hierarchical access-control decisions.
//!
//! Every function here is a predicate over already-loaded snapshots, except
//! [`can_edit_or_delete_meeting`], which first fetches the meeting and the
//! caller's profile through the [`store`] traits. None of them return errors:
//! missing or ambiguous information always resolves to a deny.
//!
//! - [`scope`]: teacher scope resolution
//! - [`students`]: student access and lifecycle actions
//! - [`features`]: role → feature allowlist
//! - [`filter`]: row filters for data-access callers
//! - [`meetings`]: meeting edit/delete authorisation
//! - [`attendance`]: per-record attendance edits
//! - [`materials`]: material management gates
//! - [`store`]: collaborator traits and the in-memory store
//!
//! # Example
//!
//! ```ignore
//! use sekolah_access::{can_teacher_access_student, get_data_filter, DataFilter};
//!
//! if can_teacher_access_student(&teacher, &student) {
//!     // show the student
//! }
//!
//! match get_data_filter(&profile) {
//!     None => { /* no queryable access */ }
//!     Some(DataFilter::Unrestricted) => { /* all rows */ }
//!     Some(filter) => { rows.retain(|r| filter.matches(r)); }
//! }
//! ```

pub mod attendance;
pub mod features;
pub mod filter;
pub mod materials;
pub mod meetings;
pub mod scope;
pub mod store;
pub mod students;

// Re-export the decision surface at crate root
pub use attendance::{can_edit_attendance_record, can_user_edit_meeting_attendance};
pub use features::can_access_feature;
pub use filter::{DataFilter, OrgFilter, get_data_filter};
pub use materials::{can_manage_materials, is_material_coordinator};
pub use meetings::{admin_covers_meeting, can_edit_or_delete_meeting, evaluate_meeting_edit};
pub use scope::{
    get_teacher_scope, is_hierarchical_teacher, is_teacher_daerah, is_teacher_desa,
    is_teacher_kelompok,
};
pub use store::{Dataset, InMemoryStore, MeetingStore, ProfileStore};
pub use students::{StudentAction, can_perform_student_action, can_teacher_access_student};
