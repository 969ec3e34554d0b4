//! # Sekolah Models
//!
//! Plain data the access layer decides on. Nothing here talks to a database;
//! stores hand these snapshots in and decisions read them.
//!
//! # Modules
//!
//! - [`ids`]: Strongly-typed IDs for every entity and organisational tier
//! - [`roles`]: The closed [`Role`] enum
//! - [`org`]: Organisational scope resolution ([`OrgScope`], [`OrgLocated`])
//! - [`profiles`]: User profiles and permission flags
//! - [`students`]: Students with their organisational location
//! - [`meetings`]: Meetings and join-shape normalisation
//! - [`classes`]: Teacher ↔ class assignments
//!
//! # Example
//!
//! ```ignore
//! use sekolah_models::{Role, UserProfile, OrgScope};
//!
//! let profile = UserProfile::new(user_id, Role::Teacher).with_desa(desa_id);
//! assert_eq!(profile.org_scope(), OrgScope::Desa(desa_id));
//! ```

pub mod classes;
pub mod ids;
pub mod meetings;
pub mod org;
pub mod profiles;
pub mod roles;
pub mod students;

// Re-export commonly used types at crate root for convenience
pub use classes::{TeacherClass, TeacherClasses};
pub use ids::{ClassId, DaerahId, DesaId, KelompokId, MeetingId, StudentId, UserId};
pub use meetings::{MeetingOrgChain, MeetingRecord, OneOrMany};
pub use org::{OrgLocated, OrgScope, ScopeLevel};
pub use profiles::{PermissionFlags, UserProfile};
pub use roles::Role;
pub use students::{StudentStatus, StudentWithOrg};
