//! # Sekolah
//!
//! Hierarchical access control for a daerah → desa → kelompok → kelas
//! organisation.
//!
//! ## Overview
//!
//! Given a user's profile and a target record, decide what organisational
//! scope the user's role grants and whether that scope permits reading,
//! editing or deleting the target. Storage, routing and rendering live
//! elsewhere; records come in through the [`access::ProfileStore`] and
//! [`access::MeetingStore`] traits or as already-loaded snapshots.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── sekolah-core/           # StoreError, feature names
//! ├── sekolah-models/         # IDs, roles, profiles, students, meetings
//! ├── sekolah-access/         # Decisions + collaborator traits
//! ├── sekolah-config/         # Environment configuration
//! ├── sekolah-observability/  # Logging and decision metrics
//! └── sekolah-cli/            # sekolah-cli binary and dataset seeder
//! ```
//!
//! ## Roles
//!
//! | Role | Scope |
//! |------|-------|
//! | Superadmin | Everything |
//! | Admin | The daerah/desa/kelompok on their profile |
//! | Teacher | Most specific tier on their profile; kelompok before desa before daerah |
//! | Material coordinator | Material management; attendance like a teacher |
//! | Student | Nothing |
//!
//! ## Example
//!
//! ```ignore
//! use sekolah::access::{can_edit_or_delete_meeting, InMemoryStore, Dataset};
//!
//! let store = InMemoryStore::from_dataset(Dataset::load("data/dataset.json").await?);
//! if can_edit_or_delete_meeting(&store, &store, meeting_id, user_id).await {
//!     // show the edit button
//! }
//! ```

pub use sekolah_access as access;
pub use sekolah_config as config;
pub use sekolah_core as shared;
pub use sekolah_models as models;
pub use sekolah_observability as observability;

pub use sekolah_access::{DataFilter, InMemoryStore, OrgFilter, StudentAction};
pub use sekolah_core::StoreError;
pub use sekolah_models::{
    MeetingOrgChain, OrgScope, PermissionFlags, Role, ScopeLevel, StudentWithOrg, UserProfile,
};
