//! Feature name constants for the admin feature gate.
//!
//! Feature names are plain strings so that callers can pass whatever the
//! navigation layer asks about. Only the names listed in [`ADMIN_FEATURES`]
//! are ever granted to admins; anything else, including names added later,
//! is denied until it is added here.
//!
//! # Example
//!
//! ```ignore
//! use sekolah_core::features;
//!
//! if can_access_feature(&profile, features::ORGANISASI) {
//!     // render the organisation page
//! }
//! ```

/// Dashboard overview
pub const DASHBOARD: &str = "dashboard";
/// Organisation hierarchy management (daerah, desa, kelompok)
pub const ORGANISASI: &str = "organisasi";
/// User management
pub const USERS: &str = "users";
/// Class master (template) management
pub const MANAGE_CLASS_MASTERS: &str = "manage_class_masters";
/// Class management
pub const MANAGE_CLASSES: &str = "manage_classes";

/// Closed allowlist of features an admin may open.
pub const ADMIN_FEATURES: [&str; 5] = [
    DASHBOARD,
    ORGANISASI,
    USERS,
    MANAGE_CLASS_MASTERS,
    MANAGE_CLASSES,
];

/// Check whether a feature name is on the admin allowlist.
///
/// Matching is exact: no case folding, no prefix matching.
pub fn is_admin_feature(feature: &str) -> bool {
    ADMIN_FEATURES.contains(&feature)
}
