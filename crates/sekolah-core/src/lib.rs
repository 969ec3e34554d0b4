//! # Sekolah Core
//!
//! Foundational types shared by every Sekolah crate:
//!
//! - [`errors`]: Collaborator (store) error type
//! - [`features`]: Feature names and the admin feature allowlist
//! - [`serde`]: Custom serde deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use sekolah_core::{StoreError, features};
//!
//! let err = StoreError::backend("profile lookup failed");
//! assert!(features::is_admin_feature(features::DASHBOARD));
//! ```

pub mod errors;
pub mod features;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::StoreError;
