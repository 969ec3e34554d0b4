//! Error types for the collaborator boundary.
//!
//! Decision functions never fail; they deny. Errors only exist where the
//! access layer talks to the stores that hand it profiles and meetings.

/// Error returned by profile and meeting stores.
///
/// The access layer treats every variant the same way as "record not found":
/// the decision that needed the record is denied.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store backend error: {0}")]
    Backend(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}
