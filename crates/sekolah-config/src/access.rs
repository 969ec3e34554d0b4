//! Access layer configuration.
//!
//! # Environment Variables
//!
//! - `SEKOLAH_DATASET`: Path to the JSON dataset served by the in-memory store
//!   (default: `data/dataset.json`)
//! - `SEKOLAH_STRICT_CHAIN`: Reject datasets containing profiles whose
//!   daerah/desa/kelompok pointers do not form a chain (default: `false`,
//!   such profiles are only logged)

use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATASET_PATH: &str = "data/dataset.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessConfig {
    pub dataset_path: PathBuf,
    pub strict_chain: bool,
}

impl AccessConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            dataset_path: lookup("SEKOLAH_DATASET")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_PATH)),
            strict_chain: lookup("SEKOLAH_STRICT_CHAIN")
                .map(|v| crate::parse_flag(&v))
                .unwrap_or(false),
        }
    }
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            strict_chain: false,
        }
    }
}
