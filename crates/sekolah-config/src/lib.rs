//! # Sekolah Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`access`]: Dataset location and profile validation policy
//! - [`logging`]: Log level, log format and the observability switch
//!
//! # Example
//!
//! ```ignore
//! use sekolah_config::{AccessConfig, LoggingConfig};
//!
//! dotenvy::dotenv().ok();
//! let access = AccessConfig::from_env();
//! let logging = LoggingConfig::from_env();
//! ```

pub mod access;
pub mod logging;

// Re-export commonly used types at crate root
pub use access::AccessConfig;
pub use logging::{LogFormat, LoggingConfig};

/// Parse a boolean environment value; anything but `false`/`0`/`no`/`off` is true.
pub(crate) fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}
