//! Logging configuration.
//!
//! # Environment Variables
//!
//! - `LOG_LEVEL`: Level for Sekolah crates (default: `info`)
//! - `LOG_FORMAT`: `compact` or `json` (default: `compact`)
//! - `OBSERVABILITY_ENABLED`: Enables decision metrics (default: `true`)

use std::env;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compact" | "text" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("Unknown log format: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub observability_enabled: bool,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            level: lookup("LOG_LEVEL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| "info".to_string()),
            // An unrecognised format falls back to compact rather than failing startup
            format: lookup("LOG_FORMAT")
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            observability_enabled: lookup("OBSERVABILITY_ENABLED")
                .map(|v| crate::parse_flag(&v))
                .unwrap_or(true),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
            observability_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(LoggingConfig::from_lookup(|_| None), LoggingConfig::default());
    }

    #[test]
    fn test_json_format_and_disabled_observability() {
        let config = LoggingConfig::from_lookup(|key| match key {
            "LOG_LEVEL" => Some("debug".to_string()),
            "LOG_FORMAT" => Some("JSON".to_string()),
            "OBSERVABILITY_ENABLED" => Some("false".to_string()),
            _ => None,
        });
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, LogFormat::Json);
        assert!(!config.observability_enabled);
    }

    #[test]
    fn test_unknown_format_falls_back() {
        let config = LoggingConfig::from_lookup(|key| {
            (key == "LOG_FORMAT").then(|| "xml".to_string())
        });
        assert_eq!(config.format, LogFormat::Compact);
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
