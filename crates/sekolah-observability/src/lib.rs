//! Sekolah Observability Module
//!
//! - Console logging (compact or JSON) via `tracing-subscriber`
//! - Access decision metrics via Prometheus
//!
//! Metrics can be disabled at compile time via the `observability` feature
//! flag and at runtime via the `OBSERVABILITY_ENABLED` environment variable.
//! Logging is always available.
//!
//! # Examples
//!
//! ```no_run
//! use sekolah_config::LoggingConfig;
//! use sekolah_observability::{init_metrics, init_tracing, track_access_decision};
//!
//! let config = LoggingConfig::from_env();
//! init_tracing(&config);
//! let handle = init_metrics(&config);
//! track_access_decision("feature", true);
//! ```

pub mod basic_logging;
#[cfg(feature = "observability")]
pub mod metrics;

pub use basic_logging::{init_basic_console_logging, init_tracing};

#[cfg(feature = "observability")]
pub use metrics_exporter_prometheus::PrometheusHandle;

#[cfg(feature = "observability")]
pub use self::metrics::{
    init_metrics, is_observability_enabled, track_access_decision, track_store_error,
};

// No-op stubs when observability is disabled
#[cfg(not(feature = "observability"))]
pub mod stubs {
    use sekolah_config::LoggingConfig;

    /// Placeholder handle so callers compile without the feature.
    #[derive(Clone, Debug)]
    pub struct PrometheusHandle;

    impl PrometheusHandle {
        pub fn render(&self) -> String {
            String::new()
        }
    }

    pub fn is_observability_enabled() -> bool {
        false
    }

    pub fn init_metrics(_config: &LoggingConfig) -> Option<PrometheusHandle> {
        None
    }

    pub fn track_access_decision(_operation: &'static str, _allowed: bool) {}
    pub fn track_store_error(_store: &'static str) {}
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;
