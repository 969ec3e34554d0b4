use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use sekolah_config::LoggingConfig;
use std::sync::OnceLock;

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if observability is enabled via OBSERVABILITY_ENABLED env var
pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED.get_or_init(|| LoggingConfig::from_env().observability_enabled)
}

/// Install the Prometheus recorder.
///
/// Returns `None` when observability is disabled or a recorder is already
/// installed.
pub fn init_metrics(config: &LoggingConfig) -> Option<PrometheusHandle> {
    let enabled = *OBSERVABILITY_ENABLED.get_or_init(|| config.observability_enabled);
    if !enabled {
        return None;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to install Prometheus recorder");
            None
        }
    }
}

/// Count one access decision.
pub fn track_access_decision(operation: &'static str, allowed: bool) {
    if !is_observability_enabled() {
        return;
    }
    let outcome = if allowed { "allow" } else { "deny" };
    counter!("access_decisions_total", "operation" => operation, "outcome" => outcome)
        .increment(1);
}

/// Count a collaborator lookup failure.
pub fn track_store_error(store: &'static str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("access_store_errors_total", "store" => store).increment(1);
}
