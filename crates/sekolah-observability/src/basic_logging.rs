use sekolah_config::{LogFormat, LoggingConfig};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set: Sekolah crates at the configured
/// level, everything else at `warn`.
pub fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,sekolah={level},sekolah_access={level},sekolah_cli={level},sekolah_models={level}"
        ))
    })
}

/// Initialize console logging.
///
/// - **Log Level**: `LOG_LEVEL` (default: "info"), overridden by `RUST_LOG`
/// - **Format**: compact with file/line, or one JSON object per line
/// - **Output**: stderr, so command output on stdout stays machine-readable
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = default_filter(&config.level);

    let result = match config.format {
        LogFormat::Compact => {
            let console_layer = fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter);
            tracing_subscriber::registry().with(console_layer).try_init()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(true)
                .with_span_list(true)
                .with_filter(filter);
            tracing_subscriber::registry().with(json_layer).try_init()
        }
    };

    if result.is_ok() {
        tracing::debug!(format = ?config.format, level = %config.level, "Logging initialized");
    }
}

/// Initialize console logging straight from the environment.
pub fn init_basic_console_logging() {
    init_tracing(&LoggingConfig::from_env());
}
