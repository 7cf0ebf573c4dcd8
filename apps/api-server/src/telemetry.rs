//! Telemetry initialization - tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info,api_server=debug,board_infra=debug,board_core=debug";

/// Log output settings.
#[derive(Debug, Clone, Default)]
pub struct TelemetryConfig {
    /// One JSON object per line instead of human-readable output.
    pub json_logs: bool,
}

impl TelemetryConfig {
    /// `LOG_FORMAT=json` selects JSON output.
    pub fn from_env() -> Self {
        Self {
            json_logs: std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json")),
        }
    }
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_telemetry(config: &TelemetryConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(config.json_logs.then(|| fmt::layer().json()))
        .with((!config.json_logs).then(|| fmt::layer().pretty()))
        .init();

    tracing::debug!(json_logs = config.json_logs, "Telemetry initialized");
}
