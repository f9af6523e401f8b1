//! Client-side telemetry init (pretty logs by default, JSON on request).

use data_runtime::configs::telemetry::TelemetryCfg;

/// Install the global tracing subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init_client_telemetry(cfg: &TelemetryCfg) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};
    let filter = EnvFilter::try_new(&cfg.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = if cfg.json_logs {
        fmt::layer().json().boxed()
    } else {
        fmt::layer().pretty().boxed()
    };
    let registry = tracing_subscriber::registry().with(filter).with(fmt_layer);
    let _ = registry.try_init();
}
