//! Log output settings from data/config/telemetry.toml.
//!
//! `LOG_LEVEL` takes a tracing filter directive (e.g. `info,controls=trace`)
//! and `JSON_LOGS` switches to JSON lines; both win over the file.

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TelemetryCfg {
    /// Filter directive, e.g. `info` or `warn,combat=debug`.
    pub log_level: String,
    pub json_logs: bool,
}

impl Default for TelemetryCfg {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

pub fn load_default() -> Result<TelemetryCfg> {
    let mut cfg: TelemetryCfg = crate::loader::read_config_toml("config/telemetry.toml")?;
    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok());
    Ok(cfg)
}

fn apply_env_overrides(cfg: &mut TelemetryCfg, var: impl Fn(&str) -> Option<String>) {
    if let Some(level) = var("LOG_LEVEL").filter(|v| !v.trim().is_empty()) {
        cfg.log_level = level;
    }
    if let Some(json) = var("JSON_LOGS").as_deref().and_then(parse_flag) {
        cfg.json_logs = json;
    }
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
