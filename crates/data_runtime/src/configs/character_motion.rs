//! Character motion tuning loaded from data/config/character_motion.toml.
//!
//! Every field is optional; gaps are filled with controller defaults by the
//! consumer (`client_core::config::MotionConfig::from_cfg`).

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CharacterMotionCfg {
    pub walk_speed: Option<f32>,
    pub run_speed: Option<f32>,
    pub rotation_speed: Option<f32>,
    /// Fall acceleration (m/s², negative is down).
    pub gravity: Option<f32>,
    /// Vertical velocity applied while grounded to keep contact on slopes.
    pub grounded_stick_bias: Option<f32>,
    pub zoom_speed: Option<f32>,
    pub zoom_damping: Option<f32>,
    pub min_zoom: Option<f32>,
    pub max_zoom: Option<f32>,
    pub start_zoom: Option<f32>,
    pub combat_stance_secs: Option<f32>,
    pub start_armed: Option<bool>,
}

/// Parse a tuning file from an explicit path (no env overrides).
pub fn load_from(path: &Path) -> Result<CharacterMotionCfg> {
    let txt = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str::<CharacterMotionCfg>(&txt).context("parse character_motion TOML")
}

/// Load `data/config/character_motion.toml` (defaults when absent) and apply
/// env overrides for quick tuning.
pub fn load_default() -> Result<CharacterMotionCfg> {
    let mut cfg: CharacterMotionCfg = crate::loader::read_config_toml("config/character_motion.toml")?;
    apply_env_overrides(&mut cfg);
    Ok(cfg)
}

fn env_f32(key: &str) -> Option<f32> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

fn apply_env_overrides(cfg: &mut CharacterMotionCfg) {
    if let Some(v) = env_f32("WALK_SPEED") {
        cfg.walk_speed = Some(v);
    }
    if let Some(v) = env_f32("RUN_SPEED") {
        cfg.run_speed = Some(v);
    }
    if let Some(v) = env_f32("ROTATION_SPEED") {
        cfg.rotation_speed = Some(v);
    }
    if let Some(v) = env_f32("GRAVITY") {
        cfg.gravity = Some(v);
    }
    if let Some(v) = env_f32("COMBAT_STANCE_SECS") {
        cfg.combat_stance_secs = Some(v);
    }
    if let Some(v) = env_f32("MIN_ZOOM") {
        cfg.min_zoom = Some(v);
    }
    if let Some(v) = env_f32("MAX_ZOOM") {
        cfg.max_zoom = Some(v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_leaves_other_fields_unset() {
        let cfg: CharacterMotionCfg = toml::from_str("walk_speed = 4.0\nstart_armed = true\n").expect("parse");
        assert_eq!(cfg.walk_speed, Some(4.0));
        assert_eq!(cfg.start_armed, Some(true));
        assert!(cfg.run_speed.is_none());
        assert!(cfg.min_zoom.is_none());
    }
}
