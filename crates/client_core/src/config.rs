//! Per-character motion tuning, fixed at construction.

use data_runtime::configs::character_motion::CharacterMotionCfg;
use thiserror::Error;

/// Move-axis magnitude below which input is treated as stick drift.
pub const MOVE_DEAD_ZONE: f32 = 0.1;
/// Smoothing window (seconds) of the locomotion blend spring.
pub const ANIM_BLEND_SMOOTH_TIME: f32 = 0.1;
pub const SPRINT_BLEND_WEIGHT: f32 = 1.0;
pub const WALK_BLEND_WEIGHT: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionConfig {
    pub walk_speed: f32,
    pub run_speed: f32,
    /// Slerp factor per second toward the cursor facing.
    pub rotation_speed: f32,
    /// Fall acceleration (negative is down).
    pub gravity: f32,
    /// Vertical velocity held while grounded (small, negative).
    pub grounded_stick_bias: f32,
    pub zoom_speed: f32,
    pub zoom_damping: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    /// Initial zoom target; clamped into `[min_zoom, max_zoom]`.
    pub start_zoom: f32,
    pub combat_stance_secs: f32,
    pub start_armed: bool,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            walk_speed: 3.5,
            run_speed: 6.0,
            rotation_speed: 15.0,
            gravity: -9.81,
            grounded_stick_bias: -2.0,
            zoom_speed: 2.0,
            zoom_damping: 8.0,
            min_zoom: 3.0,
            max_zoom: 12.0,
            start_zoom: 8.5,
            combat_stance_secs: 5.0,
            start_armed: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be finite (got {value})")]
    NotFinite { field: &'static str, value: f32 },
    #[error("{field} must be >= 0 (got {value})")]
    Negative { field: &'static str, value: f32 },
    #[error("min_zoom {min} exceeds max_zoom {max}")]
    ZoomBounds { min: f32, max: f32 },
}

impl MotionConfig {
    /// Build from loaded tuning data, filling gaps with defaults.
    pub fn from_cfg(cfg: &CharacterMotionCfg) -> Result<Self, ConfigError> {
        let d = Self::default();
        let out = Self {
            walk_speed: cfg.walk_speed.unwrap_or(d.walk_speed),
            run_speed: cfg.run_speed.unwrap_or(d.run_speed),
            rotation_speed: cfg.rotation_speed.unwrap_or(d.rotation_speed),
            gravity: cfg.gravity.unwrap_or(d.gravity),
            grounded_stick_bias: cfg.grounded_stick_bias.unwrap_or(d.grounded_stick_bias),
            zoom_speed: cfg.zoom_speed.unwrap_or(d.zoom_speed),
            zoom_damping: cfg.zoom_damping.unwrap_or(d.zoom_damping),
            min_zoom: cfg.min_zoom.unwrap_or(d.min_zoom),
            max_zoom: cfg.max_zoom.unwrap_or(d.max_zoom),
            start_zoom: cfg.start_zoom.unwrap_or(d.start_zoom),
            combat_stance_secs: cfg.combat_stance_secs.unwrap_or(d.combat_stance_secs),
            start_armed: cfg.start_armed.unwrap_or(d.start_armed),
        };
        out.validate()?;
        Ok(out)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let all = [
            ("walk_speed", self.walk_speed),
            ("run_speed", self.run_speed),
            ("rotation_speed", self.rotation_speed),
            ("gravity", self.gravity),
            ("grounded_stick_bias", self.grounded_stick_bias),
            ("zoom_speed", self.zoom_speed),
            ("zoom_damping", self.zoom_damping),
            ("min_zoom", self.min_zoom),
            ("max_zoom", self.max_zoom),
            ("start_zoom", self.start_zoom),
            ("combat_stance_secs", self.combat_stance_secs),
        ];
        for (field, value) in all {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }
        let non_negative = [
            ("walk_speed", self.walk_speed),
            ("run_speed", self.run_speed),
            ("rotation_speed", self.rotation_speed),
            ("zoom_speed", self.zoom_speed),
            ("zoom_damping", self.zoom_damping),
            ("combat_stance_secs", self.combat_stance_secs),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if self.min_zoom > self.max_zoom {
            return Err(ConfigError::ZoomBounds {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(MotionConfig::default().validate(), Ok(()));
    }

    #[test]
    fn inverted_zoom_bounds_rejected() {
        let cfg = MotionConfig {
            min_zoom: 10.0,
            max_zoom: 2.0,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::ZoomBounds { .. })));
    }

    #[test]
    fn negative_duration_rejected() {
        let cfg = MotionConfig {
            combat_stance_secs: -1.0,
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::Negative {
                field: "combat_stance_secs",
                value: -1.0
            })
        );
    }

    #[test]
    fn from_cfg_fills_gaps() {
        let cfg = CharacterMotionCfg {
            run_speed: Some(9.0),
            ..Default::default()
        };
        let m = MotionConfig::from_cfg(&cfg).expect("valid");
        assert_eq!(m.run_speed, 9.0);
        assert_eq!(m.walk_speed, MotionConfig::default().walk_speed);
    }

    #[test]
    fn from_cfg_rejects_nan() {
        let cfg = CharacterMotionCfg {
            gravity: Some(f32::NAN),
            ..Default::default()
        };
        assert!(matches!(
            MotionConfig::from_cfg(&cfg),
            Err(ConfigError::NotFinite { field: "gravity", .. })
        ));
    }
}
