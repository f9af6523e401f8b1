//! Read-only controller façade consumed by renderers and HUDs.

use crate::systems::combat::{CombatEvent, CombatPhase, CombatState};
use crate::systems::motion::MotionState;
use glam::{Quat, Vec2, Vec3};

/// Snapshot of the controller after the last update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControllerState {
    pub position: Vec3,
    pub facing: Quat,
    pub motion: MotionState,
    pub combat: CombatState,
    pub zoom_target: f32,
    /// Controller clock (seconds since construction).
    pub now: f64,
}

impl ControllerState {
    #[inline]
    #[must_use]
    pub fn phase(&self) -> CombatPhase {
        self.combat.phase()
    }
    #[inline]
    #[must_use]
    pub fn anim_blend(&self) -> Vec2 {
        self.motion.current_anim_blend
    }
}

/// What one `update` did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameEffects {
    /// Displacement handed to the mover this frame.
    pub displacement: Vec3,
    /// Grounded flag read from the mover before the vertical update.
    pub grounded: bool,
    pub target_speed: f32,
    pub blend_target: Vec2,
    pub combat_events: Vec<CombatEvent>,
}

impl FrameEffects {
    #[must_use]
    pub fn attacked(&self) -> bool {
        self.combat_events.contains(&CombatEvent::AttackTriggered)
    }
}
