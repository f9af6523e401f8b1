//! Parameter-block implementations of the output sinks.
//!
//! Hosts without their own animator/visual layer can use these directly and
//! read the values back when rendering.

use crate::facade::collaborators::{AnimationSink, WeaponTrail, WeaponVisual};
use glam::Vec3;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimParams {
    pub move_x: f32,
    pub move_z: f32,
    pub in_combat: bool,
    /// Attack triggers fired and not yet consumed.
    pub pending_attacks: u32,
}

impl AnimParams {
    /// Consume one pending attack trigger, as an animator does when it
    /// starts the attack clip.
    pub fn take_attack(&mut self) -> bool {
        if self.pending_attacks == 0 {
            return false;
        }
        self.pending_attacks -= 1;
        true
    }
}

impl AnimationSink for AnimParams {
    fn set_move_blend(&mut self, x: f32, z: f32) {
        self.move_x = x;
        self.move_z = z;
    }
    fn set_in_combat(&mut self, in_combat: bool) {
        self.in_combat = in_combat;
    }
    fn trigger_attack(&mut self) {
        self.pending_attacks += 1;
    }
}

/// The two weapon attachment points; exactly one shows the weapon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeaponSockets {
    pub in_hand: bool,
    pub sheathed: bool,
}

impl WeaponSockets {
    #[must_use]
    pub fn new(armed: bool) -> Self {
        Self {
            in_hand: armed,
            sheathed: !armed,
        }
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        usize::from(self.in_hand) + usize::from(self.sheathed)
    }
}

impl WeaponVisual for WeaponSockets {
    fn set_armed(&mut self, armed: bool) {
        self.in_hand = armed;
        self.sheathed = !armed;
    }
}

/// Trail emitter that records blade tip samples while emitting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrailFx {
    pub emitting: bool,
    pub points: Vec<Vec3>,
}

impl TrailFx {
    /// Record a blade tip sample; ignored unless emitting.
    pub fn sample(&mut self, tip: Vec3) {
        if self.emitting {
            self.points.push(tip);
        }
    }
}

impl WeaponTrail for TrailFx {
    fn clear(&mut self) {
        self.points.clear();
    }
    fn set_emitting(&mut self, emitting: bool) {
        self.emitting = emitting;
    }
}
