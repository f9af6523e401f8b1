//! Scroll zoom: a clamped target distance and a damped live boom distance.

use crate::facade::collaborators::ZoomRig;

/// Target boom distance, always inside `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomState {
    target_distance: f32,
}

impl ZoomState {
    #[must_use]
    pub fn new(start: f32, min: f32, max: f32) -> Self {
        Self {
            target_distance: start.clamp(min, max),
        }
    }

    #[must_use]
    pub fn target_distance(&self) -> f32 {
        self.target_distance
    }

    /// Scroll up (positive delta) pulls the camera in.
    pub fn apply_scroll(&mut self, delta: f32, zoom_speed: f32, min: f32, max: f32) {
        let next = (self.target_distance - delta * zoom_speed).clamp(min, max);
        if !next.is_nan() {
            self.target_distance = next;
        }
    }
}

/// Exponential approach of `live` toward `target` by factor `damping * dt`.
#[must_use]
pub fn damp_distance(live: f32, target: f32, damping: f32, dt: f32) -> f32 {
    let t = (damping * dt).clamp(0.0, 1.0);
    live + (target - live) * t
}

/// Damp the rig's live distance toward the current target.
pub fn drive_rig(rig: &mut dyn ZoomRig, state: &ZoomState, damping: f32, dt: f32) {
    let live = damp_distance(rig.distance(), state.target_distance(), damping, dt);
    rig.set_distance(live);
}
