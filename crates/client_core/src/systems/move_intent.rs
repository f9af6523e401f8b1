//! Camera-relative locomotion: ground basis, dead zone, speed selection and
//! the per-frame displacement handed to the mover.

use crate::config::{MOVE_DEAD_ZONE, MotionConfig};
use glam::{Vec2, Vec3};

/// Movement basis on the ground plane (world XZ, `y == 0`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundBasis {
    pub fwd: Vec3,
    pub right: Vec3,
}

/// Flatten the camera basis onto the ground plane and renormalize.
/// A camera looking straight down yields a zero forward axis.
#[must_use]
pub fn basis_from_camera(cam_fwd: Vec3, cam_right: Vec3) -> GroundBasis {
    let flat = |v: Vec3| Vec3::new(v.x, 0.0, v.z).normalize_or_zero();
    GroundBasis {
        fwd: flat(cam_fwd),
        right: flat(cam_right),
    }
}

#[must_use]
pub fn in_dead_zone(axis: Vec2) -> bool {
    axis.length() < MOVE_DEAD_ZONE
}

/// Resolved horizontal intent for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Locomotion {
    /// Unit world-space direction, or zero when idle.
    pub dir: Vec3,
    pub speed: f32,
    pub sprinting: bool,
}

impl Locomotion {
    #[must_use]
    pub fn idle(&self) -> bool {
        self.speed == 0.0
    }
}

/// Resolve move axis + sprint into a world direction and speed.
/// Speed is picked per frame with no ramp; only the animation blend is smoothed.
#[must_use]
pub fn resolve(axis: Vec2, sprint_held: bool, basis: GroundBasis, cfg: &MotionConfig) -> Locomotion {
    if in_dead_zone(axis) {
        return Locomotion::default();
    }
    let dir = (basis.fwd * axis.y + basis.right * axis.x).normalize_or_zero();
    if dir == Vec3::ZERO {
        return Locomotion::default();
    }
    let speed = if sprint_held { cfg.run_speed } else { cfg.walk_speed };
    Locomotion {
        dir,
        speed,
        sprinting: sprint_held,
    }
}

/// Combine horizontal intent with vertical velocity into one per-frame displacement.
#[must_use]
pub fn frame_displacement(loco: Locomotion, vel_y: f32, dt: f32) -> Vec3 {
    let mut v = loco.dir * loco.speed;
    v.y = vel_y;
    v * dt
}
