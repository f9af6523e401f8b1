//! Look-at-cursor facing.
//!
//! The cursor ray is intersected with the horizontal plane through the world
//! origin, not the character's footing height.

use crate::facade::collaborators::Ray;
use glam::{Quat, Vec3};

/// Squared length under which a look direction counts as zero.
const DEGENERATE_DIR_SQ: f32 = 1e-10;

/// Intersect a ray with the `y = 0` plane. `None` when parallel or when the
/// plane lies behind the ray origin.
#[must_use]
pub fn ray_ground_plane(ray: Ray) -> Option<Vec3> {
    let denom = Vec3::Y.dot(ray.dir);
    if denom.abs() < 1e-6 {
        return None;
    }
    let t = -ray.origin.dot(Vec3::Y) / denom;
    if t >= 0.0 { Some(ray.at(t)) } else { None }
}

/// Facing that looks along a horizontal direction (+Z forward, Y up).
#[must_use]
pub fn facing_toward(dir: Vec3) -> Option<Quat> {
    let flat = Vec3::new(dir.x, 0.0, dir.z);
    if flat.length_squared() < DEGENERATE_DIR_SQ {
        return None;
    }
    Some(Quat::from_rotation_y(flat.x.atan2(flat.z)))
}

/// One frame of facing toward the cursor's ground point.
///
/// Slerps by `rotation_speed * dt` (clamped to 1) so the approach is
/// exponential. Degenerate rays or directions keep the current facing.
#[must_use]
pub fn step(current: Quat, position: Vec3, cursor_ray: Ray, rotation_speed: f32, dt: f32) -> Quat {
    let Some(hit) = ray_ground_plane(cursor_ray) else {
        return current;
    };
    let Some(target) = facing_toward(hit - position) else {
        return current;
    };
    let t = (rotation_speed * dt).clamp(0.0, 1.0);
    current.slerp(target, t).normalize()
}

/// Yaw (radians) of a facing, CCW about +Y with 0 looking down +Z.
#[must_use]
pub fn yaw_of(facing: Quat) -> f32 {
    let f = facing * Vec3::Z;
    f.x.atan2(f.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down_ray_at(x: f32, z: f32) -> Ray {
        Ray {
            origin: Vec3::new(x, 10.0, z),
            dir: Vec3::NEG_Y,
        }
    }

    #[test]
    fn plane_hit_from_above() {
        let hit = ray_ground_plane(down_ray_at(3.0, -2.0)).expect("hit");
        assert!((hit - Vec3::new(3.0, 0.0, -2.0)).length() < 1e-5);
    }

    #[test]
    fn parallel_ray_misses() {
        let r = Ray {
            origin: Vec3::new(0.0, 1.0, 0.0),
            dir: Vec3::X,
        };
        assert!(ray_ground_plane(r).is_none());
    }

    #[test]
    fn ray_pointing_away_misses() {
        let r = Ray {
            origin: Vec3::new(0.0, 1.0, 0.0),
            dir: Vec3::Y,
        };
        assert!(ray_ground_plane(r).is_none());
    }

    #[test]
    fn cursor_under_character_holds_facing() {
        let start = Quat::from_rotation_y(0.7);
        let out = step(start, Vec3::new(2.0, 0.0, 2.0), down_ray_at(2.0, 2.0), 15.0, 0.016);
        assert_eq!(out, start);
    }

    #[test]
    fn approach_is_partial_then_complete() {
        // Target to the +X side: yaw 90°.
        let ray = down_ray_at(5.0, 0.0);
        let partial = step(Quat::IDENTITY, Vec3::ZERO, ray, 10.0, 0.05);
        let yaw = yaw_of(partial);
        assert!(yaw > 0.0 && yaw < std::f32::consts::FRAC_PI_2 - 1e-3, "yaw={yaw}");
        let full = step(Quat::IDENTITY, Vec3::ZERO, ray, 10.0, 0.2);
        assert!((yaw_of(full) - std::f32::consts::FRAC_PI_2).abs() < 1e-4);
    }
}
