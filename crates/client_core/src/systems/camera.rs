//! Third-person boom rig and a perspective camera the controller can read.

use crate::facade::collaborators::{CameraView, Ray, ZoomRig};
use glam::{Vec2, Vec3};

/// Boom behind the character. `boom_len` is the live zoom distance.
#[derive(Clone, Copy, Debug)]
pub struct BoomRig {
    pub boom_len: f32,
    pub boom_height: f32,
}
impl Default for BoomRig {
    fn default() -> Self {
        Self {
            boom_len: 8.5,
            boom_height: 1.6,
        }
    }
}

impl ZoomRig for BoomRig {
    fn distance(&self) -> f32 {
        self.boom_len
    }
    fn set_distance(&mut self, distance: f32) {
        self.boom_len = distance;
    }
}

/// Perspective camera; screen coordinates are pixels with origin top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RigCamera {
    pub eye: Vec3,
    pub look_dir: Vec3,
    pub fov_y_rad: f32,
    pub viewport: Vec2,
}

impl Default for RigCamera {
    fn default() -> Self {
        Self {
            eye: Vec3::ZERO,
            look_dir: Vec3::Z,
            fov_y_rad: 60f32.to_radians(),
            viewport: Vec2::new(1920.0, 1080.0),
        }
    }
}

impl RigCamera {
    fn up(&self) -> Vec3 {
        self.forward().cross(self.right())
    }
}

impl CameraView for RigCamera {
    fn forward(&self) -> Vec3 {
        self.look_dir.normalize_or_zero()
    }

    fn right(&self) -> Vec3 {
        Vec3::Y.cross(self.forward()).normalize_or_zero()
    }

    fn screen_point_to_ray(&self, screen: Vec2) -> Ray {
        let fwd = self.forward();
        if self.viewport.x <= 0.0 || self.viewport.y <= 0.0 {
            return Ray { origin: self.eye, dir: fwd };
        }
        let ndc_x = 2.0 * screen.x / self.viewport.x - 1.0;
        let ndc_y = 1.0 - 2.0 * screen.y / self.viewport.y;
        let half_h = (self.fov_y_rad * 0.5).tan();
        let half_w = half_h * self.viewport.x / self.viewport.y;
        let dir = fwd + self.right() * (ndc_x * half_w) + self.up() * (ndc_y * half_h);
        Ray {
            origin: self.eye,
            dir: dir.normalize_or_zero(),
        }
    }
}

/// Place the camera on the boom behind `target`, looking along `look_dir`.
pub fn update_camera_pose(rig: &BoomRig, camera: &mut RigCamera, target: Vec3) {
    let look = camera.look_dir.normalize_or_zero();
    let up = Vec3::Y;
    camera.eye = target + up * rig.boom_height - look * rig.boom_len;
}
