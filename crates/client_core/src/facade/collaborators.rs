//! Narrow interfaces to the host engine.
//!
//! The controller never reaches into a scene graph; everything it reads or
//! drives goes through one of these traits. Only the mover is mandatory (it is
//! owned by the controller); the sinks are optional per frame.

use glam::{Vec2, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Camera as seen by the controller: a movement basis and screen picking.
pub trait CameraView {
    fn forward(&self) -> Vec3;
    fn right(&self) -> Vec3;
    /// Ray from the camera through a screen position in pixels.
    fn screen_point_to_ray(&self, screen: Vec2) -> Ray;
}

/// Collision-aware mover. Receives exactly one displacement per frame.
pub trait Mover {
    fn is_grounded(&self) -> bool;
    fn position(&self) -> Vec3;
    fn move_by(&mut self, displacement: Vec3);
}

/// Animator parameter block.
pub trait AnimationSink {
    /// Local-space locomotion blend (right, forward).
    fn set_move_blend(&mut self, x: f32, z: f32);
    fn set_in_combat(&mut self, in_combat: bool);
    /// Fire-once attack trigger.
    fn trigger_attack(&mut self);
}

/// Camera boom whose live distance the controller damps toward its target.
pub trait ZoomRig {
    fn distance(&self) -> f32;
    fn set_distance(&mut self, distance: f32);
}

/// Swaps between the in-hand and sheathed weapon representations.
pub trait WeaponVisual {
    fn set_armed(&mut self, armed: bool);
}

/// Swing trail effect, toggled from attack animation keyframes.
pub trait WeaponTrail {
    fn clear(&mut self);
    fn set_emitting(&mut self, emitting: bool);
}

/// Optional per-frame sinks. Any `None` skips that feature for the frame.
#[derive(Default)]
pub struct FrameOutputs<'a> {
    pub animator: Option<&'a mut dyn AnimationSink>,
    pub zoom_rig: Option<&'a mut dyn ZoomRig>,
    pub weapon: Option<&'a mut dyn WeaponVisual>,
}
