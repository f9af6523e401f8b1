//! Per-character motion state and the locomotion blend spring.

use super::move_intent::Locomotion;
use crate::config::{ANIM_BLEND_SMOOTH_TIME, SPRINT_BLEND_WEIGHT, WALK_BLEND_WEIGHT};
use glam::{Quat, Vec2};

/// Mutable motion state, advanced once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionState {
    pub vertical_velocity: f32,
    pub current_anim_blend: Vec2,
    pub anim_blend_velocity: Vec2,
}

/// Critically damped spring toward `target` (Game Programming Gems 4, 1.10).
/// Carries `velocity` across frames and never overshoots the target.
#[must_use]
pub fn smooth_damp(current: Vec2, target: Vec2, velocity: &mut Vec2, smooth_time: f32, dt: f32) -> Vec2 {
    let smooth_time = smooth_time.max(1e-4);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);
    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * exp;
    let out = target + (change + temp) * exp;
    if (target - current).dot(out - target) > 0.0 {
        *velocity = Vec2::ZERO;
        return target;
    }
    out
}

/// Blend target: world move direction expressed in the character's local
/// frame (x = right, y = forward), weighted by gait.
#[must_use]
pub fn blend_target(loco: Locomotion, facing: Quat) -> Vec2 {
    if loco.idle() {
        return Vec2::ZERO;
    }
    let local = facing.inverse() * loco.dir;
    let weight = if loco.sprinting {
        SPRINT_BLEND_WEIGHT
    } else {
        WALK_BLEND_WEIGHT
    };
    Vec2::new(local.x, local.z) * weight
}

/// Advance the blend for one frame and return the target it chased.
/// Idle input zeroes the blend outright so no residual pose lingers.
pub fn step_blend(state: &mut MotionState, loco: Locomotion, facing: Quat, dt: f32) -> Vec2 {
    let target = blend_target(loco, facing);
    if loco.idle() {
        state.current_anim_blend = Vec2::ZERO;
        state.anim_blend_velocity = Vec2::ZERO;
        return target;
    }
    state.current_anim_blend = smooth_damp(
        state.current_anim_blend,
        target,
        &mut state.anim_blend_velocity,
        ANIM_BLEND_SMOOTH_TIME,
        dt,
    );
    target
}
