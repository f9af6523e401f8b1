//! Grounded/airborne vertical velocity model.
//!
//! Not a rigid-body solver: grounded frames pin a small downward bias so the
//! mover keeps contact on slopes, airborne frames integrate constant gravity.

/// Advance vertical velocity for one frame.
///
/// - grounded and falling: snap to `stick_bias`
/// - grounded and rising (external impulse): untouched
/// - airborne: `vel_y + gravity * dt`, no terminal clamp
#[must_use]
pub fn integrate(vel_y: f32, grounded: bool, gravity: f32, stick_bias: f32, dt: f32) -> f32 {
    if grounded {
        if vel_y < 0.0 { stick_bias } else { vel_y }
    } else {
        vel_y + gravity * dt
    }
}
