//! Per-frame controller systems.
//!
//! Each concern is a small pure step so hosts and tests can drive them
//! individually; `controller` sequences them.

pub mod camera;
pub mod combat;
pub mod motion;
pub mod move_intent;
pub mod orientation;
pub mod vertical;
pub mod weapon_trail;
pub mod zoom;
