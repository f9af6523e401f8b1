use client_core::CharacterMotionController;
use client_core::config::MotionConfig;
use client_core::facade::collaborators::{FrameOutputs, Mover};
use client_core::input::InputSnapshot;
use client_core::mover::FlatGroundMover;
use client_core::systems::camera::RigCamera;
use glam::Vec3;

#[test]
fn impulse_rises_and_lands() {
    let mut pc = CharacterMotionController::new(MotionConfig::default(), FlatGroundMover::new(Vec3::ZERO))
        .expect("valid");
    let cam = RigCamera::default();
    let input = InputSnapshot::default();
    let dt = 0.016;
    pc.add_vertical_impulse(4.6);
    let fx = pc.update(dt, &input, &cam, &mut FrameOutputs::default());
    // Grounded with upward velocity: the model leaves the impulse alone.
    assert!(fx.grounded);
    assert!(pc.mover().position().y > 0.0, "expected positive height after impulse");
    let mut t = 0.0f32;
    while t < 2.0 {
        pc.update(dt, &input, &cam, &mut FrameOutputs::default());
        t += dt;
    }
    assert!(
        pc.mover().position().y.abs() < 1e-3,
        "expected to land on ground, y={}",
        pc.mover().position().y
    );
    assert!(pc.mover().is_grounded());
}
