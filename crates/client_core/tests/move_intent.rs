use approx::assert_abs_diff_eq;
use client_core::CharacterMotionController;
use client_core::config::MotionConfig;
use client_core::facade::collaborators::{FrameOutputs, Mover};
use client_core::input::InputSnapshot;
use client_core::mover::FlatGroundMover;
use client_core::systems::camera::RigCamera;
use glam::{Vec2, Vec3};

#[test]
fn walk_forward_with_camera_on_plus_z() {
    let cfg = MotionConfig {
        walk_speed: 3.5,
        ..Default::default()
    };
    let mut pc = CharacterMotionController::new(cfg, FlatGroundMover::new(Vec3::ZERO)).expect("valid");
    let cam = RigCamera {
        look_dir: Vec3::Z,
        ..Default::default()
    };
    let dt = 0.02;
    let input = InputSnapshot {
        move_axis: Vec2::new(0.0, 1.0),
        ..Default::default()
    };
    let fx = pc.update(dt, &input, &cam, &mut FrameOutputs::default());
    assert_abs_diff_eq!(fx.displacement.x, 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(fx.displacement.z, 3.5 * dt, epsilon = 1e-6);
    assert_abs_diff_eq!(pc.mover().position().z, 3.5 * dt, epsilon = 1e-6);
}

#[test]
fn movement_follows_camera_not_facing() {
    // Camera looks down +X with a steep pitch; forward input moves along +X.
    let mut pc = CharacterMotionController::new(MotionConfig::default(), FlatGroundMover::new(Vec3::ZERO))
        .expect("valid")
        .with_facing(glam::Quat::from_rotation_y(std::f32::consts::PI));
    let cam = RigCamera {
        eye: Vec3::new(-8.0, 6.0, 0.0),
        look_dir: Vec3::new(1.0, -0.75, 0.0),
        ..Default::default()
    };
    let input = InputSnapshot {
        move_axis: Vec2::new(0.0, 1.0),
        cursor_screen_pos: cam.viewport * 0.5,
        ..Default::default()
    };
    let fx = pc.update(0.1, &input, &cam, &mut FrameOutputs::default());
    assert!(fx.displacement.x > 0.0);
    assert_abs_diff_eq!(fx.displacement.z, 0.0, epsilon = 1e-6);
    let horiz = Vec2::new(fx.displacement.x, fx.displacement.z).length();
    assert_abs_diff_eq!(horiz, MotionConfig::default().walk_speed * 0.1, epsilon = 1e-5);
}

#[test]
fn strafe_right_moves_plus_x_when_camera_on_plus_z() {
    let mut pc = CharacterMotionController::new(MotionConfig::default(), FlatGroundMover::new(Vec3::ZERO))
        .expect("valid");
    let input = InputSnapshot {
        move_axis: Vec2::new(1.0, 0.0),
        ..Default::default()
    };
    let fx = pc.update(0.1, &input, &RigCamera::default(), &mut FrameOutputs::default());
    assert!(fx.displacement.x > 0.0);
}
