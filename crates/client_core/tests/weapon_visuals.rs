use client_core::CharacterMotionController;
use client_core::config::MotionConfig;
use client_core::facade::collaborators::FrameOutputs;
use client_core::facade::sinks::{TrailFx, WeaponSockets};
use client_core::input::InputSnapshot;
use client_core::mover::FlatGroundMover;
use client_core::systems::camera::RigCamera;
use client_core::systems::weapon_trail;
use glam::Vec3;

fn toggle_sequence(start_armed: bool) {
    let cfg = MotionConfig {
        start_armed,
        ..Default::default()
    };
    let mut pc = CharacterMotionController::new(cfg, FlatGroundMover::new(Vec3::ZERO)).expect("valid");
    let cam = RigCamera::default();
    // Visual starts in the wrong pose; sync fixes it before the first frame.
    let mut weapon = WeaponSockets::new(!start_armed);
    let mut out = FrameOutputs {
        weapon: Some(&mut weapon),
        ..Default::default()
    };
    pc.sync_visuals(&mut out);
    let draw = InputSnapshot {
        draw_weapon_edge: true,
        ..Default::default()
    };
    let idle = InputSnapshot::default();
    let pattern = [true, false, true, true, false, false, true, true, true];
    for press in pattern {
        let input = if press { draw } else { idle };
        pc.update(0.1, &input, &cam, &mut out);
    }
    drop(out);
    assert_eq!(weapon.active_count(), 1);
    assert_eq!(weapon.in_hand, pc.state().combat.is_armed);
    // Six presses: back to the starting state.
    assert_eq!(pc.state().combat.is_armed, start_armed);
}

#[test]
fn exactly_one_visual_from_sheathed() {
    toggle_sequence(false);
}

#[test]
fn exactly_one_visual_from_armed() {
    toggle_sequence(true);
}

#[test]
fn trail_enable_clears_and_disable_keeps() {
    let mut fx = TrailFx::default();
    weapon_trail::enable(Some(&mut fx));
    fx.sample(Vec3::X);
    fx.sample(Vec3::Y);
    weapon_trail::disable(Some(&mut fx));
    fx.sample(Vec3::Z);
    assert!(!fx.emitting);
    assert_eq!(fx.points, vec![Vec3::X, Vec3::Y]);
    weapon_trail::enable(Some(&mut fx));
    assert!(fx.emitting);
    assert!(fx.points.is_empty());
}

#[test]
fn trail_without_emitter_is_noop() {
    weapon_trail::enable(None);
    weapon_trail::disable(None);
}
