//! Headless replay of an input scenario through the controller, using the
//! reference collaborators. Drives the same frame loop a renderer host would.

use crate::config::{ConfigError, MotionConfig};
use crate::controller::CharacterMotionController;
use crate::facade::collaborators::{FrameOutputs, Mover, WeaponTrail};
use crate::facade::controller::ControllerState;
use crate::facade::sinks::{AnimParams, TrailFx, WeaponSockets};
use crate::input::scenario_frames;
use crate::mover::FlatGroundMover;
use crate::systems::camera::{BoomRig, RigCamera, update_camera_pose};
use crate::systems::combat::CombatEvent;
use crate::systems::weapon_trail;
use data_runtime::scenario::InputScenario;
use glam::{Vec2, Vec3};
use tracing::{debug, info};

/// Seconds the swing trail emits after an attack clip starts.
const SWING_TRAIL_SECS: f32 = 0.2;
/// Blade tip offset from the character origin, in local space.
const BLADE_TIP: Vec3 = Vec3::new(0.4, 1.2, 0.9);

#[derive(Debug, Clone, PartialEq)]
pub struct ReplaySummary {
    pub scenario: String,
    pub frames: u32,
    pub final_state: ControllerState,
    pub attacks: u32,
    pub stance_entries: u32,
    pub max_target_speed: f32,
    pub boom_len: f32,
    pub trail_points: usize,
    pub weapon: WeaponSockets,
}

pub fn replay(scn: &InputScenario, cfg: MotionConfig) -> Result<ReplaySummary, ConfigError> {
    let spawn = Vec3::from(scn.spawn);
    let mut pc = CharacterMotionController::new(cfg, FlatGroundMover::new(spawn))?;
    let mut camera = RigCamera {
        look_dir: Vec3::new(0.0, -0.6, 1.0),
        ..Default::default()
    };
    let mut rig = BoomRig {
        boom_len: pc.state().zoom_target,
        ..Default::default()
    };
    let mut anim = AnimParams::default();
    let mut weapon = WeaponSockets::new(cfg.start_armed);
    let mut trail = TrailFx::default();
    let mut trail_left = 0.0f32;

    let dt = scn.dt();
    let frames = scenario_frames(scn, camera.viewport * 0.5);
    info!(target: "controls", scenario = %scn.name, frames = frames.len(), dt, "replay start");

    let mut summary_attacks = 0;
    let mut stance_entries = 0;
    let mut max_target_speed = 0.0f32;
    for input in &frames {
        update_camera_pose(&rig, &mut camera, pc.mover().position());
        let fx = {
            let mut out = FrameOutputs {
                animator: Some(&mut anim),
                zoom_rig: Some(&mut rig),
                weapon: Some(&mut weapon),
            };
            pc.update(dt, input, &camera, &mut out)
        };
        max_target_speed = max_target_speed.max(fx.target_speed);
        for ev in &fx.combat_events {
            match ev {
                CombatEvent::AttackTriggered => summary_attacks += 1,
                CombatEvent::StanceEntered => stance_entries += 1,
                _ => {}
            }
        }

        // Animation keyframes: swing start enables the trail, swing end disables it.
        if anim.take_attack() {
            weapon_trail::enable(Some(&mut trail as &mut dyn WeaponTrail));
            trail_left = SWING_TRAIL_SECS;
        }
        if trail.emitting {
            let s = pc.state();
            trail.sample(s.position + s.facing * BLADE_TIP);
            trail_left -= dt;
            if trail_left <= 0.0 {
                weapon_trail::disable(Some(&mut trail as &mut dyn WeaponTrail));
            }
        }
    }

    let final_state = pc.state();
    debug!(
        target: "controls",
        pos = ?final_state.position,
        blend = ?Vec2::new(anim.move_x, anim.move_z),
        in_combat = anim.in_combat,
        "replay end"
    );
    Ok(ReplaySummary {
        scenario: scn.name.clone(),
        frames: u32::try_from(frames.len()).unwrap_or(u32::MAX),
        final_state,
        attacks: summary_attacks,
        stance_entries,
        max_target_speed,
        boom_len: rig.boom_len,
        trail_points: trail.points.len(),
        weapon,
    })
}
