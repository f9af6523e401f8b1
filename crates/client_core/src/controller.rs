//! Character motion controller: sequences the per-frame systems.
//!
//! Frame order is fixed: zoom, orientation, motion (vertical + horizontal in a
//! single mover call), combat. `dt` is used as given, without clamping.

use crate::config::{ConfigError, MotionConfig};
use crate::facade::collaborators::{CameraView, FrameOutputs, Mover};
use crate::facade::controller::{ControllerState, FrameEffects};
use crate::input::InputSnapshot;
use crate::systems::combat::{self, CombatEvent, CombatState};
use crate::systems::motion::{self, MotionState};
use crate::systems::zoom::{self, ZoomState};
use crate::systems::{move_intent, orientation, vertical};
use glam::Quat;
use tracing::{info, trace};

#[derive(Debug, Clone)]
pub struct CharacterMotionController<M: Mover> {
    cfg: MotionConfig,
    mover: M,
    facing: Quat,
    motion: MotionState,
    combat: CombatState,
    zoom: ZoomState,
    /// Seconds since construction; `f64` so frame steps never round away.
    now: f64,
}

impl<M: Mover> CharacterMotionController<M> {
    /// Validate tuning and take ownership of the mover.
    pub fn new(cfg: MotionConfig, mover: M) -> Result<Self, ConfigError> {
        cfg.validate()?;
        info!(
            target: "controls",
            walk_speed = cfg.walk_speed,
            run_speed = cfg.run_speed,
            rotation_speed = cfg.rotation_speed,
            stance_secs = cfg.combat_stance_secs,
            armed = cfg.start_armed,
            "character motion controller ready"
        );
        Ok(Self {
            cfg,
            mover,
            facing: Quat::IDENTITY,
            motion: MotionState::default(),
            combat: CombatState::new(cfg.start_armed),
            zoom: ZoomState::new(cfg.start_zoom, cfg.min_zoom, cfg.max_zoom),
            now: 0.0,
        })
    }

    #[must_use]
    pub fn with_facing(mut self, facing: Quat) -> Self {
        self.facing = facing.normalize();
        self
    }

    #[must_use]
    pub fn config(&self) -> &MotionConfig {
        &self.cfg
    }

    #[must_use]
    pub fn mover(&self) -> &M {
        &self.mover
    }

    /// Mutable mover access for the host (e.g. feeding terrain height).
    pub fn mover_mut(&mut self) -> &mut M {
        &mut self.mover
    }

    #[must_use]
    pub fn state(&self) -> ControllerState {
        ControllerState {
            position: self.mover.position(),
            facing: self.facing,
            motion: self.motion,
            combat: self.combat,
            zoom_target: self.zoom.target_distance(),
            now: self.now,
        }
    }

    /// Add an external vertical velocity change (knock-up, jump pad).
    pub fn add_vertical_impulse(&mut self, dv: f32) {
        self.motion.vertical_velocity += dv;
    }

    /// Push current armed/stance flags to the sinks, e.g. right after spawn
    /// so the visuals match the initial state.
    pub fn sync_visuals(&self, out: &mut FrameOutputs<'_>) {
        if let Some(weapon) = out.weapon.as_mut() {
            weapon.set_armed(self.combat.is_armed);
        }
        if let Some(anim) = out.animator.as_mut() {
            anim.set_in_combat(self.combat.in_combat_stance);
        }
    }

    /// Advance one frame.
    pub fn update(
        &mut self,
        dt: f32,
        input: &InputSnapshot,
        camera: &dyn CameraView,
        out: &mut FrameOutputs<'_>,
    ) -> FrameEffects {
        self.now += f64::from(dt);

        // 1) Zoom
        if let Some(rig) = out.zoom_rig.as_mut() {
            self.zoom.apply_scroll(input.zoom_delta, self.cfg.zoom_speed, self.cfg.min_zoom, self.cfg.max_zoom);
            zoom::drive_rig(&mut **rig, &self.zoom, self.cfg.zoom_damping, dt);
        }

        // 2) Orientation
        let ray = camera.screen_point_to_ray(input.cursor_screen_pos);
        self.facing = orientation::step(self.facing, self.mover.position(), ray, self.cfg.rotation_speed, dt);

        // 3) Motion: one mover call per frame
        let grounded = self.mover.is_grounded();
        self.motion.vertical_velocity = vertical::integrate(
            self.motion.vertical_velocity,
            grounded,
            self.cfg.gravity,
            self.cfg.grounded_stick_bias,
            dt,
        );
        let basis = move_intent::basis_from_camera(camera.forward(), camera.right());
        let loco = move_intent::resolve(input.move_axis, input.sprint_held, basis, &self.cfg);
        let displacement = move_intent::frame_displacement(loco, self.motion.vertical_velocity, dt);
        self.mover.move_by(displacement);

        let blend_target = motion::step_blend(&mut self.motion, loco, self.facing, dt);
        if let Some(anim) = out.animator.as_mut() {
            let b = self.motion.current_anim_blend;
            anim.set_move_blend(b.x, b.y);
        }

        // 4) Combat
        let mut events = Vec::new();
        combat::step(
            &mut self.combat,
            input.draw_weapon_edge,
            input.attack_edge,
            self.now,
            self.cfg.combat_stance_secs,
            &mut events,
        );
        self.forward_combat_events(&events, out);

        trace!(
            target: "controls",
            now = self.now,
            grounded,
            vel_y = self.motion.vertical_velocity,
            speed = loco.speed,
            "frame"
        );

        FrameEffects {
            displacement,
            grounded,
            target_speed: loco.speed,
            blend_target,
            combat_events: events,
        }
    }

    fn forward_combat_events(&self, events: &[CombatEvent], out: &mut FrameOutputs<'_>) {
        for ev in events {
            match ev {
                CombatEvent::WeaponDrawn | CombatEvent::WeaponSheathed => {
                    if let Some(weapon) = out.weapon.as_mut() {
                        weapon.set_armed(self.combat.is_armed);
                    }
                }
                CombatEvent::StanceEntered | CombatEvent::StanceExited => {
                    if let Some(anim) = out.animator.as_mut() {
                        anim.set_in_combat(*ev == CombatEvent::StanceEntered);
                    }
                }
                CombatEvent::AttackTriggered => {
                    if let Some(anim) = out.animator.as_mut() {
                        anim.trigger_attack();
                    }
                }
            }
        }
    }
}
