//! Client glue: input snapshot and a third-person character motion controller.
//!
//! Engine-facing pieces (mover, camera, animator, zoom rig, weapon visuals)
//! are traits in `facade::collaborators`; the per-frame logic lives in
//! `systems` and is sequenced by `controller`.

#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::struct_excessive_bools,
    clippy::cast_precision_loss
)]

pub mod input {
    use data_runtime::scenario::{InputScenario, InputSegment, MAX_SCENARIO_FRAMES};
    use glam::Vec2;

    /// Input snapshot for one frame of local player intent.
    ///
    /// Built fresh by the host every frame:
    /// - `move_axis` is the stick/WASD vector, each component in [-1, 1]
    /// - `sprint_held` is level-triggered
    /// - `draw_weapon_edge`/`attack_edge` are one-shot: true only on the press frame
    /// - `zoom_delta` is this frame's scroll; positive pulls the camera in
    /// - `cursor_screen_pos` is in pixels, origin top-left
    #[derive(Default, Debug, Clone, Copy, PartialEq)]
    pub struct InputSnapshot {
        pub move_axis: Vec2,
        pub sprint_held: bool,
        pub zoom_delta: f32,
        pub draw_weapon_edge: bool,
        pub attack_edge: bool,
        pub cursor_screen_pos: Vec2,
    }
    impl InputSnapshot {
        /// Drop one-shot fields after the snapshot was consumed, keeping held state.
        pub fn clear_edges(&mut self) {
            self.draw_weapon_edge = false;
            self.attack_edge = false;
            self.zoom_delta = 0.0;
        }

        fn from_segment(seg: &InputSegment, cursor: Vec2) -> Self {
            Self {
                move_axis: Vec2::from(seg.move_axis).clamp(Vec2::NEG_ONE, Vec2::ONE),
                sprint_held: seg.sprint,
                zoom_delta: seg.zoom_delta,
                draw_weapon_edge: seg.draw_weapon,
                attack_edge: seg.attack,
                cursor_screen_pos: cursor,
            }
        }
    }

    /// Expand a scenario into per-frame snapshots. Edges and zoom fire on the
    /// first frame of each segment; the cursor carries over when unset.
    #[must_use]
    pub fn scenario_frames(scn: &InputScenario, initial_cursor: Vec2) -> Vec<InputSnapshot> {
        let mut frames = Vec::with_capacity(scn.total_frames().min(MAX_SCENARIO_FRAMES) as usize);
        let mut cursor = initial_cursor;
        for seg in &scn.segments {
            if let Some(c) = seg.cursor {
                cursor = Vec2::from(c);
            }
            let mut snap = InputSnapshot::from_segment(seg, cursor);
            for _ in 0..scn.frames_for(seg) {
                frames.push(snap);
                snap.clear_edges();
            }
        }
        frames
    }
}

pub mod config;
pub mod controller;
/// Headless scenario replay with the reference collaborators.
pub mod harness;
pub mod mover;
/// Per-frame systems sequenced by the controller.
pub mod systems;
pub mod facade {
    pub mod collaborators;
    pub mod controller;
    pub mod sinks;
}
pub mod telemetry;

pub use controller::CharacterMotionController;
