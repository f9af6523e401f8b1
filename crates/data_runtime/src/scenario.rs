//! Input scenario schema for the motion harness.
//! A scenario is a list of timed input segments replayed at a fixed tick.

use serde::Deserialize;

/// Upper bound on replay length (about 4.6 h at 60 Hz).
pub const MAX_SCENARIO_FRAMES: u32 = 1_000_000;

#[derive(Debug, Clone, Deserialize)]
pub struct InputScenario {
    pub name: String,
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u32,
    /// Initial character position `[x, y, z]`.
    #[serde(default)]
    pub spawn: [f32; 3],
    #[serde(default)]
    pub segments: Vec<InputSegment>,
}

/// One stretch of held input. Edge triggers (`draw_weapon`, `attack`) and
/// `zoom_delta` fire on the first frame of the segment only.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputSegment {
    pub duration_s: f32,
    #[serde(default)]
    pub move_axis: [f32; 2],
    #[serde(default)]
    pub sprint: bool,
    #[serde(default)]
    pub zoom_delta: f32,
    #[serde(default)]
    pub draw_weapon: bool,
    #[serde(default)]
    pub attack: bool,
    /// Cursor in screen pixels; `None` keeps the previous segment's cursor.
    #[serde(default)]
    pub cursor: Option<[f32; 2]>,
}

fn default_tick_ms() -> u32 {
    16
}

impl InputScenario {
    #[must_use]
    pub fn dt(&self) -> f32 {
        self.tick_ms.max(1) as f32 / 1000.0
    }

    /// Number of ticks a segment spans (at least one, saturating at `u32::MAX`).
    #[must_use]
    pub fn frames_for(&self, seg: &InputSegment) -> u32 {
        let n = (f64::from(seg.duration_s.max(0.0)) * 1000.0 / f64::from(self.tick_ms.max(1))).round();
        if n >= f64::from(u32::MAX) {
            u32::MAX
        } else {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let n = n as u32;
            n.max(1)
        }
    }

    /// Sum of segment frames, `None` on overflow.
    #[must_use]
    pub fn checked_total_frames(&self) -> Option<u32> {
        self.segments
            .iter()
            .try_fold(0u32, |acc, s| acc.checked_add(self.frames_for(s)))
    }

    /// Sum of segment frames, saturating at `u32::MAX`.
    #[must_use]
    pub fn total_frames(&self) -> u32 {
        self.checked_total_frames().unwrap_or(u32::MAX)
    }
}
