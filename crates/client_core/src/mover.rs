//! Reference mover: a flat walkable ground plane with snapping.
//!
//! Stands in for an engine character mover in the harness and tests. It does
//! no lateral collision; it only keeps the character on or above the ground.

use crate::facade::collaborators::Mover;
use glam::Vec3;

#[derive(Debug, Clone, Copy)]
pub struct FlatGroundMover {
    pos: Vec3,
    ground_y: f32,
    grounded: bool,
    moves: u32,
}

impl FlatGroundMover {
    /// Spawn standing on ground at `initial_pos.y`.
    #[must_use]
    pub fn new(initial_pos: Vec3) -> Self {
        Self {
            pos: initial_pos,
            ground_y: initial_pos.y,
            grounded: true,
            moves: 0,
        }
    }

    /// Spawn above `ground_y`; airborne until the first landing.
    #[must_use]
    pub fn airborne(initial_pos: Vec3, ground_y: f32) -> Self {
        Self {
            pos: initial_pos,
            ground_y,
            grounded: initial_pos.y <= ground_y,
            moves: 0,
        }
    }

    /// Provide latest ground height under the character (terrain or collider).
    /// - If grounded, snaps the character to this height.
    /// - If airborne, only raises the floor (landing on raised terrain works).
    pub fn set_ground_height(&mut self, h: f32) {
        if self.grounded {
            self.ground_y = h;
            self.pos.y = h;
        } else if h > self.ground_y {
            self.ground_y = h;
        }
    }

    #[must_use]
    pub fn ground_height(&self) -> f32 {
        self.ground_y
    }

    /// Number of `move_by` calls received so far.
    #[must_use]
    pub fn move_calls(&self) -> u32 {
        self.moves
    }
}

impl Mover for FlatGroundMover {
    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn position(&self) -> Vec3 {
        self.pos
    }

    fn move_by(&mut self, displacement: Vec3) {
        self.moves += 1;
        self.pos += displacement;
        if self.pos.y <= self.ground_y {
            self.pos.y = self.ground_y;
            self.grounded = true;
        } else {
            self.grounded = false;
        }
    }
}
