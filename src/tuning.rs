//! Game balance values
//!
//! Every field defaults to the literal constant in [`crate::consts`]. The game
//! never loads these from disk; the struct exists so the simulation reads its
//! numbers from one place and tests can build states with known values.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    pub screen_width: i32,
    pub screen_height: i32,
    pub pipe_width: i32,
    pub pipe_gap: i32,
    pub pipe_speed: i32,
    pub gap_margin: i32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub actor_x: f32,
    pub actor_start_y: f32,
    pub actor_size: f32,
    pub score_step: u32,
    pub max_score: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            pipe_speed: PIPE_SPEED,
            gap_margin: GAP_MARGIN,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            actor_x: ACTOR_X,
            actor_start_y: ACTOR_START_Y,
            actor_size: ACTOR_SIZE,
            score_step: SCORE_STEP,
            max_score: MAX_SCORE,
        }
    }
}

impl Tuning {
    /// Valid values for the top edge of the gap.
    ///
    /// The gap keeps `gap_margin` pixels of pipe above it and below it, so the
    /// passable opening never touches the ceiling or the ground strip.
    pub fn gap_range(&self) -> RangeInclusive<i32> {
        let low = self.gap_margin;
        let high = (self.screen_height - self.pipe_gap - self.gap_margin).max(low);
        low..=high
    }

    /// Filled length of a progress bar `full` pixels long for `score`
    pub fn progress_width(&self, score: u32, full: u32) -> u32 {
        if self.max_score == 0 {
            return full;
        }
        score.min(self.max_score) * full / self.max_score
    }
}
