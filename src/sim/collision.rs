//! Collision detection for the actor box
//!
//! Everything on screen is an axis-aligned rectangle in screen space
//! (origin top-left, y grows downward), so the checks reduce to interval
//! overlap tests.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, `pos` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap of the horizontal spans (touching edges do not count)
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }
}

/// True if the box pokes above the screen top or below the screen bottom
pub fn out_of_bounds(actor: &Rect, screen_height: f32) -> bool {
    actor.top() < 0.0 || actor.bottom() > screen_height
}

/// True if the box's vertical span lies entirely inside the gap
pub fn within_gap(actor: &Rect, gap_top: f32, gap_height: f32) -> bool {
    actor.top() >= gap_top && actor.bottom() <= gap_top + gap_height
}

/// Actor vs. obstacle pair.
///
/// `column` is the full-height horizontal span of the pipes. A hit needs the
/// spans to overlap horizontally while the actor is not fully inside the gap.
pub fn hits_obstacle(actor: &Rect, column: &Rect, gap_top: f32, gap_height: f32) -> bool {
    actor.overlaps_x(column) && !within_gap(actor, gap_top, gap_height)
}
