//! Frame layout
//!
//! Turns a round snapshot into rectangle fills, back to front.

use super::canvas::{Canvas, Color};
use crate::consts::GROUND_HEIGHT;
use crate::sim::{Rect, RoundState};

pub const SKY: Color = Color::rgb(135, 206, 235);
pub const PIPE: Color = Color::rgb(34, 139, 34);
pub const GROUND: Color = Color::rgb(139, 69, 19);
pub const ACTOR_BODY: Color = Color::rgb(255, 255, 0);
pub const ACTOR_WING: Color = Color::rgb(255, 165, 0);
pub const BAR_TRACK: Color = Color::rgb(169, 169, 169);
pub const BAR_FILL: Color = Color::rgb(0, 255, 0);
pub const GAME_OVER: Color = Color::rgb(255, 0, 0);

/// Progress bar geometry (centered horizontally)
pub const BAR_WIDTH: u32 = 300;
pub const BAR_HEIGHT: i32 = 20;
pub const BAR_TOP: i32 = 20;

/// Game-over banner height
pub const BANNER_HEIGHT: i32 = 50;

fn fill(canvas: &mut impl Canvas, rect: Rect, color: Color) {
    canvas.draw_rect(
        rect.pos.x as i32,
        rect.pos.y as i32,
        rect.size.x as i32,
        rect.size.y as i32,
        color,
    );
}

/// Draw one complete frame of the round
pub fn draw_frame(canvas: &mut impl Canvas, state: &RoundState) {
    let tuning = &state.tuning;
    let (w, h) = (tuning.screen_width, tuning.screen_height);

    canvas.clear(SKY);

    fill(canvas, state.obstacle.top_pipe(tuning), PIPE);
    fill(canvas, state.obstacle.bottom_pipe(tuning), PIPE);

    canvas.draw_rect(0, h - GROUND_HEIGHT, w, GROUND_HEIGHT, GROUND);

    draw_actor(canvas, state);

    // Score progress
    let bar_x = (w - BAR_WIDTH as i32) / 2;
    let filled = tuning.progress_width(state.score, BAR_WIDTH) as i32;
    canvas.draw_rect(bar_x, BAR_TOP, BAR_WIDTH as i32, BAR_HEIGHT, BAR_TRACK);
    canvas.draw_rect(bar_x, BAR_TOP, filled, BAR_HEIGHT, BAR_FILL);

    if state.over() {
        canvas.draw_rect(w / 4, h / 3, w / 2, BANNER_HEIGHT, GAME_OVER);
    }
}

/// Body plus two wings stacked on its right half
fn draw_actor(canvas: &mut impl Canvas, state: &RoundState) {
    let body = state.actor_bounds();
    fill(canvas, body, ACTOR_BODY);

    let x = body.pos.x as i32;
    let y = body.pos.y as i32;
    canvas.draw_rect(x + 10, y + 5, 15, 10, ACTOR_WING);
    canvas.draw_rect(x + 10, y + 15, 15, 10, ACTOR_WING);
}
