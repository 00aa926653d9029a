//! Flappy Box - a single-screen flap-through-the-gaps arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, round lifecycle)
//! - `renderer`: Rectangle-fill render boundary and software framebuffer
//! - `platform`: Input signals and the fixed-rate frame loop
//! - `tuning`: Game balance values (defaults are the constants below)

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick (~60 Hz)
    pub const TICK_MILLIS: u64 = 16;

    /// Screen dimensions
    pub const SCREEN_WIDTH: i32 = 640;
    pub const SCREEN_HEIGHT: i32 = 480;

    /// Obstacle pair
    pub const PIPE_WIDTH: i32 = 80;
    pub const PIPE_GAP: i32 = 150;
    pub const PIPE_SPEED: i32 = 5;
    /// Minimum distance between the gap and the top/bottom of the screen
    pub const GAP_MARGIN: i32 = 50;

    /// Actor physics (positive velocity = downward)
    pub const GRAVITY: f32 = 0.5;
    pub const JUMP_IMPULSE: f32 = -7.0;

    /// Actor placement and size
    pub const ACTOR_X: f32 = 100.0;
    pub const ACTOR_START_Y: f32 = (SCREEN_HEIGHT / 2) as f32;
    pub const ACTOR_SIZE: f32 = 30.0;

    /// Scoring
    pub const SCORE_STEP: u32 = 10;
    pub const MAX_SCORE: u32 = 100;

    /// Ground strip drawn along the bottom edge
    pub const GROUND_HEIGHT: i32 = 20;
}
