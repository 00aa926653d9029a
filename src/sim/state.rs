//! Round state and core simulation types
//!
//! A round owns exactly one actor and one obstacle pair, held inline. The
//! whole value is replaced wholesale by `reset()`; nothing else allocates.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::rng::GapSource;
use crate::Tuning;

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Frozen until the first jump input
    NotStarted,
    /// Active gameplay
    Playing,
    /// Round ended; only a jump (restart) changes anything
    Over,
}

/// What a jump input did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpResponse {
    /// Impulse applied (and the round started if it had not)
    Jumped,
    /// Round was over, so it was reset instead
    Restarted,
}

/// The falling actor. `pos` is the top-left corner of its box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub pos: Vec2,
    /// Vertical speed, positive = downward
    pub vel: f32,
}

impl Actor {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.actor_x, tuning.actor_start_y),
            vel: 0.0,
        }
    }

    /// Replace the current velocity with the jump impulse
    pub fn flap(&mut self, impulse: f32) {
        self.vel = impulse;
    }

    /// Semi-implicit Euler step: velocity first, then position
    pub fn integrate(&mut self, gravity: f32) {
        self.vel += gravity;
        self.pos.y += self.vel;
    }

    pub fn bounds(&self, size: f32) -> Rect {
        Rect::new(self.pos.x, self.pos.y, size, size)
    }
}

/// The single obstacle pair: a pipe above the gap and a pipe below it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge of both pipes
    pub x: i32,
    /// Top edge of the passable gap
    pub gap_y: i32,
}

impl Obstacle {
    /// Fresh obstacle at the right edge of the screen
    pub fn spawn<G: GapSource + ?Sized>(tuning: &Tuning, gaps: &mut G) -> Self {
        Self {
            x: tuning.screen_width,
            gap_y: gaps.next_gap(tuning.gap_range()),
        }
    }

    /// True once the right edge has passed the left screen edge
    pub fn scrolled_off(&self, tuning: &Tuning) -> bool {
        self.x + tuning.pipe_width < 0
    }

    /// Full-height horizontal span shared by both pipes
    pub fn column(&self, tuning: &Tuning) -> Rect {
        Rect::new(
            self.x as f32,
            0.0,
            tuning.pipe_width as f32,
            tuning.screen_height as f32,
        )
    }

    pub fn top_pipe(&self, tuning: &Tuning) -> Rect {
        Rect::new(
            self.x as f32,
            0.0,
            tuning.pipe_width as f32,
            self.gap_y as f32,
        )
    }

    pub fn bottom_pipe(&self, tuning: &Tuning) -> Rect {
        let gap_bottom = self.gap_y + tuning.pipe_gap;
        Rect::new(
            self.x as f32,
            gap_bottom as f32,
            tuning.pipe_width as f32,
            (tuning.screen_height - gap_bottom) as f32,
        )
    }
}

/// Complete round state (deterministic given the gap source, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    pub tuning: Tuning,
    pub actor: Actor,
    pub obstacle: Obstacle,
    /// Obstacles passed × score step
    pub score: u32,
    pub phase: RoundPhase,
    /// Ticks advanced while playing this round
    pub ticks: u64,
}

impl RoundState {
    /// Create a round in its reset state
    pub fn new<G: GapSource + ?Sized>(tuning: Tuning, gaps: &mut G) -> Self {
        Self {
            tuning,
            actor: Actor::new(&tuning),
            obstacle: Obstacle::spawn(&tuning, gaps),
            score: 0,
            phase: RoundPhase::NotStarted,
            ticks: 0,
        }
    }

    /// Reinitialize every field to its default, with a freshly drawn gap
    pub fn reset<G: GapSource + ?Sized>(&mut self, gaps: &mut G) {
        *self = Self::new(self.tuning, gaps);
    }

    /// Jump trigger from the input boundary.
    ///
    /// An ended round restarts instead of jumping. Otherwise the impulse
    /// overrides whatever velocity the actor had.
    pub fn handle_jump_input<G: GapSource + ?Sized>(&mut self, gaps: &mut G) -> JumpResponse {
        if self.over() {
            self.reset(gaps);
            log::info!("Round restarted (gap at {})", self.obstacle.gap_y);
            return JumpResponse::Restarted;
        }

        if self.phase == RoundPhase::NotStarted {
            self.phase = RoundPhase::Playing;
            log::debug!("Round started");
        }
        self.actor.flap(self.tuning.jump_impulse);
        JumpResponse::Jumped
    }

    /// True once the first jump has been received this round
    pub fn started(&self) -> bool {
        self.phase != RoundPhase::NotStarted
    }

    pub fn over(&self) -> bool {
        self.phase == RoundPhase::Over
    }

    pub fn actor_bounds(&self) -> Rect {
        self.actor.bounds(self.tuning.actor_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::{ScriptedGaps, seeded};

    fn fresh() -> RoundState {
        RoundState::new(Tuning::default(), &mut ScriptedGaps::constant(120))
    }

    #[test]
    fn test_scenario_a_reset_defaults() {
        let state = fresh();
        assert!(!state.started());
        assert!(!state.over());
        assert_eq!(state.score, 0);
        assert_eq!(state.actor.pos.y, 240.0);
        assert_eq!(state.actor.pos.x, 100.0);
        assert_eq!(state.actor.vel, 0.0);
        assert_eq!(state.obstacle.x, 640);
        assert_eq!(state.obstacle.gap_y, 120);
    }

    #[test]
    fn test_first_jump_starts_round() {
        let mut state = fresh();
        let response = state.handle_jump_input(&mut ScriptedGaps::constant(0));
        assert_eq!(response, JumpResponse::Jumped);
        assert_eq!(state.phase, RoundPhase::Playing);
        assert_eq!(state.actor.vel, -7.0);
    }

    #[test]
    fn test_jump_overrides_velocity() {
        let mut state = fresh();
        state.phase = RoundPhase::Playing;
        state.actor.vel = 9.5;
        state.handle_jump_input(&mut ScriptedGaps::constant(0));
        assert_eq!(state.actor.vel, -7.0);

        state.actor.vel = -3.0;
        state.handle_jump_input(&mut ScriptedGaps::constant(0));
        assert_eq!(state.actor.vel, -7.0);
    }

    #[test]
    fn test_scenario_e_jump_when_over_restarts() {
        let mut state = fresh();
        state.phase = RoundPhase::Over;
        state.score = 60;
        state.actor.pos.y = 470.0;
        state.actor.vel = 12.0;
        state.obstacle = Obstacle { x: -20, gap_y: 200 };
        state.ticks = 300;

        let response = state.handle_jump_input(&mut ScriptedGaps::constant(120));
        assert_eq!(response, JumpResponse::Restarted);
        assert_eq!(state, fresh());
    }

    #[test]
    fn test_reset_restores_defaults_regardless_of_state() {
        let mut rng = seeded(3);
        let mut state = RoundState::new(Tuning::default(), &mut rng);
        state.phase = RoundPhase::Playing;
        state.score = 30;
        state.actor.pos.y = 12.0;
        state.actor.vel = -4.0;
        state.obstacle.x = 5;

        state.reset(&mut ScriptedGaps::constant(120));
        assert_eq!(state, fresh());

        // Resetting twice gives the same value again
        state.reset(&mut ScriptedGaps::constant(120));
        assert_eq!(state, fresh());
    }

    #[test]
    fn test_obstacle_pipes_surround_gap() {
        let tuning = Tuning::default();
        let obstacle = Obstacle { x: 300, gap_y: 100 };
        let top = obstacle.top_pipe(&tuning);
        let bottom = obstacle.bottom_pipe(&tuning);
        assert_eq!(top.bottom(), 100.0);
        assert_eq!(bottom.top(), 250.0);
        assert_eq!(bottom.bottom(), 480.0);
        assert_eq!(top.size.x, 80.0);
    }

    #[test]
    fn test_scrolled_off_requires_right_edge_past_zero() {
        let tuning = Tuning::default();
        assert!(!Obstacle { x: -80, gap_y: 100 }.scrolled_off(&tuning));
        assert!(Obstacle { x: -81, gap_y: 100 }.scrolled_off(&tuning));
    }

    #[test]
    fn test_state_serializes() {
        let state = fresh();
        let json = serde_json::to_string(&state).expect("serialize");
        let back: RoundState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, state);
    }
}
