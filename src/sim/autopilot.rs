//! Idle/demo controller
//!
//! Plays the game by deciding, once per tick, whether to send a jump. It only
//! reads the round state, so it can sit on the input side of the frame loop
//! like a real player.

use super::state::{RoundPhase, RoundState};

/// Pixels kept between the actor's bottom edge and the gap's bottom edge
pub const DEFAULT_SLACK: f32 = 10.0;
/// Ticks to linger on the game-over screen before restarting
pub const DEFAULT_RESTART_DELAY: u32 = 60;

#[derive(Debug, Clone)]
pub struct Autopilot {
    pub slack: f32,
    pub restart_delay: u32,
    idle_ticks: u32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(DEFAULT_SLACK, DEFAULT_RESTART_DELAY)
    }
}

impl Autopilot {
    pub fn new(slack: f32, restart_delay: u32) -> Self {
        Self {
            slack,
            restart_delay,
            idle_ticks: 0,
        }
    }

    /// Returns true when a jump should be sent this tick
    pub fn wants_jump(&mut self, state: &RoundState) -> bool {
        match state.phase {
            RoundPhase::NotStarted => true,
            RoundPhase::Over => {
                self.idle_ticks += 1;
                if self.idle_ticks >= self.restart_delay {
                    self.idle_ticks = 0;
                    true
                } else {
                    false
                }
            }
            RoundPhase::Playing => {
                self.idle_ticks = 0;
                let tuning = &state.tuning;
                // Where the bottom edge lands next tick if we do nothing
                let next_vel = state.actor.vel + tuning.gravity;
                let next_bottom = state.actor.pos.y + next_vel + tuning.actor_size;
                let floor = (state.obstacle.gap_y + tuning.pipe_gap) as f32 - self.slack;
                next_bottom > floor
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::sim::rng::{ScriptedGaps, seeded};
    use crate::sim::tick::EndCause;

    #[test]
    fn test_starts_idle_round() {
        let state = RoundState::new(Tuning::default(), &mut ScriptedGaps::constant(100));
        assert!(Autopilot::default().wants_jump(&state));
    }

    #[test]
    fn test_waits_before_restart() {
        let mut state = RoundState::new(Tuning::default(), &mut ScriptedGaps::constant(100));
        state.phase = RoundPhase::Over;
        let mut pilot = Autopilot::new(DEFAULT_SLACK, 3);
        assert!(!pilot.wants_jump(&state));
        assert!(!pilot.wants_jump(&state));
        assert!(pilot.wants_jump(&state));
        assert!(!pilot.wants_jump(&state));
    }

    #[test]
    fn test_jumps_only_when_sinking_toward_gap_floor() {
        let mut state = RoundState::new(Tuning::default(), &mut ScriptedGaps::constant(50));
        state.phase = RoundPhase::Playing;
        let mut pilot = Autopilot::default();

        // Gap floor at 200, actor bottom at 270: too low
        assert!(pilot.wants_jump(&state));

        // Actor high above the floor and rising: leave it
        state.actor.pos.y = 80.0;
        state.actor.vel = -3.0;
        assert!(!pilot.wants_jump(&state));
    }

    #[test]
    fn test_clears_full_round() {
        for seed in 1..=5u64 {
            let mut rng = seeded(seed);
            let mut state = RoundState::new(Tuning::default(), &mut rng);
            let mut pilot = Autopilot::default();
            let mut ended = None;

            for _ in 0..5000 {
                if pilot.wants_jump(&state) {
                    state.handle_jump_input(&mut rng);
                }
                if let Some(cause) = state.advance(&mut rng).ended {
                    ended = Some(cause);
                    break;
                }
            }

            assert_eq!(ended, Some(EndCause::MaxScore), "seed {seed}");
            assert_eq!(state.score, 100);
        }
    }
}
