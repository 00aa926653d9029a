//! Fixed timestep simulation tick
//!
//! One call to [`RoundState::advance`] is one frame of gameplay. The step has
//! no notion of elapsed time; the frame loop is responsible for calling it at
//! a steady rate.

use serde::{Deserialize, Serialize};

use super::collision::{hits_obstacle, out_of_bounds};
use super::rng::GapSource;
use super::state::{RoundPhase, RoundState};

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndCause {
    /// Score reached the maximum
    MaxScore,
    /// Actor left the screen through the top or bottom
    OutOfBounds,
    /// Actor touched a pipe
    HitObstacle,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// False when the round was frozen (not started or over)
    pub advanced: bool,
    /// The obstacle wrapped around and the score went up
    pub recycled: bool,
    /// Set on the tick the round ended
    pub ended: Option<EndCause>,
}

impl RoundState {
    /// Advance the round by one fixed timestep
    pub fn advance<G: GapSource + ?Sized>(&mut self, gaps: &mut G) -> TickOutcome {
        // Frozen until the first jump, and after the round ends
        if self.phase != RoundPhase::Playing {
            return TickOutcome::default();
        }

        let tuning = self.tuning;
        let mut outcome = TickOutcome {
            advanced: true,
            ..Default::default()
        };
        self.ticks += 1;

        self.actor.integrate(tuning.gravity);
        self.obstacle.x -= tuning.pipe_speed;

        if self.obstacle.scrolled_off(&tuning) {
            self.obstacle.x = tuning.screen_width;
            self.obstacle.gap_y = gaps.next_gap(tuning.gap_range());
            self.score += tuning.score_step;
            outcome.recycled = true;
        }

        // All three checks run; the first cause found is the one reported
        let actor = self.actor_bounds();
        let mut causes = [
            (self.score >= tuning.max_score, EndCause::MaxScore),
            (
                out_of_bounds(&actor, tuning.screen_height as f32),
                EndCause::OutOfBounds,
            ),
            (
                hits_obstacle(
                    &actor,
                    &self.obstacle.column(&tuning),
                    self.obstacle.gap_y as f32,
                    tuning.pipe_gap as f32,
                ),
                EndCause::HitObstacle,
            ),
        ]
        .into_iter()
        .filter(|(hit, _)| *hit)
        .map(|(_, cause)| cause);

        if let Some(cause) = causes.next() {
            self.phase = RoundPhase::Over;
            outcome.ended = Some(cause);
        }

        outcome
    }
}
