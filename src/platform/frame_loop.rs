//! Fixed-rate frame loop
//!
//! Each tick, in order: poll input, apply jumps, advance the round once,
//! draw and present, then wait out the rest of the tick. A quit seen while
//! polling lets the current tick finish and ends the loop before the next.

use std::time::Instant;

use super::error::PlatformError;
use super::input::{InputSignal, InputSource};
use super::time::Pacing;
use crate::renderer::{Canvas, draw_frame};
use crate::sim::{GapSource, JumpResponse, RoundState};

/// Totals reported when the loop exits
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoopSummary {
    /// Ticks advanced (and frames drawn)
    pub ticks: u64,
    pub rounds_finished: u32,
    pub best_score: u32,
    /// True if the loop ended on a quit signal rather than the tick limit
    pub quit: bool,
}

#[derive(Debug, Clone, Default)]
pub struct FrameLoop {
    pub pacing: Pacing,
    /// Stop after this many ticks (None = until quit)
    pub max_ticks: Option<u64>,
}

impl FrameLoop {
    pub fn new(pacing: Pacing) -> Self {
        Self {
            pacing,
            max_ticks: None,
        }
    }

    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    /// Drive the round until a quit signal or the tick limit.
    ///
    /// The canvas must match the round's screen size.
    pub fn run<I, C, G>(
        &self,
        state: &mut RoundState,
        input: &mut I,
        canvas: &mut C,
        gaps: &mut G,
    ) -> Result<LoopSummary, PlatformError>
    where
        I: InputSource + ?Sized,
        C: Canvas,
        G: GapSource + ?Sized,
    {
        let expected = (
            state.tuning.screen_width as u32,
            state.tuning.screen_height as u32,
        );
        if canvas.size() != expected {
            let (w, h) = canvas.size();
            return Err(PlatformError::SurfaceInit(format!(
                "canvas is {}x{}, round needs {}x{}",
                w, h, expected.0, expected.1
            )));
        }

        let mut summary = LoopSummary::default();

        while self.max_ticks.is_none_or(|max| summary.ticks < max) {
            let tick_start = Instant::now();

            for signal in input.poll(state) {
                match signal {
                    InputSignal::Quit => {
                        if !summary.quit {
                            log::info!("Quit requested on tick {}", summary.ticks);
                        }
                        summary.quit = true;
                    }
                    InputSignal::Jump => {
                        if state.handle_jump_input(gaps) == JumpResponse::Restarted {
                            log::debug!("Restart on tick {}", summary.ticks);
                        }
                    }
                }
            }

            let outcome = state.advance(gaps);
            summary.ticks += 1;
            summary.best_score = summary.best_score.max(state.score);

            if outcome.recycled {
                log::debug!(
                    "Obstacle passed, score {} (next gap at {})",
                    state.score,
                    state.obstacle.gap_y
                );
            }
            if let Some(cause) = outcome.ended {
                summary.rounds_finished += 1;
                log::info!(
                    "Round over: {:?}, score {} after {} ticks",
                    cause,
                    state.score,
                    state.ticks
                );
                match serde_json::to_string(&*state) {
                    Ok(json) => log::debug!("Final round state: {}", json),
                    Err(e) => log::warn!("Could not serialize round state: {}", e),
                }
            }

            draw_frame(canvas, state);
            canvas.present()?;

            if summary.quit {
                break;
            }
            self.pacing.wait(tick_start);
        }

        Ok(summary)
    }
}
