//! Randomness used by the simulation
//!
//! The only random decision in a round is where the next gap opens. It goes
//! through [`GapSource`] so a run can be replayed from a seed and tests can
//! script exact gap positions.

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Supplies the top edge of each freshly placed gap
pub trait GapSource {
    /// Pick a value inside `range` (inclusive on both ends)
    fn next_gap(&mut self, range: RangeInclusive<i32>) -> i32;
}

impl GapSource for Pcg32 {
    fn next_gap(&mut self, range: RangeInclusive<i32>) -> i32 {
        self.random_range(range)
    }
}

/// Create the run RNG for a seed
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed list of gap positions, cycling when exhausted.
///
/// Values outside the requested range are clamped into it.
#[derive(Debug, Clone)]
pub struct ScriptedGaps {
    gaps: Vec<i32>,
    cursor: usize,
}

impl ScriptedGaps {
    pub fn new(gaps: impl Into<Vec<i32>>) -> Self {
        Self {
            gaps: gaps.into(),
            cursor: 0,
        }
    }

    /// Always return the same gap
    pub fn constant(gap: i32) -> Self {
        Self::new(vec![gap])
    }

    /// Number of gaps handed out so far
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl GapSource for ScriptedGaps {
    fn next_gap(&mut self, range: RangeInclusive<i32>) -> i32 {
        if self.gaps.is_empty() {
            self.cursor += 1;
            return *range.start();
        }
        let value = self.gaps[self.cursor % self.gaps.len()];
        self.cursor += 1;
        value.clamp(*range.start(), *range.end())
    }
}
