//! Input boundary
//!
//! Whatever produces input (a keyboard, a script, the autopilot) reduces it to
//! two signals before it reaches the simulation.

use std::collections::BTreeMap;

use crate::sim::{Autopilot, RoundState};

/// A signal delivered to the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSignal {
    /// Jump (or restart after game over)
    Jump,
    /// Leave the frame loop before the next tick
    Quit,
}

/// Polled once per tick for everything that arrived since the last poll
pub trait InputSource {
    fn poll(&mut self, state: &RoundState) -> Vec<InputSignal>;
}

/// Plays back signals at fixed tick numbers (0-based poll count)
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: BTreeMap<u64, Vec<InputSignal>>,
    tick: u64,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jump_at(mut self, tick: u64) -> Self {
        self.script.entry(tick).or_default().push(InputSignal::Jump);
        self
    }

    pub fn quit_at(mut self, tick: u64) -> Self {
        self.script.entry(tick).or_default().push(InputSignal::Quit);
        self
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _state: &RoundState) -> Vec<InputSignal> {
        let signals = self.script.remove(&self.tick).unwrap_or_default();
        self.tick += 1;
        signals
    }
}

/// Autopilot on the input side, quitting after a number of finished rounds
#[derive(Debug, Clone)]
pub struct AutopilotInput {
    pilot: Autopilot,
    max_rounds: Option<u32>,
    rounds_seen: u32,
    was_over: bool,
}

impl AutopilotInput {
    pub fn new(pilot: Autopilot, max_rounds: Option<u32>) -> Self {
        Self {
            pilot,
            max_rounds,
            rounds_seen: 0,
            was_over: false,
        }
    }

    pub fn rounds_seen(&self) -> u32 {
        self.rounds_seen
    }
}

impl InputSource for AutopilotInput {
    fn poll(&mut self, state: &RoundState) -> Vec<InputSignal> {
        let over = state.over();
        if over && !self.was_over {
            self.rounds_seen += 1;
        }
        self.was_over = over;

        if self.max_rounds.is_some_and(|max| self.rounds_seen >= max) {
            return vec![InputSignal::Quit];
        }
        if self.pilot.wants_jump(state) {
            vec![InputSignal::Jump]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::sim::{RoundPhase, ScriptedGaps};

    fn state() -> RoundState {
        RoundState::new(Tuning::default(), &mut ScriptedGaps::constant(100))
    }

    #[test]
    fn test_scripted_input_plays_back_by_tick() {
        let state = state();
        let mut input = ScriptedInput::new().jump_at(0).jump_at(2).quit_at(2);
        assert_eq!(input.poll(&state), vec![InputSignal::Jump]);
        assert!(input.poll(&state).is_empty());
        assert_eq!(
            input.poll(&state),
            vec![InputSignal::Jump, InputSignal::Quit]
        );
        assert!(input.poll(&state).is_empty());
    }

    #[test]
    fn test_autopilot_input_quits_after_rounds() {
        let mut state = state();
        let mut input = AutopilotInput::new(Autopilot::new(10.0, 1000), Some(1));
        assert_eq!(input.poll(&state), vec![InputSignal::Jump]);

        state.phase = RoundPhase::Over;
        assert_eq!(input.poll(&state), vec![InputSignal::Quit]);
        assert_eq!(input.rounds_seen(), 1);
    }

    #[test]
    fn test_autopilot_input_counts_each_round_once() {
        let mut state = state();
        let mut input = AutopilotInput::new(Autopilot::new(10.0, 1000), None);
        state.phase = RoundPhase::Over;
        for _ in 0..5 {
            assert!(input.poll(&state).is_empty());
        }
        assert_eq!(input.rounds_seen(), 1);
    }
}
