//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Randomness only through an injected `GapSource`
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod rng;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use collision::{Rect, hits_obstacle, out_of_bounds, within_gap};
pub use rng::{GapSource, ScriptedGaps, seeded};
pub use state::{Actor, JumpResponse, Obstacle, RoundPhase, RoundState};
pub use tick::{EndCause, TickOutcome};
