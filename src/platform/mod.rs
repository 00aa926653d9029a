//! Platform abstraction layer
//!
//! Everything between the simulation and the outside world:
//! - Input signals (jump / quit)
//! - Frame pacing
//! - The fixed-rate frame loop
//! - Boundary errors

pub mod error;
pub mod frame_loop;
pub mod input;
pub mod time;

pub use error::PlatformError;
pub use frame_loop::{FrameLoop, LoopSummary};
pub use input::{AutopilotInput, InputSignal, InputSource, ScriptedInput};
pub use time::Pacing;
