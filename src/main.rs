//! Flappy Box entry point
//!
//! Sets up logging and the run seed, then drives the frame loop. There is no
//! window backend in this build: the autopilot plays a few rounds on an
//! in-memory framebuffer at the real tick rate.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use flappy_box::Tuning;
use flappy_box::platform::{AutopilotInput, FrameLoop, LoopSummary, Pacing, PlatformError};
use flappy_box::renderer::Framebuffer;
use flappy_box::sim::{Autopilot, RoundState, seeded};

/// Rounds the demo plays before quitting
const DEMO_ROUNDS: u32 = 3;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Flappy Box (native) starting...");

    match run() {
        Ok(summary) => {
            log::info!(
                "Finished {} rounds in {} ticks, best score {}",
                summary.rounds_finished,
                summary.ticks,
                summary.best_score
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<LoopSummary, PlatformError> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut rng = seeded(seed);
    log::info!("Game initialized with seed: {}", seed);

    let tuning = Tuning::default();
    let mut canvas = Framebuffer::new(tuning.screen_width as u32, tuning.screen_height as u32)?;
    let mut state = RoundState::new(tuning, &mut rng);
    let mut input = AutopilotInput::new(Autopilot::default(), Some(DEMO_ROUNDS));

    log::info!("No window backend; autopilot plays {} rounds", DEMO_ROUNDS);
    FrameLoop::new(Pacing::default()).run(&mut state, &mut input, &mut canvas, &mut rng)
}
