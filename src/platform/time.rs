//! Frame pacing

use std::time::{Duration, Instant};

use crate::consts::TICK_MILLIS;

/// How the frame loop waits between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Sleep out the rest of each tick
    Realtime { tick: Duration },
    /// Run ticks back to back (tests, replays)
    Unpaced,
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing::Realtime {
            tick: Duration::from_millis(TICK_MILLIS),
        }
    }
}

impl Pacing {
    /// Block until the tick that began at `tick_start` is over
    pub fn wait(&self, tick_start: Instant) {
        if let Pacing::Realtime { tick } = *self {
            let elapsed = tick_start.elapsed();
            if elapsed < tick {
                std::thread::sleep(tick - elapsed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sixty_hz() {
        assert_eq!(
            Pacing::default(),
            Pacing::Realtime {
                tick: Duration::from_millis(16)
            }
        );
    }

    #[test]
    fn test_realtime_waits_out_tick() {
        let pacing = Pacing::Realtime {
            tick: Duration::from_millis(5),
        };
        let start = Instant::now();
        pacing.wait(start);
        assert!(start.elapsed() >= Duration::from_millis(5));
    }
}
