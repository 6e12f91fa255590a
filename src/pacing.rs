//! Fixed-timestep pacing with an explicit accumulator.
//!
//! The caller measures real elapsed time on a monotonic clock and feeds it
//! in; the accumulator hands back whole ticks and keeps the remainder, so
//! the simulation rate stays fixed regardless of how long a frame took.

use crate::constants::{MAX_FRAME_DELTA_MS, MAX_TICK_RATE_HZ};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    tick: Duration,
    accumulated: Duration,
    max_delta: Duration,
}

impl FixedTimestep {
    /// `tick` is raised to the shortest tick the game supports, so
    /// [`advance`](Self::advance) always terminates.
    pub fn new(tick: Duration) -> Self {
        let min_tick = Duration::from_nanos(1_000_000_000 / MAX_TICK_RATE_HZ as u64);
        Self {
            tick: tick.max(min_tick),
            accumulated: Duration::ZERO,
            max_delta: Duration::from_millis(MAX_FRAME_DELTA_MS),
        }
    }

    /// Add `elapsed` real time and return how many ticks are now due.
    ///
    /// Elapsed time is clamped so a long stall (suspended terminal, slow
    /// draw) does not trigger a burst of catch-up ticks.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed.min(self.max_delta);
        let mut ticks = 0;
        while self.accumulated >= self.tick {
            self.accumulated -= self.tick;
            ticks += 1;
        }
        ticks
    }

    /// Time left until the next tick is due.
    pub fn until_next_tick(&self) -> Duration {
        self.tick.saturating_sub(self.accumulated)
    }
}
