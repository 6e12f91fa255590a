//! Time-based pipe pair spawning.
//!
//! Spawning is driven by elapsed milliseconds on a monotonic clock supplied
//! by the caller, never by tick counts, so the pipe rate does not depend on
//! the frame rate.

use crate::config::GameConfig;
use crate::constants::PLAYFIELD_WIDTH;
use crate::entities::{Pipe, PipeKind};
use rand::Rng;

/// Append one top + bottom pair at `spawn_x`, both sharing `gap`.
///
/// Returns the top pipe's y.
pub fn place_pipes<R: Rng>(
    pipes: &mut Vec<Pipe>,
    gap: i32,
    spawn_x: i32,
    top_y_range: (i32, i32),
    rng: &mut R,
) -> i32 {
    let top_y = rng.gen_range(top_y_range.0..=top_y_range.1);
    let bottom_y = top_y + Pipe::HEIGHT + gap;
    pipes.push(Pipe::new(spawn_x, top_y, PipeKind::Top));
    pipes.push(Pipe::new(spawn_x, bottom_y, PipeKind::Bottom));
    top_y
}

/// Decides when new pipe pairs appear and how wide their gap is.
#[derive(Debug, Clone)]
pub struct PipeSpawner {
    /// Clock reading (ms) of the last spawn or reset.
    pub last_spawn_ms: u64,
    /// Time to wait after `last_spawn_ms` before the next spawn.
    pub interval_ms: u64,
    /// Gap used by the most recently spawned pair.
    pub gap: i32,
    gap_range: (i32, i32),
    interval_range_ms: (u64, u64),
    top_y_range: (i32, i32),
}

impl PipeSpawner {
    pub fn new<R: Rng>(config: &GameConfig, now_ms: u64, rng: &mut R) -> Self {
        let gap_range = config.gap_range;
        let interval_range_ms = config.interval_range_ms;
        Self {
            last_spawn_ms: now_ms,
            interval_ms: rng.gen_range(interval_range_ms.0..=interval_range_ms.1),
            gap: rng.gen_range(gap_range.0..=gap_range.1),
            gap_range,
            interval_range_ms,
            top_y_range: config.top_y_range,
        }
    }

    /// Restart the spawn timer at `now_ms` with a fresh interval.
    pub fn reset<R: Rng>(&mut self, now_ms: u64, rng: &mut R) {
        self.last_spawn_ms = now_ms;
        self.interval_ms = self.draw_interval(rng);
    }

    /// Spawn a pair if more than the current interval has elapsed.
    ///
    /// The gap is re-drawn once per spawn and shared by both pipes.
    pub fn poll<R: Rng>(&mut self, now_ms: u64, pipes: &mut Vec<Pipe>, rng: &mut R) -> bool {
        if now_ms.saturating_sub(self.last_spawn_ms) <= self.interval_ms {
            return false;
        }

        self.gap = rng.gen_range(self.gap_range.0..=self.gap_range.1);
        place_pipes(pipes, self.gap, PLAYFIELD_WIDTH, self.top_y_range, rng);
        self.last_spawn_ms = now_ms;
        self.interval_ms = self.draw_interval(rng);
        log::trace!("spawned pipe pair (gap {}, next in {}ms)", self.gap, self.interval_ms);
        true
    }

    fn draw_interval<R: Rng>(&self, rng: &mut R) -> u64 {
        rng.gen_range(self.interval_range_ms.0..=self.interval_range_ms.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_place_pipes_pair_layout() {
        let mut rng = test_rng();
        let mut pipes = Vec::new();
        for _ in 0..50 {
            pipes.clear();
            let top_y = place_pipes(&mut pipes, 150, 360, (-400, -100), &mut rng);
            assert_eq!(pipes.len(), 2);
            assert_eq!(pipes[0].kind, PipeKind::Top);
            assert_eq!(pipes[1].kind, PipeKind::Bottom);
            assert!((-400..=-100).contains(&top_y));
            assert_eq!(pipes[0].y, top_y);
            assert_eq!(pipes[1].y, top_y + 512 + 150);
            assert_eq!(pipes[0].x, 360);
            assert_eq!(pipes[1].x, 360);
        }
    }

    #[test]
    fn test_no_spawn_before_interval() {
        let mut rng = test_rng();
        let config = GameConfig::default();
        let mut spawner = PipeSpawner::new(&config, 0, &mut rng);
        let mut pipes = Vec::new();

        let interval = spawner.interval_ms;
        assert!(!spawner.poll(interval, &mut pipes, &mut rng));
        assert!(pipes.is_empty());
        assert!(spawner.poll(interval + 1, &mut pipes, &mut rng));
        assert_eq!(pipes.len(), 2);
        assert_eq!(spawner.last_spawn_ms, interval + 1);
    }

    #[test]
    fn test_each_spawn_draws_gap_and_interval_in_range() {
        let mut rng = test_rng();
        let config = GameConfig::default();
        let mut spawner = PipeSpawner::new(&config, 0, &mut rng);
        let mut pipes = Vec::new();
        let mut now = 0;

        for _ in 0..100 {
            now += spawner.interval_ms + 1;
            assert!(spawner.poll(now, &mut pipes, &mut rng));
            assert!((130..=180).contains(&spawner.gap));
            assert!((1200..=1700).contains(&spawner.interval_ms));

            let pair = &pipes[pipes.len() - 2..];
            assert_eq!(pair[1].y - pair[0].y - Pipe::HEIGHT, spawner.gap);
        }
    }

    #[test]
    fn test_reset_restarts_timer() {
        let mut rng = test_rng();
        let config = GameConfig::default();
        let mut spawner = PipeSpawner::new(&config, 0, &mut rng);
        spawner.reset(10_000, &mut rng);
        let mut pipes = Vec::new();
        assert!(!spawner.poll(10_000 + spawner.interval_ms, &mut pipes, &mut rng));
        assert!(pipes.is_empty());
    }

    #[test]
    fn test_clock_behind_last_spawn_does_not_spawn() {
        let mut rng = test_rng();
        let config = GameConfig::default();
        let mut spawner = PipeSpawner::new(&config, 5_000, &mut rng);
        let mut pipes = Vec::new();
        assert!(!spawner.poll(0, &mut pipes, &mut rng));
    }
}
