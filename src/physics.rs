//! Per-tick pipe motion, collision tests and scoring.

use crate::constants::PLAYFIELD_HEIGHT;
use crate::entities::{Bird, Pipe, PipeKind};

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crash {
    /// The bird's box overlapped a pipe's box.
    HitPipe,
    /// The bird fell below the bottom of the playfield.
    FellOut,
}

/// Translate every pipe by `velocity` and drop the ones that left the screen.
pub fn advance_pipes(pipes: &mut Vec<Pipe>, velocity: i32) {
    for pipe in pipes.iter_mut() {
        pipe.move_by(velocity);
    }
    pipes.retain(|p| !p.is_off_screen());
}

/// Index of the first pipe the bird overlaps, if any.
pub fn first_collision(bird: &Bird, pipes: &[Pipe]) -> Option<usize> {
    let bird_rect = bird.rect();
    pipes.iter().position(|p| bird_rect.overlaps(&p.rect()))
}

/// True once the bird is below the bottom edge of the playfield.
pub fn out_of_bounds(bird: &Bird) -> bool {
    bird.y > PLAYFIELD_HEIGHT as f64
}

/// Mark pipes the bird has fully cleared and return the points earned.
///
/// Both pipes of a pair get marked, but only the bottom one scores.
pub fn score_passed(bird: &Bird, pipes: &mut [Pipe]) -> u32 {
    let mut points = 0;
    for pipe in pipes.iter_mut() {
        if !pipe.passed && pipe.x + Pipe::WIDTH < bird.x {
            pipe.passed = true;
            if pipe.kind == PipeKind::Bottom {
                points += 1;
            }
        }
    }
    points
}
