//! Bird and pipe data structures.

use crate::constants::*;

/// Axis-aligned rectangle in playfield coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// True if the two rectangles share any area. Touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// The player-controlled bird. Only `y` and `velocity` change during a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub x: i32,
    /// Vertical position (float for smooth physics). 0 = top of the playfield.
    pub y: f64,
    /// Vertical velocity per tick (positive = downward).
    pub velocity: f64,
}

impl Bird {
    pub const WIDTH: i32 = BIRD_WIDTH;
    pub const HEIGHT: i32 = BIRD_HEIGHT;

    /// A bird at its spawn position, at rest.
    pub fn new() -> Self {
        Self {
            x: BIRD_START_X,
            y: BIRD_START_Y,
            velocity: 0.0,
        }
    }

    /// Apply one tick of gravity. The ceiling absorbs: y is clamped at 0 but
    /// velocity keeps integrating.
    pub fn move_step(&mut self, gravity: f64) {
        self.velocity += gravity;
        self.y += self.velocity;
        if self.y < 0.0 {
            self.y = 0.0;
        }
    }

    /// Override the current velocity with the jump impulse. Jumps never stack.
    pub fn jump(&mut self, impulse: f64) {
        self.velocity = impulse;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y.floor() as i32, Self::WIDTH, Self::HEIGHT)
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// Which half of a pipe pair a pipe is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeKind {
    Top,
    Bottom,
}

/// One pipe obstacle. Pipes are always spawned as a top + bottom pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    pub x: i32,
    pub y: i32,
    pub kind: PipeKind,
    /// Whether the bird has already passed this pipe (for scoring).
    pub passed: bool,
}

impl Pipe {
    pub const WIDTH: i32 = PIPE_WIDTH;
    pub const HEIGHT: i32 = PIPE_HEIGHT;

    pub fn new(x: i32, y: i32, kind: PipeKind) -> Self {
        Self {
            x,
            y,
            kind,
            passed: false,
        }
    }

    pub fn move_by(&mut self, velocity: i32) {
        self.x += velocity;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, Self::WIDTH, Self::HEIGHT)
    }

    /// True once the pipe's right edge is at or past the left playfield edge.
    pub fn is_off_screen(&self) -> bool {
        self.x + Self::WIDTH <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bird_defaults() {
        let bird = Bird::new();
        assert_eq!(bird.x, 45);
        assert!((bird.y - 320.0).abs() < f64::EPSILON);
        assert_eq!(bird.velocity, 0.0);
    }

    #[test]
    fn test_gravity_accumulates() {
        let mut bird = Bird::new();
        bird.move_step(GRAVITY);
        assert!((bird.velocity - 0.6).abs() < 1e-9);
        assert!((bird.y - 320.6).abs() < 1e-9);
        bird.move_step(GRAVITY);
        assert!((bird.velocity - 1.2).abs() < 1e-9);
        assert!((bird.y - 321.8).abs() < 1e-9);
    }

    #[test]
    fn test_ceiling_clamp_keeps_velocity() {
        let mut bird = Bird::new();
        bird.y = 3.0;
        bird.velocity = -9.0;
        bird.move_step(GRAVITY);
        assert_eq!(bird.y, 0.0);
        assert!((bird.velocity - (-8.4)).abs() < 1e-9);
    }

    #[test]
    fn test_y_never_negative_under_repeated_jumps() {
        let mut bird = Bird::new();
        for _ in 0..200 {
            bird.jump(JUMP_VELOCITY);
            bird.move_step(GRAVITY);
            assert!(bird.y >= 0.0);
        }
    }

    #[test]
    fn test_jump_overrides_any_velocity() {
        for prior in [-20.0, -9.0, 0.0, 3.5, 40.0] {
            let mut bird = Bird::new();
            bird.velocity = prior;
            bird.jump(JUMP_VELOCITY);
            assert_eq!(bird.velocity, JUMP_VELOCITY);
        }
    }

    #[test]
    fn test_bird_rect_floors_y() {
        let mut bird = Bird::new();
        bird.y = 100.9;
        assert_eq!(bird.rect(), Rect::new(45, 100, 34, 24));
    }

    #[test]
    fn test_pipe_moves_left() {
        let mut pipe = Pipe::new(360, -200, PipeKind::Top);
        pipe.move_by(PIPE_VELOCITY);
        assert_eq!(pipe.x, 356);
        assert_eq!(pipe.rect(), Rect::new(356, -200, 64, 512));
    }

    #[test]
    fn test_pipe_off_screen_boundary() {
        let mut pipe = Pipe::new(-63, 0, PipeKind::Bottom);
        assert!(!pipe.is_off_screen());
        pipe.x = -64;
        assert!(pipe.is_off_screen());
    }

    #[test]
    fn test_rect_overlap_by_one_unit() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.overlaps(&Rect::new(9, 9, 10, 10)));
        assert!(!a.overlaps(&Rect::new(10, 0, 10, 10)));
        assert!(!a.overlaps(&Rect::new(0, 10, 10, 10)));
        assert!(a.overlaps(&Rect::new(2, 2, 3, 3)));
    }
}
