// Playfield (logical pixels)
pub const PLAYFIELD_WIDTH: i32 = 360;
pub const PLAYFIELD_HEIGHT: i32 = 640;

// Game timing constants
pub const TICK_RATE_HZ: u32 = 60;
pub const MAX_TICK_RATE_HZ: u32 = 1000;
pub const MAX_FRAME_DELTA_MS: u64 = 250;

// Bird
pub const BIRD_WIDTH: i32 = 34;
pub const BIRD_HEIGHT: i32 = 24;
pub const BIRD_START_X: i32 = PLAYFIELD_WIDTH / 8;
pub const BIRD_START_Y: f64 = (PLAYFIELD_HEIGHT / 2) as f64;

// Physics (per tick)
pub const GRAVITY: f64 = 0.6;
pub const JUMP_VELOCITY: f64 = -9.0;
pub const PIPE_VELOCITY: i32 = -4;

// Pipes
pub const PIPE_WIDTH: i32 = 64;
pub const PIPE_HEIGHT: i32 = 512;
pub const TOP_PIPE_Y_RANGE: (i32, i32) = (-400, -100);
pub const PIPE_GAP_RANGE: (i32, i32) = (130, 180);
pub const PIPE_INTERVAL_RANGE_MS: (u64, u64) = (1200, 1700);

// Save system constants
pub const HIGH_SCORE_FILE: &str = "highscore.txt";
pub const LOG_FILE: &str = "flappy.log";
pub const APP_NAME: &str = "flappy";
pub const ASSETS_ENV_VAR: &str = "FLAPPY_ASSETS";
