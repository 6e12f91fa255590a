//! Flappy - terminal Flappy Bird library
//!
//! This module exposes the game logic for testing and for the binary.

pub mod assets;
pub mod config;
pub mod constants;
pub mod driver;
pub mod entities;
pub mod error;
pub mod input;
pub mod pacing;
pub mod persistence;
pub mod physics;
pub mod session;
pub mod spawner;
pub mod ui;

pub use config::GameConfig;
pub use error::GameError;
pub use session::{Phase, Session, TickOutcome};
