//! Error types for startup and configuration failures.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop the game before (or while) it runs.
///
/// Gameplay itself has no recoverable error paths: a missing or corrupt
/// high-score file reads as 0 and a failed high-score write is only logged.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed to load sprite {path}: {source}")]
    Asset {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("no asset directory found (looked in: {})", display_paths(.0))]
    AssetDirNotFound(Vec<PathBuf>),

    #[error("invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
