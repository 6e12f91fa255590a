//! High-score persistence: one non-negative integer in a text file.

use crate::constants::{APP_NAME, HIGH_SCORE_FILE};
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the per-user data directory for the game.
pub fn data_dir() -> io::Result<PathBuf> {
    let project_dirs = ProjectDirs::from("", "", APP_NAME).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine data directory",
        )
    })?;
    Ok(project_dirs.data_dir().to_path_buf())
}

/// Reads and writes the persisted high score.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    /// Store backed by `highscore.txt` in the platform data directory.
    pub fn new() -> io::Result<Self> {
        Ok(Self::at(data_dir()?.join(HIGH_SCORE_FILE)))
    }

    /// Store backed by an explicit file.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the high score, returning 0 if the file is missing or unreadable.
    pub fn load(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(contents) => parse_score(&contents).unwrap_or_else(|| {
                log::warn!(
                    "ignoring corrupt high score file {}",
                    self.path.display()
                );
                0
            }),
            Err(e) => {
                log::debug!("no high score at {}: {}", self.path.display(), e);
                0
            }
        }
    }

    /// Overwrite the file with `score`.
    pub fn save(&self, score: u32) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, score.to_string())
    }
}

/// Parse the file contents. Surrounding whitespace is allowed, nothing else.
fn parse_score(contents: &str) -> Option<u32> {
    contents.trim().parse().ok()
}
