//! Sprite loading and asset directory lookup.
//!
//! The four sprites are decoded once at startup. Any failure here is fatal:
//! there is no fallback rendering.

use crate::constants::*;
use crate::error::GameError;
use image::imageops::{self, FilterType};
use std::env;
use std::path::{Path, PathBuf};

/// The fixed set of sprites the game draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Background,
    Bird,
    PipeTop,
    PipeBottom,
}

impl SpriteId {
    pub const ALL: [SpriteId; 4] = [
        SpriteId::Background,
        SpriteId::Bird,
        SpriteId::PipeTop,
        SpriteId::PipeBottom,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            SpriteId::Background => "background.png",
            SpriteId::Bird => "bird.png",
            SpriteId::PipeTop => "pipe_top.png",
            SpriteId::PipeBottom => "pipe_bottom.png",
        }
    }

    /// Size the sprite is drawn at, in logical pixels.
    pub fn size(self) -> (u32, u32) {
        match self {
            SpriteId::Background => (PLAYFIELD_WIDTH as u32, PLAYFIELD_HEIGHT as u32),
            SpriteId::Bird => (BIRD_WIDTH as u32, BIRD_HEIGHT as u32),
            SpriteId::PipeTop | SpriteId::PipeBottom => (PIPE_WIDTH as u32, PIPE_HEIGHT as u32),
        }
    }
}

/// A decoded RGBA image.
#[derive(Debug, Clone)]
pub struct Sprite {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA pixels.
    pub pixels: Vec<[u8; 4]>,
}

impl Sprite {
    /// Decode `path` and scale it to `size` if it differs.
    pub fn load(path: &Path, size: (u32, u32)) -> Result<Self, GameError> {
        let decoded = image::open(path)
            .map_err(|source| GameError::Asset {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();

        let rgba = if decoded.dimensions() == size {
            decoded
        } else {
            log::debug!(
                "scaling {} from {:?} to {:?}",
                path.display(),
                decoded.dimensions(),
                size
            );
            imageops::resize(&decoded, size.0, size.1, FilterType::Nearest)
        };

        Ok(Self {
            width: rgba.width(),
            height: rgba.height(),
            pixels: rgba.pixels().map(|p| p.0).collect(),
        })
    }

    /// A sprite filled with one color, for tests and placeholders.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self {
            width,
            height,
            pixels: vec![rgba; (width * height) as usize],
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels[(y * self.width + x) as usize]
    }
}

/// All sprites, loaded once.
#[derive(Debug, Clone)]
pub struct Assets {
    pub background: Sprite,
    pub bird: Sprite,
    pub pipe_top: Sprite,
    pub pipe_bottom: Sprite,
}

impl Assets {
    /// Load every sprite from `dir`.
    pub fn load(dir: &Path) -> Result<Self, GameError> {
        let load = |id: SpriteId| Sprite::load(&dir.join(id.file_name()), id.size());
        Ok(Self {
            background: load(SpriteId::Background)?,
            bird: load(SpriteId::Bird)?,
            pipe_top: load(SpriteId::PipeTop)?,
            pipe_bottom: load(SpriteId::PipeBottom)?,
        })
    }

    pub fn get(&self, id: SpriteId) -> &Sprite {
        match id {
            SpriteId::Background => &self.background,
            SpriteId::Bird => &self.bird,
            SpriteId::PipeTop => &self.pipe_top,
            SpriteId::PipeBottom => &self.pipe_bottom,
        }
    }
}

/// Candidate asset directories, most specific first.
///
/// Covers an explicit `--assets` flag, the `FLAPPY_ASSETS` variable, a
/// standalone bundle (`assets/` next to the executable), an installed layout
/// (`../share/flappy/assets`), the working directory and the source tree.
pub fn asset_dir_candidates(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(dir) = explicit {
        candidates.push(dir.to_path_buf());
    }
    if let Some(dir) = env::var_os(ASSETS_ENV_VAR) {
        candidates.push(PathBuf::from(dir));
    }
    if let Some(exe_dir) = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(exe_dir.join("assets"));
        candidates.push(exe_dir.join("../share").join(APP_NAME).join("assets"));
    }
    candidates.push(PathBuf::from("assets"));
    candidates.push(Path::new(env!("CARGO_MANIFEST_DIR")).join("assets"));

    candidates
}

/// First candidate that is an existing directory.
pub fn find_asset_dir(candidates: Vec<PathBuf>) -> Result<PathBuf, GameError> {
    match candidates.iter().find(|dir| dir.is_dir()) {
        Some(dir) => Ok(dir.clone()),
        None => Err(GameError::AssetDirNotFound(candidates)),
    }
}
