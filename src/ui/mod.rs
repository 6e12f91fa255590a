//! Frame composition for the three screens.
//!
//! [`compose`] issues draw calls against a [`Surface`] in playfield
//! coordinates; it knows nothing about terminals. [`canvas::PixelCanvas`]
//! rasterizes those calls and [`playfield::PlayfieldWidget`] presents the
//! result through ratatui.

pub mod canvas;
pub mod playfield;

use crate::assets::SpriteId;
use crate::constants::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use crate::entities::PipeKind;
use crate::session::{Phase, Session};

/// Color of overlay text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    White,
    Red,
}

/// Anything that accepts sprite and text draw calls at playfield positions.
pub trait Surface {
    fn blit(&mut self, sprite: SpriteId, x: i32, y: i32);
    fn text(&mut self, text: &str, x: i32, y: i32, color: TextColor);
}

// Text positions, in playfield pixels.
const HIGH_SCORE_START_POS: (i32, i32) = (10, 30);
const HIGH_SCORE_POS: (i32, i32) = (10, 25);
const SCORE_POS: (i32, i32) = (10, 50);
const START_PROMPT_POS: (i32, i32) = (50, PLAYFIELD_HEIGHT / 2 - 50);
const GAME_OVER_POS: (i32, i32) = (PLAYFIELD_WIDTH / 2 - 50, PLAYFIELD_HEIGHT / 2 - 20);
const RESTART_PROMPT_POS: (i32, i32) = (40, PLAYFIELD_HEIGHT / 2 + 20);

/// Issue every draw call for one frame of `session`.
pub fn compose(session: &Session, surface: &mut impl Surface) {
    surface.blit(SpriteId::Background, 0, 0);

    match session.phase {
        Phase::Start => {
            let (x, y) = START_PROMPT_POS;
            surface.text("Press SPACE to Start", x, y, TextColor::White);
            let (x, y) = HIGH_SCORE_START_POS;
            surface.text(
                &format!("High Score: {}", session.high_score),
                x,
                y,
                TextColor::White,
            );
        }
        Phase::Playing => {
            draw_pipes(session, surface);
            draw_bird(session, surface);
            draw_scores(session, surface);
        }
        Phase::GameOver => {
            draw_bird(session, surface);
            draw_pipes(session, surface);
            let (x, y) = GAME_OVER_POS;
            surface.text("Game Over", x, y, TextColor::Red);
            let (x, y) = RESTART_PROMPT_POS;
            surface.text("Press SPACE to Restart", x, y, TextColor::White);
            draw_scores(session, surface);
        }
    }
}

fn draw_pipes(session: &Session, surface: &mut impl Surface) {
    for pipe in &session.pipes {
        let sprite = match pipe.kind {
            PipeKind::Top => SpriteId::PipeTop,
            PipeKind::Bottom => SpriteId::PipeBottom,
        };
        surface.blit(sprite, pipe.x, pipe.y);
    }
}

fn draw_bird(session: &Session, surface: &mut impl Surface) {
    let rect = session.bird.rect();
    surface.blit(SpriteId::Bird, rect.x, rect.y);
}

fn draw_scores(session: &Session, surface: &mut impl Surface) {
    let (x, y) = SCORE_POS;
    surface.text(&format!("Score: {}", session.score), x, y, TextColor::White);
    let (x, y) = HIGH_SCORE_POS;
    surface.text(
        &format!("High Score: {}", session.high_score),
        x,
        y,
        TextColor::White,
    );
}
