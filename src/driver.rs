//! The fixed-rate frame loop.
//!
//! One iteration: drain input, apply it, run the ticks the accumulator owes,
//! compose the frame, present it, then sleep until the next tick is due.

use crate::input::{self, InputEvent};
use crate::pacing::FixedTimestep;
use crate::session::{Session, TickOutcome};
use crate::ui::canvas::PixelCanvas;
use crate::ui::compose;
use crate::ui::playfield::PlayfieldWidget;
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Instant;

/// Whether the loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Session, frame buffer and randomness for one process.
pub struct Game<R: Rng> {
    pub session: Session,
    canvas: PixelCanvas,
    rng: R,
}

impl<R: Rng> Game<R> {
    pub fn new(session: Session, canvas: PixelCanvas, rng: R) -> Self {
        Self {
            session,
            canvas,
            rng,
        }
    }

    /// Apply this iteration's input, in arrival order. A quit stops
    /// processing immediately; nothing after it is applied.
    pub fn handle_input(&mut self, events: &[InputEvent], now_ms: u64) -> LoopControl {
        for event in events {
            match event {
                InputEvent::Quit => return LoopControl::Quit,
                InputEvent::Action => self.session.action(now_ms, &mut self.rng),
            }
        }
        LoopControl::Continue
    }

    /// Run `ticks` fixed updates.
    pub fn update(&mut self, ticks: u32, now_ms: u64) {
        for _ in 0..ticks {
            if let TickOutcome::Crashed(_) = self.session.tick(now_ms, &mut self.rng) {
                break;
            }
        }
    }

    /// Compose the current state and present it.
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        self.canvas.begin_frame();
        compose(&self.session, &mut self.canvas);
        terminal.draw(|frame| {
            let area = frame.size();
            frame.render_widget(PlayfieldWidget::new(&self.canvas), area);
        })?;
        Ok(())
    }

    pub fn canvas(&self) -> &PixelCanvas {
        &self.canvas
    }
}

/// Drive `game` until the player quits.
///
/// `start` is the monotonic origin the session's millisecond clock is
/// measured from; it must be the same instant the session was created at.
pub fn run<B: Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    game: &mut Game<R>,
    start: Instant,
) -> io::Result<()> {
    let mut timestep = FixedTimestep::new(game.session.config().tick_duration());
    let mut last = Instant::now();

    loop {
        let events = input::drain_pending()?;
        if game.handle_input(&events, elapsed_ms(start)) == LoopControl::Quit {
            log::info!("quit requested");
            return Ok(());
        }

        let now = Instant::now();
        let ticks = timestep.advance(now - last);
        last = now;
        game.update(ticks, elapsed_ms(start));

        game.draw(terminal)?;

        std::thread::sleep(timestep.until_next_tick());
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{Assets, Sprite};
    use crate::config::GameConfig;
    use crate::persistence::HighScoreStore;
    use crate::session::Phase;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use ratatui::backend::TestBackend;

    fn test_game(name: &str) -> Game<ChaCha8Rng> {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let store = HighScoreStore::at(std::env::temp_dir().join(format!(
            "flappy_driver_{}_{}.txt",
            std::process::id(),
            name
        )));
        let session = Session::new(GameConfig::default(), store, 0, &mut rng);
        let canvas = PixelCanvas::new(Assets {
            background: Sprite::solid(360, 640, [80, 180, 200, 255]),
            bird: Sprite::solid(34, 24, [250, 200, 60, 255]),
            pipe_top: Sprite::solid(64, 512, [0, 150, 0, 255]),
            pipe_bottom: Sprite::solid(64, 512, [0, 150, 0, 255]),
        });
        Game::new(session, canvas, rng)
    }

    #[test]
    fn test_quit_stops_before_later_events() {
        let mut game = test_game("quit");
        let control = game.handle_input(&[InputEvent::Quit, InputEvent::Action], 0);
        assert_eq!(control, LoopControl::Quit);
        assert_eq!(game.session.phase, Phase::Start);
    }

    #[test]
    fn test_two_actions_start_then_jump() {
        let mut game = test_game("two_actions");
        let control = game.handle_input(&[InputEvent::Action, InputEvent::Action], 0);
        assert_eq!(control, LoopControl::Continue);
        assert_eq!(game.session.phase, Phase::Playing);
        assert_eq!(game.session.bird.velocity, game.session.config().jump_velocity);
    }

    #[test]
    fn test_update_runs_each_owed_tick() {
        let mut game = test_game("ticks");
        game.handle_input(&[InputEvent::Action], 0);
        game.update(3, 16);
        // Three ticks of gravity: 0.6 + 1.2 + 1.8.
        assert!((game.session.bird.y - 323.6).abs() < 1e-9);
    }

    #[test]
    fn test_update_stops_after_crash() {
        let mut game = test_game("crash");
        game.handle_input(&[InputEvent::Action], 0);
        game.session.bird.y = 700.0;
        game.update(5, 16);
        assert_eq!(game.session.phase, Phase::GameOver);
        assert_eq!(game.session.bird.y, 700.0);
    }

    #[test]
    fn test_draw_presents_start_screen() {
        let mut game = test_game("draw");
        let mut terminal = Terminal::new(TestBackend::new(36, 32)).unwrap();
        game.draw(&mut terminal).unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..36).map(|x| buffer.get(x, 13).symbol()).collect();
        assert!(row.contains("Press SPACE"), "row was {row:?}");
        assert_eq!(game.canvas().labels().len(), 2);
    }
}
