use anyhow::Context;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, ExecutableCommand};
use flappy::assets::{self, Assets};
use flappy::config::GameConfig;
use flappy::constants::LOG_FILE;
use flappy::driver::{self, Game};
use flappy::persistence::{self, HighScoreStore};
use flappy::session::Session;
use flappy::ui::canvas::PixelCanvas;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Default)]
struct CliOptions {
    assets: Option<PathBuf>,
    highscore: Option<PathBuf>,
    config: Option<PathBuf>,
    log: Option<PathBuf>,
}

fn parse_args() -> CliOptions {
    let args: Vec<String> = std::env::args().collect();
    let mut options = CliOptions::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--assets" => options.assets = Some(path_value(&args, &mut i)),
            "--highscore" => options.highscore = Some(path_value(&args, &mut i)),
            "--config" => options.config = Some(path_value(&args, &mut i)),
            "--log" => options.log = Some(path_value(&args, &mut i)),
            "--version" | "-v" => {
                println!("flappy {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }
    options
}

/// Consume the value following the flag at `args[*i]`.
fn path_value(args: &[String], i: &mut usize) -> PathBuf {
    let flag = &args[*i];
    *i += 1;
    match args.get(*i) {
        Some(v) => PathBuf::from(v),
        None => {
            eprintln!("{flag} requires a path");
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "Flappy - terminal Flappy Bird\n\
         \n\
         Usage: flappy [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --assets DIR      Sprite directory (default: bundled assets)\n\
         \x20 --highscore FILE  High score file (default: data dir/highscore.txt)\n\
         \x20 --config FILE     JSON file overriding physics and spawn tuning\n\
         \x20 --log FILE        Log file (default: data dir/flappy.log, level from RUST_LOG)\n\
         \x20 --version, -v     Show version information\n\
         \x20 --help, -h        Show this help\n\
         \n\
         Controls: Space/Up/Enter = start, flap, restart; Esc/q = quit"
    );
}

/// Send logs to a file; the terminal is owned by the game.
fn init_logging(path: Option<PathBuf>) {
    let path = match path {
        Some(p) => p,
        None => match persistence::data_dir() {
            Ok(dir) => dir.join(LOG_FILE),
            Err(e) => {
                eprintln!("Warning: logging disabled: {e}");
                return;
            }
        },
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok();
    }
    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        Err(e) => eprintln!("Warning: could not open log file {}: {e}", path.display()),
    }
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    // Raw mode is on from here; any later failure must turn it back off.
    or_restore(enter_game_screen(), restore_terminal)
}

/// Run `restore` if `result` is an error, then pass `result` through.
fn or_restore<T>(result: io::Result<T>, restore: impl FnOnce() -> io::Result<()>) -> io::Result<T> {
    if result.is_err() {
        let _ = restore();
    }
    result
}

fn enter_game_screen() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(cursor::Hide)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(cursor::Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let options = parse_args();
    init_logging(options.log.clone());

    let config = match &options.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };

    // Sprites are loaded before the terminal is touched so failures print normally.
    let asset_dir = assets::find_asset_dir(assets::asset_dir_candidates(options.assets.as_deref()))?;
    let assets = Assets::load(&asset_dir).context("loading sprites")?;
    log::info!("assets loaded from {}", asset_dir.display());

    let store = match options.highscore {
        Some(path) => HighScoreStore::at(path),
        None => HighScoreStore::new().context("locating high score file")?,
    };
    log::info!("high score file: {}", store.path().display());

    let start = Instant::now();
    let mut rng = rand::thread_rng();
    let session = Session::new(config, store, 0, &mut rng);
    log::info!("loaded high score {}", session.high_score);
    let mut game = Game::new(session, PixelCanvas::new(assets), rng);

    // Restore the terminal even if the game panics.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let result = driver::run(&mut terminal, &mut game, start);
    restore_terminal()?;
    result.context("running game loop")?;

    log::info!("exiting (high score {})", game.session.high_score);
    Ok(())
}
