//! Terminal snake runner (default binary).
//!
//! Parses the command line, shows the welcome screen in cooked mode, then runs
//! one session in raw mode with the input router feeding the game loop.

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{cursor, execute, terminal};
use log::{info, warn};

use tui_snake::engine::{
    AudioSession, BellNotifier, FileScoreStore, GameLoop, Notifier, ScoreStore, SessionOutcome,
    SetupError, SilentNotifier, StartupConfig, DEFAULT_SCORE_FILE,
};
use tui_snake::input::{InputRouter, TerminalKeys};
use tui_snake::term::{terminal_size, TerminalRenderer, TerminalSession};
#[cfg(unix)]
use tui_snake::term::SignalRestore;
use tui_snake::types::{GameMode, DEFAULT_TICK_MS, INPUT_QUEUE_CAPACITY};

/// Environment variable naming a log file when `--log-file` is absent.
const LOG_FILE_ENV: &str = "TUI_SNAKE_LOG";

#[derive(Debug, Parser)]
#[command(name = "tui-snake", version, about = "Snake in the terminal")]
struct Cli {
    /// normal, nowalls, maze or powerups
    #[arg(short, long, default_value = "normal", value_parser = parse_mode)]
    mode: GameMode,

    /// Initial tick interval in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_TICK_MS, value_parser = clap::value_parser!(u64).range(1..))]
    speed: u64,

    /// Keep the speed constant as the score grows
    #[arg(short, long)]
    relaxed: bool,

    /// Disable sound
    #[arg(long)]
    no_sound: bool,

    /// Board width in cells (default: from terminal size)
    #[arg(long, value_parser = clap::value_parser!(u16).range(4..=500))]
    width: Option<u16>,

    /// Board height in cells (default: from terminal size)
    #[arg(long, value_parser = clap::value_parser!(u16).range(4..=500))]
    height: Option<u16>,

    /// Score file
    #[arg(long, default_value = DEFAULT_SCORE_FILE)]
    scores: PathBuf,

    /// RNG seed for a reproducible layout
    #[arg(long)]
    seed: Option<u32>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_mode(s: &str) -> Result<GameMode, String> {
    GameMode::from_str(s)
        .ok_or_else(|| format!("unknown mode '{s}', expected normal, nowalls, maze or powerups"))
}

impl Cli {
    fn startup(&self) -> StartupConfig {
        StartupConfig {
            mode: self.mode,
            speed: Duration::from_millis(self.speed),
            relaxed: self.relaxed,
            sound: !self.no_sound,
            width: self.width,
            height: self.height,
            score_path: self.scores.clone(),
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| std::env::var_os(LOG_FILE_ENV).map(PathBuf::from));
    if let Some(path) = &log_file {
        init_logging(path)?;
    }

    let startup = cli.startup();
    let scores = FileScoreStore::new(&startup.score_path);
    if !welcome(&startup, &scores)? {
        return Ok(());
    }

    let outcome = if startup.sound {
        play(&startup, BellNotifier::new(AudioSession::new()), scores)?
    } else {
        play(&startup, SilentNotifier, scores)?
    };

    println!("Final score: {}", outcome.score);
    Ok(())
}

/// Logs go to a file; stderr would tear the raw-mode frame.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

/// Print the welcome screen and wait for Enter. Returns `false` when the
/// player typed `q`.
fn welcome(startup: &StartupConfig, scores: &impl ScoreStore) -> Result<bool> {
    let mut out = io::stdout();
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    writeln!(out, "Welcome to TUI SNAKE!")?;
    writeln!(out)?;
    writeln!(
        out,
        "Controls: WASD or arrows to change direction, 'p' to pause, 'q' to quit."
    )?;
    writeln!(out)?;
    writeln!(out, "Game Mode: {}", startup.mode.description())?;
    if startup.mode == GameMode::PowerUps {
        writeln!(out, "  S+ Speed Up   S- Slow Down   Gh Ghost Mode")?;
        writeln!(out, "  L+ Extra Length   x2 Double Points")?;
    }
    if startup.relaxed {
        writeln!(out, "Relaxed Mode: ON - Speed remains constant")?;
    }
    writeln!(out)?;

    writeln!(out, "Top Scores:")?;
    match scores.top_n(5) {
        Ok(top) if top.is_empty() => writeln!(out, "  none yet")?,
        Ok(top) => {
            for (i, score) in top.iter().enumerate() {
                writeln!(out, "{}. {}", i + 1, score)?;
            }
        }
        Err(err) => {
            warn!("{err}");
            writeln!(out, "  unavailable")?;
        }
    }
    writeln!(out)?;
    write!(out, "Press Enter to start ('q' to exit)...")?;
    out.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim() != "q")
}

/// Run one session in raw mode.
fn play<N: Notifier>(
    startup: &StartupConfig,
    notifier: N,
    scores: FileScoreStore,
) -> Result<SessionOutcome> {
    let (cols, rows) = terminal_size();
    let mut state = startup.build_state(cols, rows);

    let session = TerminalSession::enter().map_err(SetupError::Terminal)?;
    #[cfg(unix)]
    let _signals = match SignalRestore::install() {
        Ok(watcher) => Some(watcher),
        Err(err) => {
            warn!("signal handlers unavailable: {err}");
            None
        }
    };
    let (router, events) =
        InputRouter::spawn(TerminalKeys, INPUT_QUEUE_CAPACITY).map_err(SetupError::Keyboard)?;

    let result = GameLoop::new(TerminalRenderer::new(), notifier, scores)
        .with_prompt(true)
        .run(&mut state, &events);

    // Unblocks a reader waiting on a full queue.
    drop(events);
    router.shutdown();
    session.leave();

    let outcome = result?;
    info!("exiting after {} frames", outcome.frames);
    Ok(outcome)
}
