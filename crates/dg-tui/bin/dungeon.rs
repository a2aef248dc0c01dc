//! Dungeon crawler
//!
//! Main entry point for the game.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use dg_core::{DEFAULT_MAP, GameConfig, GameState};
use dg_tui::{App, Theme, logging};

/// A small turn-based dungeon crawler
#[derive(Parser, Debug)]
#[command(name = "dungeon")]
#[command(author, version, about = "Explore the dungeon!", long_about = None)]
struct Args {
    /// Map file to play (defaults to the built-in map)
    #[arg(short = 'm', long = "map")]
    map: Option<PathBuf>,

    /// JSON game config (spawn point, starting items, greeting)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Use colors for a light terminal background
    #[arg(long = "light")]
    light: bool,

    /// Directory for the log file
    #[arg(long = "log-dir")]
    log_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse command-line arguments before terminal setup
    let args = Args::parse();

    // Show version info
    if args.verbose {
        println!("dungeon {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let log_dir = args.log_dir.clone().unwrap_or_else(logging::default_log_dir);
    let _guard = logging::init(&log_dir)?;

    // Build the game before touching the terminal so errors print normally
    let game = new_game(&args)?;
    let theme = if args.light { Theme::light() } else { Theme::detect() };
    let mut app = App::new(game, theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    tracing::info!(turns = app.state().turn(), "game over");
    println!("Thanks for playing!");
    Ok(())
}

/// Main loop: one action per turn until the player quits
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        // Draw
        terminal.draw(|frame| app.render(frame))?;

        // Handle input
        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;

            if let Some(action) = app.handle_event(event) {
                app.execute(&action);
            }

            if app.should_quit() {
                return Ok(());
            }
        }
    }
}

fn new_game(args: &Args) -> Result<GameState> {
    let config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("could not read config {}", path.display()))?;
            GameConfig::from_json(&json)?
        }
        None => GameConfig::default(),
    };

    let game = match &args.map {
        Some(path) => GameState::load(&config, path)?,
        None => GameState::new(&config, DEFAULT_MAP)?,
    };
    tracing::info!(map = ?args.map, "new game");
    Ok(game)
}
