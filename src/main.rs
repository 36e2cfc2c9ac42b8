//! Terminal puzzle runner (default binary).
//!
//! Turn-based: render, block on the next key, apply it, repeat. There is no
//! tick; the screen only changes in response to input.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::EnvFilter;

use tetromino_puzzle::core::{Catalog, PuzzleSnapshot};
use tetromino_puzzle::engine::Game;
use tetromino_puzzle::input::{handle_key_event, should_quit, Cursor};
use tetromino_puzzle::term::{FrameBuffer, Overlay, PuzzleView, TerminalRenderer, Viewport};

#[derive(Parser)]
#[command(name = "tetromino-puzzle", about = "Turn-based tetromino placement puzzle")]
struct Cli {
    /// Puzzle to play
    #[arg(short, long, default_value = "classic", env = "TETROMINO_PUZZLE")]
    puzzle: String,

    /// TOML file with extra `[[puzzle]]` entries
    #[arg(long, env = "TETROMINO_PUZZLE_CONFIG")]
    config: Option<PathBuf>,

    /// Code for locked puzzles
    #[arg(long, env = "TETROMINO_PUZZLE_UNLOCK")]
    unlock: Option<String>,

    /// Write logs to this file (the terminal belongs to the game)
    #[arg(long, env = "TETROMINO_PUZZLE_LOG")]
    log_file: Option<PathBuf>,

    /// List available puzzles and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let catalog = load_catalog(cli.config.as_deref())?;
    if cli.list {
        for p in catalog.puzzles() {
            let lock = if p.is_locked() { " (locked)" } else { "" };
            println!("{}{}", p.name(), lock);
        }
        return Ok(());
    }

    let puzzle = catalog.find(&cli.puzzle)?.clone();
    puzzle
        .unlock(cli.unlock.as_deref())
        .context("pass the puzzle's code with --unlock")?;
    tracing::info!(puzzle = puzzle.name(), "starting");

    let mut game = Game::new(puzzle);
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_catalog(config: Option<&Path>) -> Result<Catalog> {
    let builtin = Catalog::builtin();
    match config {
        None => Ok(builtin),
        Some(path) => {
            let custom = Catalog::load(path)
                .with_context(|| format!("load puzzles from {}", path.display()))?;
            Ok(builtin.with_overrides(custom))
        }
    }
}

fn run(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    let view = PuzzleView::default();
    let title = format!("{} puzzle", game.puzzle().name());
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = PuzzleSnapshot::default();
    let mut cursor = Cursor::default();
    let mut message: Option<String> = None;

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let preview = game.preview_cells(cursor.coord());
        let overlay = Overlay {
            title: &title,
            cursor: Some(cursor.coord()),
            preview: &preview,
            message: message.as_deref(),
        };
        let (w, h) = term.size().unwrap_or((80, 24));
        view.render_into(&snap, &overlay, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Block until the next key.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                let Some(action) = handle_key_event(key, game.puzzle().catalog()) else {
                    continue;
                };
                let Some(intent) = cursor.resolve(action, snap.rows, snap.cols) else {
                    continue;
                };
                message = match game.try_apply(intent) {
                    Ok(_) if game.is_won() => Some(format!(
                        "solved in {} moves",
                        game.history().cursor()
                    )),
                    Ok(_) => None,
                    Err(err) => {
                        tracing::debug!(intent = intent.as_str(), code = err.code(), "refused");
                        Some(err.to_string())
                    }
                };
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
