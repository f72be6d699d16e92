//! wordgrid - a word search puzzle in a 5x5 letter grid
//!
//! Trace adjacent tiles to spell words. Find the hidden ones. Reach the goal.

mod app;
mod game;
mod storage;
mod tui;

use app::{App, CompletedLevel, Direction};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use game::dictionary::{self, Dictionary};
use game::levels::LevelTable;
use game::round::GameRound;
use simplelog::{LevelFilter, WriteLogger};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use storage::{Settings, Storage};
use tui::Tui;

#[derive(Debug, Parser)]
#[command(version, about = "Find words in a 5x5 letter grid")]
struct Args {
    /// Level to start at (defaults to the level after the best one completed)
    #[arg(short, long)]
    level: Option<u32>,

    /// Accepted words, one per line
    #[arg(long)]
    words: Option<PathBuf>,

    /// Words that may be hidden in the grid, one per line
    #[arg(long)]
    hidden: Option<PathBuf>,

    /// Level table CSV (`level,goal,time_limit_sec`)
    #[arg(long)]
    levels: Option<PathBuf>,

    /// Start with hidden words revealed
    #[arg(long)]
    reveal: bool,

    /// Write a debug log to wordgrid.log in the data directory
    #[arg(long)]
    debug: bool,

    /// Don't read or write saved progress and settings
    #[arg(long)]
    no_save: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    if args.debug {
        setup_logging();
    }

    let storage = if args.no_save { None } else { open_storage() };
    let settings = storage.as_ref().map(load_settings).unwrap_or_default();

    let dictionary = load_dictionary(args.words.as_deref(), args.hidden.as_deref())?;
    let levels = load_levels(args.levels.as_deref())?;
    let start_level = args
        .level
        .unwrap_or_else(|| resume_level(storage.as_ref()));
    log::info!(
        "Starting at level {} with {} words, {} hidden candidates",
        start_level,
        dictionary.word_count(),
        dictionary.hidden_words().len()
    );

    let round = GameRound::new(dictionary, levels, start_level);
    let mut app = App::new(round, args.reveal || settings.reveal_hidden_words);

    // Initialize terminal
    let mut terminal = Tui::new()?;
    terminal.enter()?;

    loop {
        terminal.draw(|frame| tui::render(frame, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only handle key press events (not release)
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Up => app.on_move(Direction::Up),
                    KeyCode::Down => app.on_move(Direction::Down),
                    KeyCode::Left => app.on_move(Direction::Left),
                    KeyCode::Right => app.on_move(Direction::Right),
                    KeyCode::Char(' ') => app.on_select(),
                    KeyCode::Backspace => app.on_backspace(),
                    KeyCode::Enter => app.on_submit(),
                    KeyCode::Esc => app.on_escape(),
                    KeyCode::Tab => app.on_rotate(),
                    KeyCode::F(2) => {
                        let reveal_hidden_words = app.on_toggle_reveal();
                        if let Some(storage) = &storage {
                            save_settings(storage, Settings { reveal_hidden_words });
                        }
                    }
                    KeyCode::Char('q') => app.quit(),
                    _ => {}
                }
            }
        }

        if let Some(completed) = app.take_completed_level() {
            if let Some(storage) = &storage {
                app.best_score = record_level(storage, &completed);
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Terminal cleanup happens automatically via Tui::drop
    Ok(())
}

fn setup_logging() {
    let dir = match Storage::data_dir() {
        Ok(dir) if fs::create_dir_all(&dir).is_ok() => dir,
        _ => PathBuf::from("."),
    };
    let path = dir.join("wordgrid.log");
    let file = match File::create(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Logging disabled, can't create {}: {}", path.display(), e);
            return;
        }
    };
    if let Err(e) = WriteLogger::init(
        LevelFilter::Debug,
        simplelog::ConfigBuilder::new()
            .set_target_level(LevelFilter::Error)
            .build(),
        file,
    ) {
        eprintln!("Logging disabled: {}", e);
    }
}

fn open_storage() -> Option<Storage> {
    match Storage::open() {
        Ok(storage) => Some(storage),
        Err(e) => {
            log::error!("Storage unavailable, progress will not be saved: {}", e);
            None
        }
    }
}

fn load_settings(storage: &Storage) -> Settings {
    storage.load_settings().unwrap_or_else(|e| {
        log::error!("Failed to load settings: {}", e);
        Settings::default()
    })
}

fn save_settings(storage: &Storage, settings: Settings) {
    if let Err(e) = storage.save_settings(&settings) {
        log::error!("Failed to save settings: {}", e);
    }
}

/// Save a completed level and return the best score recorded for it.
fn record_level(storage: &Storage, completed: &CompletedLevel) -> Option<u32> {
    if let Err(e) = storage.record_level_result(
        completed.level,
        completed.score,
        completed.goal,
        completed.words_found,
    ) {
        log::error!("Failed to record level {}: {}", completed.level, e);
    }
    storage.best_score(completed.level).unwrap_or_else(|e| {
        log::error!("Failed to read best score for level {}: {}", completed.level, e);
        None
    })
}

/// Level after the highest one ever completed.
fn resume_level(storage: Option<&Storage>) -> u32 {
    let highest = storage
        .map(|s| {
            s.highest_level_completed().unwrap_or_else(|e| {
                log::error!("Failed to read level history: {}", e);
                0
            })
        })
        .unwrap_or(0);
    highest.saturating_add(1)
}

fn read_text(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
        .map_err(|e| io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))
}

/// Word lists from files where given, embedded lists otherwise.
fn load_dictionary(words: Option<&Path>, hidden: Option<&Path>) -> io::Result<Dictionary> {
    if words.is_none() && hidden.is_none() {
        return Ok(Dictionary::builtin());
    }

    let valid_text = match words {
        Some(path) => read_text(path)?,
        None => dictionary::WORDS_DATA.to_string(),
    };
    let hidden_text = match hidden {
        Some(path) => read_text(path)?,
        None => dictionary::HIDDEN_WORDS_DATA.to_string(),
    };
    Ok(Dictionary::from_text(&valid_text, &hidden_text))
}

fn load_levels(path: Option<&Path>) -> io::Result<LevelTable> {
    match path {
        Some(path) => {
            let table = LevelTable::parse(&read_text(path)?);
            if table.is_empty() {
                log::warn!("No usable rows in {}", path.display());
            }
            Ok(table)
        }
        None => Ok(LevelTable::builtin().clone()),
    }
}
