#![allow(dead_code)]
//! Persistent storage using SQLite (rusqlite)
//!
//! This module provides:
//! - OS-standard data directory location (via `directories` crate)
//! - SQLite database with schema versioning
//! - User settings (key/value)
//! - Completed level history

use directories::ProjectDirs;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::PathBuf;

/// Current schema version. Bump this when making schema changes.
/// Version history:
/// - v1: meta, settings and level_results tables
const SCHEMA_VERSION: u32 = 1;

const REVEAL_HIDDEN_WORDS_KEY: &str = "reveal_hidden_words";

/// Errors that can occur during storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// Database error from SQLite
    Database(rusqlite::Error),
    /// Could not determine data directory
    NoDataDirectory,
    /// Schema version mismatch (future version)
    FutureSchemaVersion { found: u32, supported: u32 },
    /// Failed to create data directory
    CreateDirFailed(std::io::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Database(e) => write!(f, "database error: {}", e),
            StorageError::NoDataDirectory => write!(f, "could not determine data directory"),
            StorageError::FutureSchemaVersion { found, supported } => {
                write!(
                    f,
                    "database schema version {} is newer than supported version {}",
                    found, supported
                )
            }
            StorageError::CreateDirFailed(e) => write!(f, "failed to create data directory: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        StorageError::Database(e)
    }
}

/// User settings that survive between sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    /// Show hidden word paths on the board
    pub reveal_hidden_words: bool,
}

/// One completed level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelResult {
    pub level: u32,
    pub score: u32,
    pub goal: u32,
    pub words_found: u32,
    /// Unix timestamp (milliseconds)
    pub completed_at: i64,
}

/// The main storage handle for wordgrid data.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Open or create the storage database.
    ///
    /// Uses OS-standard directories:
    /// - Linux: `$XDG_DATA_HOME/wordgrid/` or `~/.local/share/wordgrid/`
    /// - macOS: `~/Library/Application Support/wordgrid/`
    pub fn open() -> Result<Self, StorageError> {
        let data_dir = Self::data_dir()?;

        // Ensure directory exists
        std::fs::create_dir_all(&data_dir).map_err(StorageError::CreateDirFailed)?;

        let db_path = data_dir.join("wordgrid.db");
        let conn = Connection::open(&db_path)?;

        let storage = Storage { conn };
        storage.initialize_schema()?;
        Ok(storage)
    }

    /// Open an in-memory database (for testing).
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        let storage = Storage { conn };
        storage.initialize_schema()?;
        Ok(storage)
    }

    /// Get the OS-standard data directory for wordgrid
    pub fn data_dir() -> Result<PathBuf, StorageError> {
        ProjectDirs::from("", "", "wordgrid")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or(StorageError::NoDataDirectory)
    }

    /// Load saved settings. Missing keys fall back to defaults.
    pub fn load_settings(&self) -> Result<Settings, StorageError> {
        let reveal: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                params![REVEAL_HIDDEN_WORDS_KEY],
                |row| row.get(0),
            )
            .optional()?;

        Ok(Settings {
            reveal_hidden_words: reveal.as_deref() == Some("true"),
        })
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![REVEAL_HIDDEN_WORDS_KEY, settings.reveal_hidden_words.to_string()],
        )?;
        Ok(())
    }

    /// Append a completed level to the history.
    pub fn record_level_result(
        &self,
        level: u32,
        score: u32,
        goal: u32,
        words_found: u32,
    ) -> Result<LevelResult, StorageError> {
        let completed_at = now_millis();
        self.conn.execute(
            "INSERT INTO level_results (level, score, goal, words_found, completed_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![level, score, goal, words_found, completed_at],
        )?;

        Ok(LevelResult {
            level,
            score,
            goal,
            words_found,
            completed_at,
        })
    }

    /// Best recorded score for a level, if it was ever completed.
    pub fn best_score(&self, level: u32) -> Result<Option<u32>, StorageError> {
        let best: Option<u32> = self.conn.query_row(
            "SELECT MAX(score) FROM level_results WHERE level = ?1",
            params![level],
            |row| row.get(0),
        )?;
        Ok(best)
    }

    /// Highest level ever completed, 0 if none.
    pub fn highest_level_completed(&self) -> Result<u32, StorageError> {
        let highest: u32 = self.conn.query_row(
            "SELECT COALESCE(MAX(level), 0) FROM level_results",
            [],
            |row| row.get(0),
        )?;
        Ok(highest)
    }

    // Private helper methods

    fn initialize_schema(&self) -> Result<(), StorageError> {
        let current_version = self.get_schema_version()?;

        if current_version == 0 {
            // Fresh database, create schema
            self.create_schema_v1()?;
        } else if current_version > SCHEMA_VERSION {
            // Database is from a newer version of wordgrid
            return Err(StorageError::FutureSchemaVersion {
                found: current_version,
                supported: SCHEMA_VERSION,
            });
        }

        Ok(())
    }

    fn get_schema_version(&self) -> Result<u32, StorageError> {
        let table_exists: bool = self.conn.query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='meta'",
            [],
            |row| row.get(0),
        )?;

        if !table_exists {
            return Ok(0);
        }

        let version: Option<u32> = self
            .conn
            .query_row("SELECT schema_version FROM meta LIMIT 1", [], |row| row.get(0))
            .optional()?;

        Ok(version.unwrap_or(0))
    }

    fn create_schema_v1(&self) -> Result<(), StorageError> {
        self.conn.execute_batch(
            r#"
            -- Meta table: stores schema version
            CREATE TABLE IF NOT EXISTS meta (
                schema_version INTEGER NOT NULL,
                created_at INTEGER NOT NULL
            );

            CREATE TABLE IF NOT EXISTS settings (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS level_results (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                level INTEGER NOT NULL,
                score INTEGER NOT NULL,
                goal INTEGER NOT NULL,
                words_found INTEGER NOT NULL,
                completed_at INTEGER NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_level_results_level ON level_results (level);
            "#,
        )?;

        self.conn.execute(
            "INSERT INTO meta (schema_version, created_at) VALUES (?1, ?2)",
            params![SCHEMA_VERSION, now_millis()],
        )?;

        Ok(())
    }
}

fn now_millis() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
