//! Local persistence for planning sessions and calendar events.
//!
//! Everything lives in one `SQLite` file under the storage root:
//!
//! ```text
//! <root>/voyagr.sqlite
//!   trip    # One row per planning session, wizard state as JSON
//!   event   # One row per calendar occurrence, grouped by series
//! ```

mod event;
mod trip;

use std::{fs, io, path::PathBuf};

use rusqlite::Connection;
use uuid::Uuid;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("trip not found: {0}")]
    TripNotFound(Uuid),

    #[error("trip already exists: {0}")]
    TripAlreadyExists(Uuid),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupt data: {0}")]
    Corrupt(String),
}

pub type Result<T> = core::result::Result<T, StorageError>;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS trip (
        id         TEXT PRIMARY KEY,
        created_at TEXT NOT NULL,
        state      TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS event (
        id      TEXT PRIMARY KEY,
        base_id TEXT NOT NULL,
        date    TEXT NOT NULL,
        payload TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS event_base_id ON event (base_id);
";

/// Local `SQLite`-backed storage for trips and calendar events.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Opens storage rooted at the given directory.
    ///
    /// The directory and database are created if they don't exist.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        let conn = Connection::open(root.join("voyagr.sqlite"))?;
        conn.execute_batch(SCHEMA)?;
        log::debug!("opened storage at {}", root.display());
        Ok(Self { conn })
    }

    /// Returns the default storage root: `~/.voyagr/`.
    pub fn default_root() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".voyagr"))
    }
}
