//! Database connection management
//!
//! Every domain operation runs on a connection opened for that interaction
//! and dropped afterwards; nothing holds a connection across interactions.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, io_error, Result};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Open a SQLite database at the given path and configure it
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let conn = Connection::open(path).map_err(from_rusqlite)?;
    configure(&conn)?;
    Ok(conn)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().map_err(from_rusqlite)?;
    configure(&conn)?;
    Ok(conn)
}

/// Configure a connection
///
/// Foreign keys must be on for the `ON DELETE SET NULL` assignment policy.
pub fn configure(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON; PRAGMA journal_mode = WAL;")
        .map_err(from_rusqlite)?;
    Ok(())
}

/// A single-file database location
///
/// Cheap to clone; `connect` opens a fresh configured connection each time.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create parent directories and apply pending migrations
    pub fn initialize(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| io_error("create_db_dir", e))?;
        }
        let mut conn = self.connect()?;
        crate::migrations::apply_migrations(&mut conn)
    }

    /// Open a connection for one interaction
    pub fn connect(&self) -> Result<Connection> {
        tracing::debug!(path = %self.path.display(), "opening database connection");
        open(&self.path)
    }
}
