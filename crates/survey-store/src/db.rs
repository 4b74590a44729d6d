//! Database connection management
//!
//! Provides utilities for opening and configuring SQLite connections

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, io_error, Result};
use crate::migrations::apply_migrations;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Where the survey database lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    OnDisk { path: PathBuf },
    InMemory,
}

impl StoreConfig {
    pub fn on_disk(path: impl Into<PathBuf>) -> Self {
        StoreConfig::OnDisk { path: path.into() }
    }
}

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Configure a connection for use by the repository
///
/// Foreign keys are off by default in SQLite and must be enabled per
/// connection for cascading deletes to fire.
pub fn configure(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(from_rusqlite)?;
    Ok(())
}

/// Open, configure and migrate a store
///
/// On-disk stores get their parent directory created and run in WAL mode.
pub fn open_with_config(config: &StoreConfig) -> Result<Connection> {
    let mut conn = match config {
        StoreConfig::OnDisk { path } => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| io_error("create_store_dir", e))?;
            }
            let conn = open(path)?;
            conn.execute_batch("PRAGMA journal_mode = WAL;")
                .map_err(from_rusqlite)?;
            conn
        }
        StoreConfig::InMemory => open_in_memory()?,
    };

    configure(&conn)?;
    apply_migrations(&mut conn)?;
    tracing::debug!(?config, "store opened");

    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_enables_foreign_keys() {
        let conn = open_in_memory().unwrap();
        configure(&conn).unwrap();

        let enabled: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[test]
    fn test_in_memory_config_is_migrated() {
        let conn = open_with_config(&StoreConfig::InMemory).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
