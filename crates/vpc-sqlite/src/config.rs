//! Connection configuration

use std::path::{Path, PathBuf};

/// SQLite connection settings
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    /// Database file path, or `:memory:` for an in-memory database
    pub path: PathBuf,
    /// Enable WAL journal mode
    pub wal_mode: bool,
    /// Enforce foreign keys
    pub foreign_keys: bool,
    /// Busy timeout in milliseconds
    pub busy_timeout_ms: u32,
}

impl SqliteConfig {
    /// Config for a database file at the given path
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            wal_mode: true,
            foreign_keys: true,
            busy_timeout_ms: 5_000,
        }
    }

    /// Config for an in-memory database (testing)
    pub fn memory() -> Self {
        Self {
            path: PathBuf::from(":memory:"),
            // WAL makes no sense in memory
            wal_mode: false,
            foreign_keys: true,
            busy_timeout_ms: 5_000,
        }
    }
}
