//! SQLite connection management
//!
//! Uses a simple Arc<Mutex<Connection>> pattern; the tool is single-process
//! and single-user, so a mutex is all the coordination required.

use crate::config::SqliteConfig;
use crate::error::{SqliteError, SqliteResult};
use crate::schema;
use parking_lot::Mutex;
use rusqlite::Connection;
use std::sync::Arc;
use tracing::{debug, info};

/// Thread-safe SQLite connection wrapper
#[derive(Clone)]
pub struct SqlitePool {
    conn: Arc<Mutex<Connection>>,
    config: SqliteConfig,
}

impl SqlitePool {
    /// Create a new connection with the given configuration
    pub fn new(config: SqliteConfig) -> SqliteResult<Self> {
        info!(path = ?config.path, "Opening SQLite database");

        let conn = if config.path.to_str() == Some(":memory:") {
            Connection::open_in_memory()?
        } else {
            // Ensure parent directory exists
            if let Some(parent) = config.path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    SqliteError::Connection(format!("Failed to create directory: {}", e))
                })?;
            }
            Connection::open(&config.path)?
        };

        let pool = Self {
            conn: Arc::new(Mutex::new(conn)),
            config,
        };

        pool.initialize()?;

        Ok(pool)
    }

    /// Create an in-memory pool for testing
    pub fn memory() -> SqliteResult<Self> {
        Self::new(SqliteConfig::memory())
    }

    /// Execute a closure with the connection
    pub fn with_connection<F, T>(&self, f: F) -> SqliteResult<T>
    where
        F: FnOnce(&Connection) -> SqliteResult<T>,
    {
        let conn = self.conn.lock();
        f(&conn)
    }

    /// Configure pragmas and apply schema
    fn initialize(&self) -> SqliteResult<()> {
        self.with_connection(|conn| {
            self.configure_pragmas(conn)?;
            schema::apply_migrations(conn)?;
            info!("SQLite database initialized");
            Ok(())
        })
    }

    fn configure_pragmas(&self, conn: &Connection) -> SqliteResult<()> {
        debug!("Configuring SQLite pragmas");

        if self.config.wal_mode {
            conn.execute_batch("PRAGMA journal_mode = WAL;")?;
            conn.execute_batch("PRAGMA synchronous = NORMAL;")?;
        }

        if self.config.foreign_keys {
            conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        }

        conn.execute_batch(&format!(
            "PRAGMA busy_timeout = {};",
            self.config.busy_timeout_ms
        ))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_pool() {
        let pool = SqlitePool::memory().expect("Failed to create memory pool");

        pool.with_connection(|conn| {
            let result: i64 = conn.query_row("SELECT 1 + 1", [], |row| row.get(0))?;
            assert_eq!(result, 2);
            Ok(())
        })
        .expect("Query failed");
    }

    #[test]
    fn test_file_pool() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("test.db");

        let config = SqliteConfig::new(&db_path);
        let pool = SqlitePool::new(config).expect("Failed to create pool");

        pool.with_connection(|conn| {
            let mode: String = conn.query_row("PRAGMA journal_mode;", [], |row| row.get(0))?;
            assert_eq!(mode.to_lowercase(), "wal");
            Ok(())
        })
        .expect("Query failed");
    }

    #[test]
    fn test_schema_applied() {
        let pool = SqlitePool::memory().expect("Failed to create pool");

        pool.with_connection(|conn| {
            let tables: Vec<String> = {
                let mut stmt = conn
                    .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")?;
                let rows = stmt.query_map([], |row| row.get(0))?;
                rows.filter_map(Result::ok).collect()
            };

            assert!(tables.contains(&"canvases".to_string()));
            assert!(tables.contains(&"agents".to_string()));

            Ok(())
        })
        .expect("Failed to verify schema");
    }
}
