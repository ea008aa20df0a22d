//! Schema management and migrations

use crate::error::{SqliteError, SqliteResult};
use rusqlite::Connection;
use tracing::{debug, info};

/// Schema version - increment when making schema changes
const SCHEMA_VERSION: i32 = 1;

/// Apply all pending migrations
pub fn apply_migrations(conn: &Connection) -> SqliteResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );",
    )?;

    let current_version = get_current_version(conn)?;
    debug!(current_version, target_version = SCHEMA_VERSION, "Checking migrations");

    if current_version < SCHEMA_VERSION {
        info!(
            from = current_version,
            to = SCHEMA_VERSION,
            "Applying schema migrations"
        );
        apply_migration_v1(conn)?;
    }

    Ok(())
}

fn get_current_version(conn: &Connection) -> SqliteResult<i32> {
    let version: Option<i32> = conn
        .query_row(
            "SELECT MAX(version) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .unwrap_or(None);

    Ok(version.unwrap_or(0))
}

fn record_migration(conn: &Connection, version: i32) -> SqliteResult<()> {
    conn.execute(
        "INSERT INTO schema_migrations (version) VALUES (?)",
        [version],
    )?;
    Ok(())
}

/// Migration v1: canvases and agents tables, both keyed by unique name
fn apply_migration_v1(conn: &Connection) -> SqliteResult<()> {
    debug!("Applying migration v1: canvases + agents");

    conn.execute_batch(SCHEMA_V1)
        .map_err(|e| SqliteError::Schema(format!("Failed to apply v1 schema: {}", e)))?;

    record_migration(conn, 1)?;
    info!("Migration v1 applied");
    Ok(())
}

/// Initial schema SQL
const SCHEMA_V1: &str = r#"
-- ============================================================================
-- TABLE: canvases
-- ============================================================================
-- One Value Proposition Canvas per row, keyed by unique name

CREATE TABLE IF NOT EXISTS canvases (
    name TEXT PRIMARY KEY NOT NULL,
    customer_jobs TEXT NOT NULL DEFAULT '',
    pains TEXT NOT NULL DEFAULT '',
    gains TEXT NOT NULL DEFAULT '',
    products_services TEXT NOT NULL DEFAULT '',
    gain_creators TEXT NOT NULL DEFAULT '',
    pain_relievers TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_canvases_updated ON canvases(updated_at);

-- ============================================================================
-- TABLE: agents
-- ============================================================================
-- Named agent configurations: role label, prompt, backend, model

CREATE TABLE IF NOT EXISTS agents (
    name TEXT PRIMARY KEY NOT NULL,
    function TEXT NOT NULL DEFAULT '',
    prompt TEXT NOT NULL DEFAULT '',
    backend TEXT NOT NULL CHECK (backend IN ('openai', 'anthropic', 'openrouter', 'ollama', 'echo')),
    model TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_applies_cleanly() {
        let conn = Connection::open_in_memory().unwrap();
        apply_migrations(&conn).unwrap();

        let version = get_current_version(&conn).unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn test_schema_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        // Apply twice - should not error
        apply_migrations(&conn).unwrap();
        apply_migrations(&conn).unwrap();

        let version = get_current_version(&conn).unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn test_backend_check_constraint() {
        let conn = Connection::open_in_memory().unwrap();
        apply_migrations(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO agents (name, backend, created_at, updated_at)
             VALUES ('bad', 'gemini', datetime('now'), datetime('now'))",
            [],
        );
        assert!(result.is_err(), "unknown backend id must be rejected");
    }
}
