//! AgentStore implementation for SQLite

use crate::canvas_store::parse_timestamp;
use crate::connection::SqlitePool;
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};
use std::str::FromStr;
use tracing::debug;
use vpc_core::{Agent, AgentStore, Backend, StorageError, StorageResult};

/// SQLite implementation of [`AgentStore`]
#[derive(Clone)]
pub struct SqliteAgentStore {
    pool: SqlitePool,
}

impl SqliteAgentStore {
    /// Create a new store on the given connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AgentStore for SqliteAgentStore {
    async fn save(&self, agent: &Agent) -> StorageResult<()> {
        let pool = self.pool.clone();
        let agent = agent.clone();

        tokio::task::spawn_blocking(move || {
            pool.with_connection(|conn| {
                let now = Utc::now().to_rfc3339();

                conn.execute(
                    r#"
                    INSERT INTO agents (
                        name, function, prompt, backend, model,
                        created_at, updated_at
                    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                    ON CONFLICT(name) DO UPDATE SET
                        function = excluded.function,
                        prompt = excluded.prompt,
                        backend = excluded.backend,
                        model = excluded.model,
                        updated_at = excluded.updated_at
                    "#,
                    params![
                        agent.name,
                        agent.function,
                        agent.prompt,
                        agent.backend.id(),
                        agent.model,
                        agent.created_at.to_rfc3339(),
                        now,
                    ],
                )?;

                debug!(name = %agent.name, backend = %agent.backend, "Saved agent");
                Ok(())
            })
        })
        .await
        .map_err(|e| StorageError::Backend(e.to_string()))?
        .map_err(Into::into)
    }

    async fn load(&self, name: &str) -> StorageResult<Option<Agent>> {
        let pool = self.pool.clone();
        let name = name.to_string();

        tokio::task::spawn_blocking(move || {
            pool.with_connection(|conn| {
                let mut stmt = conn.prepare(
                    "SELECT name, function, prompt, backend, model,
                            created_at, updated_at
                     FROM agents
                     WHERE name = ?1",
                )?;

                let agent = stmt.query_row([&name], row_to_agent).optional()?;

                Ok(agent)
            })
        })
        .await
        .map_err(|e| StorageError::Backend(e.to_string()))?
        .map_err(Into::into)
    }

    async fn delete(&self, name: &str) -> StorageResult<()> {
        let pool = self.pool.clone();
        let name = name.to_string();

        tokio::task::spawn_blocking(move || {
            pool.with_connection(|conn| {
                let rows_affected =
                    conn.execute("DELETE FROM agents WHERE name = ?1", [&name])?;

                if rows_affected == 0 {
                    return Err(crate::error::SqliteError::NotFound(format!(
                        "agent '{}' does not exist",
                        name
                    )));
                }

                debug!(name = %name, "Deleted agent");
                Ok(())
            })
        })
        .await
        .map_err(|e| StorageError::Backend(e.to_string()))?
        .map_err(Into::into)
    }

    async fn list(&self) -> StorageResult<Vec<Agent>> {
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || {
            pool.with_connection(|conn| {
                let mut stmt = conn.prepare(
                    "SELECT name, function, prompt, backend, model,
                            created_at, updated_at
                     FROM agents
                     ORDER BY name ASC",
                )?;

                let rows = stmt.query_map([], row_to_agent)?;

                let mut agents = Vec::new();
                for row in rows {
                    agents.push(row?);
                }
                Ok(agents)
            })
        })
        .await
        .map_err(|e| StorageError::Backend(e.to_string()))?
        .map_err(Into::into)
    }
}

fn row_to_agent(row: &Row<'_>) -> rusqlite::Result<Agent> {
    let backend_id: String = row.get(3)?;
    // The CHECK constraint guards writes, but a hand-edited database can
    // still hold an unknown id.
    let backend = Backend::from_str(&backend_id).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Agent {
        name: row.get(0)?,
        function: row.get(1)?,
        prompt: row.get(2)?,
        backend,
        model: row.get(4)?,
        created_at: parse_timestamp(row, 5)?,
        updated_at: parse_timestamp(row, 6)?,
    })
}
