//! CanvasStore implementation for SQLite

use crate::connection::SqlitePool;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;
use vpc_core::{Canvas, CanvasStore, CanvasSummary, StorageError, StorageResult};

/// SQLite implementation of [`CanvasStore`]
#[derive(Clone)]
pub struct SqliteCanvasStore {
    pool: SqlitePool,
}

impl SqliteCanvasStore {
    /// Create a new store on the given connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CanvasStore for SqliteCanvasStore {
    async fn save(&self, canvas: &Canvas) -> StorageResult<()> {
        let pool = self.pool.clone();
        let canvas = canvas.clone();

        tokio::task::spawn_blocking(move || {
            pool.with_connection(|conn| {
                let now = Utc::now().to_rfc3339();

                // Upsert keyed by name: fields are replaced, created_at is
                // preserved, updated_at is bumped.
                conn.execute(
                    r#"
                    INSERT INTO canvases (
                        name, customer_jobs, pains, gains,
                        products_services, gain_creators, pain_relievers,
                        created_at, updated_at
                    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                    ON CONFLICT(name) DO UPDATE SET
                        customer_jobs = excluded.customer_jobs,
                        pains = excluded.pains,
                        gains = excluded.gains,
                        products_services = excluded.products_services,
                        gain_creators = excluded.gain_creators,
                        pain_relievers = excluded.pain_relievers,
                        updated_at = excluded.updated_at
                    "#,
                    params![
                        canvas.name,
                        canvas.customer_jobs,
                        canvas.pains,
                        canvas.gains,
                        canvas.products_services,
                        canvas.gain_creators,
                        canvas.pain_relievers,
                        canvas.created_at.to_rfc3339(),
                        now,
                    ],
                )?;

                debug!(name = %canvas.name, "Saved canvas");
                Ok(())
            })
        })
        .await
        .map_err(|e| StorageError::Backend(e.to_string()))?
        .map_err(Into::into)
    }

    async fn load(&self, name: &str) -> StorageResult<Option<Canvas>> {
        let pool = self.pool.clone();
        let name = name.to_string();

        tokio::task::spawn_blocking(move || {
            pool.with_connection(|conn| {
                let mut stmt = conn.prepare(
                    r#"
                    SELECT name, customer_jobs, pains, gains,
                           products_services, gain_creators, pain_relievers,
                           created_at, updated_at
                    FROM canvases
                    WHERE name = ?1
                    "#,
                )?;

                let canvas = stmt.query_row([&name], row_to_canvas).optional()?;

                Ok(canvas)
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
                    conn.execute("DELETE FROM canvases WHERE name = ?1", [&name])?;

                if rows_affected == 0 {
                    return Err(crate::error::SqliteError::NotFound(format!(
                        "canvas '{}' does not exist",
                        name
                    )));
                }

                debug!(name = %name, "Deleted canvas");
                Ok(())
            })
        })
        .await
        .map_err(|e| StorageError::Backend(e.to_string()))?
        .map_err(Into::into)
    }

    async fn list(&self) -> StorageResult<Vec<CanvasSummary>> {
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || {
            pool.with_connection(|conn| {
                let mut stmt = conn.prepare(
                    "SELECT name, updated_at FROM canvases
                     ORDER BY updated_at DESC, name ASC",
                )?;

                let rows = stmt.query_map([], |row| {
                    let name: String = row.get(0)?;
                    let updated_at = parse_timestamp(row, 1)?;
                    Ok(CanvasSummary { name, updated_at })
                })?;

                let mut summaries = Vec::new();
                for row in rows {
                    summaries.push(row?);
                }
                Ok(summaries)
            })
        })
        .await
        .map_err(|e| StorageError::Backend(e.to_string()))?
        .map_err(Into::into)
    }
}

fn row_to_canvas(row: &Row<'_>) -> rusqlite::Result<Canvas> {
    Ok(Canvas {
        name: row.get(0)?,
        customer_jobs: row.get(1)?,
        pains: row.get(2)?,
        gains: row.get(3)?,
        products_services: row.get(4)?,
        gain_creators: row.get(5)?,
        pain_relievers: row.get(6)?,
        created_at: parse_timestamp(row, 7)?,
        updated_at: parse_timestamp(row, 8)?,
    })
}

/// Parse an RFC 3339 TEXT column into a UTC timestamp
pub(crate) fn parse_timestamp(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                idx,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })
}
