//! Storage traits.
//!
//! Core defines the contract; `vpc-sqlite` provides the implementation.
//! Save is an upsert keyed by name: an existing record is overwritten in
//! place with `created_at` preserved and `updated_at` bumped.

use crate::agent::Agent;
use crate::canvas::{Canvas, CanvasSummary};
use async_trait::async_trait;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage errors surfaced to callers
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No record under the given name
    #[error("not found: {0}")]
    NotFound(String),

    /// Backend failure (connection, query, schema)
    #[error("storage backend error: {0}")]
    Backend(String),

    /// Record could not be decoded from its stored form
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// CRUD over named canvases
#[async_trait]
pub trait CanvasStore: Send + Sync {
    /// Insert or overwrite the canvas under its name
    async fn save(&self, canvas: &Canvas) -> StorageResult<()>;

    /// Load a canvas by name, `None` when absent
    async fn load(&self, name: &str) -> StorageResult<Option<Canvas>>;

    /// Delete a canvas by name; `NotFound` when nothing was deleted
    async fn delete(&self, name: &str) -> StorageResult<()>;

    /// All canvases, most recently updated first (ties broken by name)
    async fn list(&self) -> StorageResult<Vec<CanvasSummary>>;
}

/// CRUD over named agent configurations
#[async_trait]
pub trait AgentStore: Send + Sync {
    async fn save(&self, agent: &Agent) -> StorageResult<()>;
    async fn load(&self, name: &str) -> StorageResult<Option<Agent>>;
    async fn delete(&self, name: &str) -> StorageResult<()>;
    async fn list(&self) -> StorageResult<Vec<Agent>>;
}
