//! SQLite storage backend for vpc.
//!
//! A single local database file holds the `canvases` and `agents` tables,
//! both keyed by unique name. rusqlite is synchronous; the store types wrap
//! every operation in `tokio::task::spawn_blocking` to implement the async
//! traits from `vpc-core`.

mod agent_store;
mod canvas_store;
mod config;
mod connection;
mod error;
mod schema;

pub use agent_store::SqliteAgentStore;
pub use canvas_store::SqliteCanvasStore;
pub use config::SqliteConfig;
pub use connection::SqlitePool;
pub use error::{SqliteError, SqliteResult};
