//! Core types for the vpc workspace.
//!
//! Defines the domain records (canvases and agents), the closed backend
//! enum, export formatting, and the LLM provider trait that `vpc-llm`
//! implements. Storage traits live here so `vpc-sqlite` can implement
//! them without depending on the rest of the stack.

pub mod agent;
pub mod backend;
pub mod canvas;
pub mod export;
pub mod llm;
pub mod store;

pub use agent::Agent;
pub use backend::Backend;
pub use canvas::{Canvas, CanvasSummary};
pub use llm::{ChatProvider, ChatRequest, LlmError, LlmResult};
pub use store::{AgentStore, CanvasStore, StorageError, StorageResult};
