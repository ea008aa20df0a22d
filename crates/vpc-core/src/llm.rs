//! LLM provider abstraction.
//!
//! `vpc-core` defines the interface; provider implementations live in
//! `vpc-llm`. One request per invocation, no retries; failures surface to
//! the caller as a single error scoped to that run.

use crate::backend::Backend;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Result type for LLM operations
pub type LlmResult<T> = Result<T, LlmError>;

/// LLM operation errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum LlmError {
    /// A key-requiring backend has no key configured. Raised before any
    /// request is sent.
    #[error("missing API key for backend '{backend}' (set {env_var} or `vpc auth set {backend}`)")]
    MissingCredential {
        backend: Backend,
        env_var: &'static str,
    },

    /// Connection or transport failure
    #[error("HTTP error: {0}")]
    Http(String),

    /// Non-success status from the provider
    #[error("{backend} API error ({status}): {detail}")]
    Api {
        backend: Backend,
        status: u16,
        detail: String,
    },

    /// Response body did not match the provider's documented shape
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Invalid or unsupported configuration
    #[error("configuration error: {0}")]
    Config(String),
}

/// One chat exchange: system prompt plus a single user turn, with the
/// canvas context (when present) already rendered to text by the runner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub system_prompt: String,
    /// Task input with any context block appended
    pub user_content: String,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, system_prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system_prompt: system_prompt.into(),
            user_content: String::new(),
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn with_user_content(mut self, content: impl Into<String>) -> Self {
        self.user_content = content.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// A backend that can answer one chat request with text
#[async_trait]
pub trait ChatProvider: Send + Sync + std::fmt::Debug {
    /// Perform one request and return the extracted completion text
    async fn send(&self, request: ChatRequest) -> LlmResult<String>;

    /// Backend this provider talks to
    fn backend(&self) -> Backend;
}
