//! Ollama chat provider.
//!
//! Talks to a local Ollama server over `/api/chat` with streaming disabled.
//! No authentication.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use vpc_core::{Backend, ChatProvider, ChatRequest, LlmError, LlmResult};

/// Chat provider for a local Ollama server
#[derive(Debug)]
pub struct OllamaProvider {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl OllamaProvider {
    pub fn new(base_url: String, timeout_secs: u64) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[async_trait]
impl ChatProvider for OllamaProvider {
    async fn send(&self, request: ChatRequest) -> LlmResult<String> {
        let mut options = serde_json::Map::new();
        if let Some(temp) = request.temperature {
            options.insert("temperature".to_string(), serde_json::json!(temp));
        }
        if let Some(max_tokens) = request.max_tokens {
            options.insert("num_predict".to_string(), serde_json::json!(max_tokens));
        }

        let api_request = serde_json::json!({
            "model": request.model,
            "stream": false,
            "messages": [
                { "role": "system", "content": request.system_prompt },
                { "role": "user", "content": request.user_content },
            ],
            "options": options,
        });

        let url = format!("{}/api/chat", self.base_url);
        debug!(model = %request.model, %url, "Sending chat request");

        let response = self
            .client
            .post(&url)
            .json(&api_request)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| LlmError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Api {
                backend: Backend::Ollama,
                status,
                detail,
            });
        }

        let chat: OllamaChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        Ok(chat.message.content)
    }

    fn backend(&self) -> Backend {
        Backend::Ollama
    }
}

#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    message: OllamaMessage,
}

#[derive(Debug, Deserialize)]
struct OllamaMessage {
    content: String,
}
