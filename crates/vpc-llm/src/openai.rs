//! OpenAI-compatible chat provider.
//!
//! Serves both the OpenAI and OpenRouter backends; OpenRouter exposes the
//! same `/chat/completions` wire shape under a different base URL and key.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use vpc_core::{Backend, ChatProvider, ChatRequest, LlmError, LlmResult};

/// Chat provider for the OpenAI `/chat/completions` wire format
#[derive(Debug)]
pub struct OpenAiCompatProvider {
    client: reqwest::Client,
    backend: Backend,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl OpenAiCompatProvider {
    pub fn new(backend: Backend, api_key: String, base_url: String, timeout_secs: u64) -> Self {
        Self {
            client: reqwest::Client::new(),
            backend,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[async_trait]
impl ChatProvider for OpenAiCompatProvider {
    async fn send(&self, request: ChatRequest) -> LlmResult<String> {
        let mut api_request = serde_json::json!({
            "model": request.model,
            "messages": [
                { "role": "system", "content": request.system_prompt },
                { "role": "user", "content": request.user_content },
            ],
        });

        if let Some(temp) = request.temperature {
            api_request["temperature"] = serde_json::json!(temp);
        }
        if let Some(max_tokens) = request.max_tokens {
            api_request["max_tokens"] = serde_json::json!(max_tokens);
        }

        let url = format!("{}/chat/completions", self.base_url);
        debug!(backend = %self.backend, model = %request.model, %url, "Sending chat request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
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
                backend: self.backend,
                status,
                detail,
            });
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let choice = completion
            .choices
            .first()
            .ok_or_else(|| LlmError::InvalidResponse("No choices in response".to_string()))?;

        Ok(choice.message.content.clone().unwrap_or_default())
    }

    fn backend(&self) -> Backend {
        self.backend
    }
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    content: Option<String>,
}
