//! Anthropic messages API provider.
//!
//! Differs from the OpenAI shape in three ways: the key goes in `x-api-key`
//! with an `anthropic-version` header, the system prompt is a top-level
//! field rather than a message, and `max_tokens` is mandatory.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use vpc_core::{Backend, ChatProvider, ChatRequest, LlmError, LlmResult};

const ANTHROPIC_VERSION: &str = "2023-06-01";
const FALLBACK_MAX_TOKENS: u32 = 1024;

/// Chat provider for the Anthropic `/v1/messages` endpoint
#[derive(Debug)]
pub struct AnthropicProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl AnthropicProvider {
    pub fn new(api_key: String, base_url: String, timeout_secs: u64) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[async_trait]
impl ChatProvider for AnthropicProvider {
    async fn send(&self, request: ChatRequest) -> LlmResult<String> {
        let mut api_request = serde_json::json!({
            "model": request.model,
            "system": request.system_prompt,
            "max_tokens": request.max_tokens.unwrap_or(FALLBACK_MAX_TOKENS),
            "messages": [
                { "role": "user", "content": request.user_content },
            ],
        });

        if let Some(temp) = request.temperature {
            api_request["temperature"] = serde_json::json!(temp);
        }

        let url = format!("{}/v1/messages", self.base_url);
        debug!(model = %request.model, %url, "Sending chat request");

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
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
                backend: Backend::Anthropic,
                status,
                detail,
            });
        }

        let message: MessagesResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        // Content arrives as a list of blocks; concatenate the text ones.
        let text: String = message
            .content
            .iter()
            .filter(|block| block.r#type == "text")
            .filter_map(|block| block.text.as_deref())
            .collect();

        if message.content.is_empty() {
            return Err(LlmError::InvalidResponse(
                "No content blocks in response".to_string(),
            ));
        }

        Ok(text)
    }

    fn backend(&self) -> Backend {
        Backend::Anthropic
    }
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    r#type: String,
    text: Option<String>,
}
