//! Echo provider: no network, returns the composed input.
//!
//! Lets the prompt-composition path be exercised end to end without any
//! configured backend.

use async_trait::async_trait;
use vpc_core::{Backend, ChatProvider, ChatRequest, LlmResult};

/// Provider that reflects the composed user content back to the caller
#[derive(Debug, Default)]
pub struct EchoProvider;

#[async_trait]
impl ChatProvider for EchoProvider {
    async fn send(&self, request: ChatRequest) -> LlmResult<String> {
        Ok(format!("[echo]\n{}", request.user_content))
    }

    fn backend(&self) -> Backend {
        Backend::Echo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echo_reflects_user_content() {
        let request = ChatRequest::new("echo", "You are helpful.")
            .with_user_content("Summarize the pains.");

        let reply = EchoProvider.send(request).await.unwrap();
        assert_eq!(reply, "[echo]\nSummarize the pains.");
    }
}
