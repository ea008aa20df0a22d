//! Provider construction and credential checks.

use crate::anthropic::AnthropicProvider;
use crate::echo::EchoProvider;
use crate::ollama::OllamaProvider;
use crate::openai::OpenAiCompatProvider;
use tracing::debug;
use vpc_config::{resolve_api_key, CredentialStore, LlmConfig};
use vpc_core::{Backend, ChatProvider, LlmError, LlmResult};

/// Build the provider for a backend.
///
/// Key-requiring backends fail here with [`LlmError::MissingCredential`]
/// when no key resolves, so no request is ever sent without one.
pub fn create_provider(
    backend: Backend,
    llm: &LlmConfig,
    credentials: &dyn CredentialStore,
) -> LlmResult<Box<dyn ChatProvider>> {
    if backend == Backend::Echo {
        return Ok(Box::new(EchoProvider));
    }

    let endpoint = llm
        .endpoint_for(backend)
        .ok_or_else(|| LlmError::Config(format!("no endpoint for backend '{}'", backend)))?;
    let timeout_secs = llm.timeout_secs();

    let api_key = match backend.env_var() {
        Some(env_var) => match resolve_api_key(backend, credentials) {
            Some((key, source)) => {
                debug!(%backend, %source, "Resolved API key");
                key
            }
            None => return Err(LlmError::MissingCredential { backend, env_var }),
        },
        None => String::new(),
    };

    let provider: Box<dyn ChatProvider> = match backend {
        Backend::OpenAi | Backend::OpenRouter => Box::new(OpenAiCompatProvider::new(
            backend,
            api_key,
            endpoint,
            timeout_secs,
        )),
        Backend::Anthropic => Box::new(AnthropicProvider::new(api_key, endpoint, timeout_secs)),
        Backend::Ollama => Box::new(OllamaProvider::new(endpoint, timeout_secs)),
        Backend::Echo => unreachable!("handled above"),
    };

    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use vpc_config::CredentialResult;

    struct EmptyStore;

    impl CredentialStore for EmptyStore {
        fn get(&self, _backend: Backend) -> CredentialResult<Option<String>> {
            Ok(None)
        }
        fn set(&mut self, _backend: Backend, _api_key: &str) -> CredentialResult<()> {
            Ok(())
        }
        fn remove(&mut self, _backend: Backend) -> CredentialResult<bool> {
            Ok(false)
        }
        fn list(&self) -> CredentialResult<HashMap<String, String>> {
            Ok(HashMap::new())
        }
    }

    #[test]
    fn test_echo_needs_no_credentials() {
        let provider = create_provider(Backend::Echo, &LlmConfig::default(), &EmptyStore).unwrap();
        assert_eq!(provider.backend(), Backend::Echo);
    }

    #[test]
    fn test_ollama_needs_no_credentials() {
        let provider =
            create_provider(Backend::Ollama, &LlmConfig::default(), &EmptyStore).unwrap();
        assert_eq!(provider.backend(), Backend::Ollama);
    }

    #[test]
    #[serial_test::serial]
    fn test_missing_key_fails_before_any_request() {
        std::env::remove_var("ANTHROPIC_API_KEY");

        let err =
            create_provider(Backend::Anthropic, &LlmConfig::default(), &EmptyStore).unwrap_err();
        assert!(matches!(
            err,
            LlmError::MissingCredential {
                backend: Backend::Anthropic,
                env_var: "ANTHROPIC_API_KEY",
            }
        ));
    }
}
