//! Backend catalogue.
//!
//! Single source of truth for the supported LLM backends, their secret key
//! names, base URLs, and default models. A closed enum rather than a string
//! switch so an unsupported backend is a parse error at the edge, not a
//! runtime branch in the dispatcher.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported LLM backend (or the debug echo fallback)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// OpenAI chat completions API
    OpenAi,
    /// Anthropic messages API
    Anthropic,
    /// OpenRouter (OpenAI-compatible hosted endpoint)
    OpenRouter,
    /// Local Ollama server, no authentication
    Ollama,
    /// No network call; returns the composed input verbatim
    Echo,
}

impl Backend {
    /// All backends, in display order
    pub const ALL: [Backend; 5] = [
        Backend::OpenAi,
        Backend::Anthropic,
        Backend::OpenRouter,
        Backend::Ollama,
        Backend::Echo,
    ];

    /// Stable identifier used in storage and on the command line
    pub fn id(&self) -> &'static str {
        match self {
            Backend::OpenAi => "openai",
            Backend::Anthropic => "anthropic",
            Backend::OpenRouter => "openrouter",
            Backend::Ollama => "ollama",
            Backend::Echo => "echo",
        }
    }

    /// Environment variable that supplies the API key, if the backend
    /// requires one
    pub fn env_var(&self) -> Option<&'static str> {
        match self {
            Backend::OpenAi => Some("OPENAI_API_KEY"),
            Backend::Anthropic => Some("ANTHROPIC_API_KEY"),
            Backend::OpenRouter => Some("OPENROUTER_API_KEY"),
            Backend::Ollama | Backend::Echo => None,
        }
    }

    /// Whether the backend needs an API key before any request is sent
    pub fn requires_key(&self) -> bool {
        self.env_var().is_some()
    }

    /// Default base URL for the backend's API
    pub fn default_base_url(&self) -> Option<&'static str> {
        match self {
            Backend::OpenAi => Some("https://api.openai.com/v1"),
            Backend::Anthropic => Some("https://api.anthropic.com"),
            Backend::OpenRouter => Some("https://openrouter.ai/api/v1"),
            Backend::Ollama => Some("http://localhost:11434"),
            Backend::Echo => None,
        }
    }

    /// Model used when the agent record leaves the model blank
    pub fn default_model(&self) -> &'static str {
        match self {
            Backend::OpenAi => "gpt-4o-mini",
            Backend::Anthropic => "claude-3-5-sonnet-latest",
            Backend::OpenRouter => "openai/gpt-4o-mini",
            Backend::Ollama => "llama3.1",
            Backend::Echo => "echo",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error for an unrecognized backend identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown backend '{0}' (expected one of: openai, anthropic, openrouter, ollama, echo)")]
pub struct UnknownBackend(pub String);

impl FromStr for Backend {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(Backend::OpenAi),
            "anthropic" => Ok(Backend::Anthropic),
            "openrouter" => Ok(Backend::OpenRouter),
            "ollama" => Ok(Backend::Ollama),
            "echo" => Ok(Backend::Echo),
            other => Err(UnknownBackend(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        for backend in Backend::ALL {
            assert_eq!(backend.id().parse::<Backend>().unwrap(), backend);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("OpenAI".parse::<Backend>().unwrap(), Backend::OpenAi);
        assert_eq!(" echo ".parse::<Backend>().unwrap(), Backend::Echo);
    }

    #[test]
    fn test_unknown_backend_is_an_error() {
        let err = "gemini".parse::<Backend>().unwrap_err();
        assert_eq!(err, UnknownBackend("gemini".to_string()));
    }

    #[test]
    fn test_key_requirements() {
        assert!(Backend::OpenAi.requires_key());
        assert!(Backend::Anthropic.requires_key());
        assert!(Backend::OpenRouter.requires_key());
        assert!(!Backend::Ollama.requires_key());
        assert!(!Backend::Echo.requires_key());
    }

    #[test]
    fn test_env_var_names() {
        assert_eq!(Backend::OpenAi.env_var(), Some("OPENAI_API_KEY"));
        assert_eq!(Backend::Anthropic.env_var(), Some("ANTHROPIC_API_KEY"));
        assert_eq!(Backend::OpenRouter.env_var(), Some("OPENROUTER_API_KEY"));
        assert_eq!(Backend::Ollama.env_var(), None);
    }

    #[test]
    fn test_serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&Backend::OpenRouter).unwrap();
        assert_eq!(json, "\"openrouter\"");
        let back: Backend = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Backend::OpenRouter);
    }
}
