use crate::backend::Backend;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reusable named agent configuration pairing a prompt with a target
/// backend and model.
///
/// Each run is a stateless request; the record keeps no execution history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    /// Short role label, e.g. "Market Researcher"
    pub function: String,
    /// Instruction text prepended to every run
    pub prompt: String,
    pub backend: Backend,
    /// Model identifier; empty means the backend default
    pub model: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Agent {
    pub fn new(name: impl Into<String>, backend: Backend) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            function: String::new(),
            prompt: String::new(),
            backend,
            model: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Model to run with: the configured one, or the backend default
    pub fn model_or_default(&self) -> &str {
        if self.model.trim().is_empty() {
            self.backend.default_model()
        } else {
            &self.model
        }
    }

    /// Compose the system prompt from the role label and instructions.
    ///
    /// Falls back to a generic assistant prompt when both are blank.
    pub fn system_prompt(&self) -> String {
        let function = self.function.trim();
        let prompt = self.prompt.trim();
        if function.is_empty() && prompt.is_empty() {
            return "You are a helpful strategy assistant.".to_string();
        }
        format!("Role: {}\n\nInstructions: {}", function, prompt)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_falls_back_to_backend_default() {
        let agent = Agent::new("researcher", Backend::OpenAi);
        assert_eq!(agent.model_or_default(), "gpt-4o-mini");

        let mut agent = Agent::new("researcher", Backend::Ollama);
        agent.model = "mistral".to_string();
        assert_eq!(agent.model_or_default(), "mistral");
    }

    #[test]
    fn test_system_prompt_composition() {
        let mut agent = Agent::new("researcher", Backend::Echo);
        agent.function = "Market Researcher".to_string();
        agent.prompt = "Ask probing questions.".to_string();

        let prompt = agent.system_prompt();
        assert!(prompt.contains("Role: Market Researcher"));
        assert!(prompt.contains("Instructions: Ask probing questions."));
    }

    #[test]
    fn test_system_prompt_fallback_when_blank() {
        let agent = Agent::new("blank", Backend::Echo);
        assert_eq!(
            agent.system_prompt(),
            "You are a helpful strategy assistant."
        );
    }
}
