//! LLM provider implementations and the agent runner.
//!
//! Four wire providers (OpenAI-compatible, Anthropic, Ollama) plus the
//! offline echo fallback, built from an agent's backend by the factory.
//! [`run_agent`] is the single entry point the CLI calls.

mod anthropic;
mod echo;
mod factory;
mod ollama;
mod openai;
mod runner;

pub use anthropic::AnthropicProvider;
pub use echo::EchoProvider;
pub use factory::create_provider;
pub use ollama::OllamaProvider;
pub use openai::OpenAiCompatProvider;
pub use runner::run_agent;
