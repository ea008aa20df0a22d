//! Configuration and credential management for vpc.
//!
//! Config comes from a TOML file (`~/.config/vpc/config.toml` by default);
//! a missing file means defaults. API keys resolve through an explicit
//! [`CredentialStore`] object rather than ad-hoc environment reads, so the
//! runner can be tested with fake credentials.

mod credentials;
mod settings;

pub use credentials::{
    resolve_api_key, CredentialError, CredentialResult, CredentialSource, CredentialStore,
    SecretsFile,
};
pub use settings::{Config, ConfigError, LlmConfig};
