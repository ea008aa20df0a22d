//! Credential storage and resolution for backend API keys.
//!
//! Secrets live in a TOML file (`~/.config/vpc/secrets.toml`) with `0o600`
//! permissions, managed by `vpc auth`:
//!
//! ```toml
//! [backends.openai]
//! api_key = "sk-..."
//!
//! [backends.anthropic]
//! api_key = "sk-ant-..."
//! ```
//!
//! # Resolution Priority
//!
//! [`resolve_api_key`] checks sources in this order:
//! 1. Environment variable (e.g. `OPENAI_API_KEY`)
//! 2. The secrets file

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use vpc_core::Backend;

/// A backend's stored secrets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackendSecrets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// Top-level structure of secrets.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SecretsFileContent {
    #[serde(default)]
    pub backends: HashMap<String, BackendSecrets>,
}

/// Errors from credential store operations
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    /// IO error reading/writing the store
    #[error("credential store IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML serialization error
    #[error("credential store serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for credential operations
pub type CredentialResult<T> = Result<T, CredentialError>;

/// Trait for credential storage backends, so tests can substitute an
/// in-memory fake
pub trait CredentialStore: Send + Sync {
    /// Get the API key stored for a backend
    fn get(&self, backend: Backend) -> CredentialResult<Option<String>>;

    /// Store an API key for a backend
    fn set(&mut self, backend: Backend, api_key: &str) -> CredentialResult<()>;

    /// Remove credentials for a backend. Returns true if one existed.
    fn remove(&mut self, backend: Backend) -> CredentialResult<bool>;

    /// List all stored backend → API key pairs
    fn list(&self) -> CredentialResult<HashMap<String, String>>;
}

/// TOML-based credential store
///
/// Reads/writes `secrets.toml` in the vpc config directory. File
/// permissions are set to `0o600` (owner read/write only).
pub struct SecretsFile {
    path: PathBuf,
}

impl SecretsFile {
    /// Create a SecretsFile at the default path
    pub fn new() -> Self {
        Self {
            path: Self::default_path(),
        }
    }

    /// Create a SecretsFile with a custom path (primarily for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default secrets file path: `$XDG_CONFIG_HOME/vpc/secrets.toml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".config")
            })
            .join("vpc")
            .join("secrets.toml")
    }

    /// Path to the secrets file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> CredentialResult<SecretsFileContent> {
        if !self.path.exists() {
            return Ok(SecretsFileContent::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(SecretsFileContent::default());
        }

        match toml::from_str(&content) {
            Ok(parsed) => Ok(parsed),
            Err(e) => {
                warn!(
                    "Failed to parse secrets file at {}: {}. Treating as empty.",
                    self.path.display(),
                    e
                );
                Ok(SecretsFileContent::default())
            }
        }
    }

    fn write(&self, content: &SecretsFileContent) -> CredentialResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_str = toml::to_string_pretty(content)?;
        std::fs::write(&self.path, toml_str)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&self.path, perms)?;
        }

        Ok(())
    }
}

impl Default for SecretsFile {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore for SecretsFile {
    fn get(&self, backend: Backend) -> CredentialResult<Option<String>> {
        let content = self.read()?;
        Ok(content
            .backends
            .get(backend.id())
            .and_then(|s| s.api_key.clone()))
    }

    fn set(&mut self, backend: Backend, api_key: &str) -> CredentialResult<()> {
        let mut content = self.read()?;
        content.backends.insert(
            backend.id().to_string(),
            BackendSecrets {
                api_key: Some(api_key.to_string()),
            },
        );
        self.write(&content)
    }

    fn remove(&mut self, backend: Backend) -> CredentialResult<bool> {
        let mut content = self.read()?;
        let existed = content.backends.remove(backend.id()).is_some();
        if existed {
            self.write(&content)?;
        }
        Ok(existed)
    }

    fn list(&self) -> CredentialResult<HashMap<String, String>> {
        let content = self.read()?;
        Ok(content
            .backends
            .into_iter()
            .filter_map(|(name, secrets)| secrets.api_key.map(|key| (name, key)))
            .collect())
    }
}

/// Source of a resolved credential
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// From an environment variable
    EnvVar,
    /// From the secrets file
    Store,
}

impl std::fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialSource::EnvVar => write!(f, "env"),
            CredentialSource::Store => write!(f, "file"),
        }
    }
}

/// Resolve an API key for a backend using the priority chain:
///
/// 1. Environment variable (e.g. `OPENAI_API_KEY`)
/// 2. The credential store
///
/// Returns `(key, source)`, or `None` if no key is found. Backends with no
/// env-var mapping (ollama, echo) resolve to `None` without consulting the
/// environment.
pub fn resolve_api_key(
    backend: Backend,
    store: &dyn CredentialStore,
) -> Option<(String, CredentialSource)> {
    if let Some(env_var) = backend.env_var() {
        if let Ok(value) = std::env::var(env_var) {
            if !value.is_empty() {
                debug!("Resolved API key for {} from env var {}", backend, env_var);
                return Some((value, CredentialSource::EnvVar));
            }
        }
    }

    match store.get(backend) {
        Ok(Some(key)) => {
            debug!("Resolved API key for {} from credential store", backend);
            Some((key, CredentialSource::Store))
        }
        Ok(None) => None,
        Err(e) => {
            warn!("Failed to read credential store for {}: {}", backend, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn temp_store() -> (SecretsFile, TempDir) {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("secrets.toml");
        let store = SecretsFile::with_path(path);
        (store, dir)
    }

    #[test]
    fn secrets_file_set_get_remove_roundtrip() {
        let (mut store, _dir) = temp_store();

        store.set(Backend::OpenAi, "sk-test-key").expect("set");

        let key = store.get(Backend::OpenAi).expect("get");
        assert_eq!(key, Some("sk-test-key".to_string()));

        let removed = store.remove(Backend::OpenAi).expect("remove");
        assert!(removed);

        let key = store.get(Backend::OpenAi).expect("get after remove");
        assert_eq!(key, None);
    }

    #[test]
    fn secrets_file_remove_nonexistent_returns_false() {
        let (mut store, _dir) = temp_store();
        let removed = store.remove(Backend::Anthropic).expect("remove");
        assert!(!removed);
    }

    #[test]
    #[cfg(unix)]
    fn secrets_file_creates_with_restricted_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let (mut store, _dir) = temp_store();
        store.set(Backend::OpenAi, "sk-test").expect("set");

        let metadata = std::fs::metadata(store.path()).expect("metadata");
        let mode = metadata.permissions().mode();
        assert_eq!(mode & 0o777, 0o600, "File should be owner-only rw");
    }

    #[test]
    fn secrets_file_handles_missing_file() {
        let (store, _dir) = temp_store();

        let key = store.get(Backend::OpenAi).expect("get");
        assert_eq!(key, None);

        let list = store.list().expect("list");
        assert!(list.is_empty());
    }

    #[test]
    fn secrets_file_handles_corrupted_toml() {
        let (store, _dir) = temp_store();

        if let Some(parent) = store.path().parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(store.path(), "not valid toml {{{").unwrap();

        // Should return empty, not error
        let key = store.get(Backend::OpenAi).expect("get");
        assert_eq!(key, None);
    }

    #[test]
    fn secrets_file_multiple_backends() {
        let (mut store, _dir) = temp_store();

        store.set(Backend::OpenAi, "sk-openai").expect("set openai");
        store
            .set(Backend::OpenRouter, "sk-or")
            .expect("set openrouter");

        let list = store.list().expect("list");
        assert_eq!(list.len(), 2);
        assert_eq!(list["openai"], "sk-openai");
        assert_eq!(list["openrouter"], "sk-or");
    }

    #[test]
    fn secrets_file_overwrite_existing() {
        let (mut store, _dir) = temp_store();

        store.set(Backend::OpenAi, "old-key").expect("set");
        store.set(Backend::OpenAi, "new-key").expect("overwrite");

        let key = store.get(Backend::OpenAi).expect("get");
        assert_eq!(key, Some("new-key".to_string()));
    }

    #[test]
    #[serial]
    fn resolve_api_key_env_var_wins() {
        let (mut store, _dir) = temp_store();
        store.set(Backend::OpenAi, "store-key").expect("set");

        std::env::set_var("OPENAI_API_KEY", "env-key");

        let result = resolve_api_key(Backend::OpenAi, &store);
        assert_eq!(
            result,
            Some(("env-key".to_string(), CredentialSource::EnvVar))
        );

        std::env::remove_var("OPENAI_API_KEY");
    }

    #[test]
    #[serial]
    fn resolve_api_key_falls_back_to_store() {
        let (mut store, _dir) = temp_store();
        store.set(Backend::OpenAi, "store-key").expect("set");

        std::env::remove_var("OPENAI_API_KEY");

        let result = resolve_api_key(Backend::OpenAi, &store);
        assert_eq!(
            result,
            Some(("store-key".to_string(), CredentialSource::Store))
        );
    }

    #[test]
    #[serial]
    fn resolve_api_key_returns_none_when_nothing_configured() {
        let (store, _dir) = temp_store();
        std::env::remove_var("OPENROUTER_API_KEY");

        let result = resolve_api_key(Backend::OpenRouter, &store);
        assert_eq!(result, None);
    }

    #[test]
    fn resolve_api_key_keyless_backend_uses_store_only() {
        let (mut store, _dir) = temp_store();
        store.set(Backend::Ollama, "unused").expect("set");

        // Ollama has no env-var mapping; the stored value still resolves
        let result = resolve_api_key(Backend::Ollama, &store);
        assert_eq!(
            result,
            Some(("unused".to_string(), CredentialSource::Store))
        );
    }

    #[test]
    fn credential_source_display() {
        assert_eq!(CredentialSource::EnvVar.to_string(), "env");
        assert_eq!(CredentialSource::Store.to_string(), "file");
    }
}
