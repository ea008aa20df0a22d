//! `vpc auth`: API key management.

use crate::cli::AuthCommands;
use anyhow::{bail, Result};
use std::io::Write;
use vpc_config::{CredentialStore, SecretsFile};
use vpc_core::Backend;

pub fn execute(store: &mut SecretsFile, cmd: AuthCommands) -> Result<()> {
    match cmd {
        AuthCommands::Set { backend, key } => {
            if !backend.requires_key() {
                bail!("backend '{}' does not use an API key", backend);
            }

            let key = match key {
                Some(key) => key,
                None => prompt_for_key(backend)?,
            };
            let key = key.trim();
            if key.is_empty() {
                bail!("no API key provided");
            }

            store.set(backend, key)?;
            println!(
                "Stored API key for {} in {}",
                backend,
                store.path().display()
            );
        }

        AuthCommands::Remove { backend } => {
            if store.remove(backend)? {
                println!("Removed stored key for {}", backend);
            } else {
                println!("No stored key for {}", backend);
            }
        }

        AuthCommands::List => {
            let stored = store.list()?;
            for backend in Backend::ALL {
                let Some(env_var) = backend.env_var() else {
                    continue;
                };

                let from_env = std::env::var(env_var)
                    .map(|v| !v.is_empty())
                    .unwrap_or(false);
                let from_file = stored.contains_key(backend.id());

                let status = match (from_env, from_file) {
                    (true, _) => format!("env ({})", env_var),
                    (false, true) => "file".to_string(),
                    (false, false) => "not set".to_string(),
                };
                println!("{:<12} {}", backend.id(), status);
            }
        }
    }

    Ok(())
}

fn prompt_for_key(backend: Backend) -> Result<String> {
    eprint!("API key for {}: ", backend);
    std::io::stderr().flush()?;

    let mut key = String::new();
    std::io::stdin().read_line(&mut key)?;
    Ok(key)
}
