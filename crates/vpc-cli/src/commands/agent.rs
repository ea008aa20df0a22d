//! `vpc agent` subcommands.

use crate::cli::AgentCommands;
use anyhow::{bail, Result};
use vpc_core::{Agent, AgentStore};

pub async fn execute(store: &dyn AgentStore, cmd: AgentCommands) -> Result<()> {
    match cmd {
        AgentCommands::Save {
            name,
            backend,
            function,
            prompt,
            model,
        } => {
            let existing = store.load(&name).await?;
            let created = existing.is_none();

            let mut agent = match existing {
                Some(agent) => agent,
                None => {
                    let Some(backend) = backend else {
                        bail!("--backend is required when creating a new agent");
                    };
                    Agent::new(&name, backend)
                }
            };

            if let Some(backend) = backend {
                agent.backend = backend;
            }
            if let Some(function) = function {
                agent.function = function;
            }
            if let Some(prompt) = prompt {
                agent.prompt = prompt;
            }
            if let Some(model) = model {
                agent.model = model;
            }

            store.save(&agent).await?;
            if created {
                println!("Created agent '{}' ({})", name, agent.backend);
            } else {
                println!("Updated agent '{}' ({})", name, agent.backend);
            }
        }

        AgentCommands::Show { name } => {
            let Some(agent) = store.load(&name).await? else {
                bail!("agent '{}' not found", name);
            };
            println!("Agent: {}", agent.name);
            println!("Function: {}", or_dash(&agent.function));
            println!("Backend: {}", agent.backend);
            println!("Model: {}", agent.model_or_default());
            println!("Prompt: {}", or_dash(&agent.prompt));
        }

        AgentCommands::List => {
            let agents = store.list().await?;
            if agents.is_empty() {
                println!("No agents yet. Create one with `vpc agent save <name> --backend <backend>`.");
                return Ok(());
            }
            for agent in agents {
                println!(
                    "{}  [{} / {}]  {}",
                    agent.name,
                    agent.backend,
                    agent.model_or_default(),
                    or_dash(&agent.function)
                );
            }
        }

        AgentCommands::Delete { name } => {
            store.delete(&name).await?;
            println!("Deleted agent '{}'", name);
        }
    }

    Ok(())
}

fn or_dash(value: &str) -> &str {
    let value = value.trim();
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
