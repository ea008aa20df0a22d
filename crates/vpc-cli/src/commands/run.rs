//! `vpc run`: one stateless agent invocation.

use anyhow::{bail, Result};
use vpc_config::{CredentialStore, LlmConfig};
use vpc_core::{AgentStore, CanvasStore};
use vpc_llm::run_agent;

pub async fn execute(
    agents: &dyn AgentStore,
    canvases: &dyn CanvasStore,
    llm: &LlmConfig,
    credentials: &dyn CredentialStore,
    agent_name: &str,
    task: &str,
    canvas_name: Option<&str>,
) -> Result<()> {
    let Some(agent) = agents.load(agent_name).await? else {
        bail!(
            "agent '{}' not found. Create it with `vpc agent save {} --backend <backend>`",
            agent_name,
            agent_name
        );
    };

    let canvas = match canvas_name {
        Some(name) => match canvases.load(name).await? {
            Some(canvas) => Some(canvas),
            None => bail!("canvas '{}' not found", name),
        },
        None => None,
    };

    let reply = run_agent(&agent, task, canvas.as_ref(), llm, credentials).await?;
    println!("{}", reply);

    Ok(())
}
