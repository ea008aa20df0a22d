//! Agent runner: composes the prompt and performs one provider call.

use crate::factory::create_provider;
use tracing::info;
use vpc_config::{CredentialStore, LlmConfig};
use vpc_core::{Agent, Canvas, ChatRequest, LlmError, LlmResult};

/// Marker line that introduces the rendered canvas context
const CONTEXT_HEADER: &str = "CONTEXT (JSON):";

/// Run one agent invocation.
///
/// Stateless: the prompt is composed from the agent record, the task text,
/// and the optional canvas, and a single request goes to the agent's
/// backend. Nothing about the run is persisted.
pub async fn run_agent(
    agent: &Agent,
    task: &str,
    canvas: Option<&Canvas>,
    llm: &LlmConfig,
    credentials: &dyn CredentialStore,
) -> LlmResult<String> {
    let provider = create_provider(agent.backend, llm, credentials)?;

    let request = ChatRequest::new(agent.model_or_default(), agent.system_prompt())
        .with_user_content(compose_user_content(task, canvas)?)
        .with_temperature(llm.temperature())
        .with_max_tokens(llm.max_tokens());

    info!(
        agent = %agent.name,
        backend = %agent.backend,
        model = %request.model,
        with_canvas = canvas.is_some(),
        "Running agent"
    );

    provider.send(request).await
}

/// Task text, with the canvas rendered as a JSON context block when present
fn compose_user_content(task: &str, canvas: Option<&Canvas>) -> LlmResult<String> {
    let Some(canvas) = canvas else {
        return Ok(task.to_string());
    };

    let context = serde_json::to_string_pretty(&serde_json::json!({ "canvas": canvas }))
        .map_err(|e| LlmError::Config(format!("failed to render canvas context: {}", e)))?;

    Ok(format!("{}\n\n{}\n{}", task, CONTEXT_HEADER, context))
}
