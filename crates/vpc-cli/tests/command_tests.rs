//! Command handler tests against an in-memory database.

use vpc_cli::cli::{AgentCommands, CanvasCommands, ExportFormat};
use vpc_cli::commands;
use vpc_core::{AgentStore, Backend, CanvasStore};
use vpc_sqlite::{SqliteAgentStore, SqliteCanvasStore, SqlitePool};

fn canvas_store() -> SqliteCanvasStore {
    SqliteCanvasStore::new(SqlitePool::memory().expect("memory pool"))
}

fn agent_store() -> SqliteAgentStore {
    SqliteAgentStore::new(SqlitePool::memory().expect("memory pool"))
}

fn save_cmd(name: &str) -> CanvasCommands {
    CanvasCommands::Save {
        name: name.to_string(),
        customer_jobs: Some("ship software".to_string()),
        pains: Some("slow deploys".to_string()),
        gains: None,
        products_services: None,
        gain_creators: None,
        pain_relievers: None,
    }
}

#[tokio::test]
async fn canvas_save_creates_a_record() {
    let store = canvas_store();

    commands::canvas::execute(&store, save_cmd("Acme")).await.unwrap();

    let canvas = store.load("Acme").await.unwrap().expect("canvas exists");
    assert_eq!(canvas.customer_jobs, "ship software");
    assert_eq!(canvas.pains, "slow deploys");
    assert_eq!(canvas.gains, "");
}

#[tokio::test]
async fn canvas_save_preserves_unspecified_fields() {
    let store = canvas_store();
    commands::canvas::execute(&store, save_cmd("Acme")).await.unwrap();

    // Second save touches only one field
    commands::canvas::execute(
        &store,
        CanvasCommands::Save {
            name: "Acme".to_string(),
            customer_jobs: None,
            pains: None,
            gains: Some("faster releases".to_string()),
            products_services: None,
            gain_creators: None,
            pain_relievers: None,
        },
    )
    .await
    .unwrap();

    let canvas = store.load("Acme").await.unwrap().unwrap();
    assert_eq!(canvas.customer_jobs, "ship software");
    assert_eq!(canvas.gains, "faster releases");
}

#[tokio::test]
async fn canvas_delete_missing_fails() {
    let store = canvas_store();
    let result = commands::canvas::execute(
        &store,
        CanvasCommands::Delete {
            name: "ghost".to_string(),
        },
    )
    .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn canvas_export_writes_markdown_file() {
    let store = canvas_store();
    commands::canvas::execute(&store, save_cmd("Acme")).await.unwrap();

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("acme.md");

    commands::canvas::execute(
        &store,
        CanvasCommands::Export {
            name: "Acme".to_string(),
            format: ExportFormat::Markdown,
            output: Some(path.clone()),
        },
    )
    .await
    .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("# Customer Segment"));
    assert!(content.contains("## Pains\n\nslow deploys"));
}

#[tokio::test]
async fn agent_save_requires_backend_on_create() {
    let store = agent_store();

    let result = commands::agent::execute(
        &store,
        AgentCommands::Save {
            name: "researcher".to_string(),
            backend: None,
            function: None,
            prompt: None,
            model: None,
        },
    )
    .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn agent_save_then_update_keeps_backend() {
    let store = agent_store();

    commands::agent::execute(
        &store,
        AgentCommands::Save {
            name: "researcher".to_string(),
            backend: Some(Backend::Ollama),
            function: Some("Market Researcher".to_string()),
            prompt: None,
            model: None,
        },
    )
    .await
    .unwrap();

    // Update only the prompt; backend must survive
    commands::agent::execute(
        &store,
        AgentCommands::Save {
            name: "researcher".to_string(),
            backend: None,
            function: None,
            prompt: Some("Ask probing questions.".to_string()),
            model: None,
        },
    )
    .await
    .unwrap();

    let agent = store.load("researcher").await.unwrap().unwrap();
    assert_eq!(agent.backend, Backend::Ollama);
    assert_eq!(agent.function, "Market Researcher");
    assert_eq!(agent.prompt, "Ask probing questions.");
}
