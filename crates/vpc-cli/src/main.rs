use anyhow::Result;
use clap::Parser;
use tracing::debug;

use vpc_cli::{
    cli::{Cli, Commands},
    commands,
};
use vpc_config::{Config, SecretsFile};
use vpc_sqlite::{SqliteAgentStore, SqliteCanvasStore, SqliteConfig, SqlitePool};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    let env_filter = format!(
        "vpc_cli={level},vpc_core={level},vpc_config={level},vpc_sqlite={level},vpc_llm={level}",
        level = log_level
    );
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(db_path) = cli.db_path {
        config.database_path = Some(db_path);
    }

    // Auth commands only touch the secrets file, so the database is opened
    // per command group rather than up front.
    match cli.command {
        Commands::Canvas(cmd) => {
            let pool = open_pool(&config)?;
            let store = SqliteCanvasStore::new(pool);
            commands::canvas::execute(&store, cmd).await?;
        }

        Commands::Agent(cmd) => {
            let pool = open_pool(&config)?;
            let store = SqliteAgentStore::new(pool);
            commands::agent::execute(&store, cmd).await?;
        }

        Commands::Run {
            agent,
            task,
            canvas,
        } => {
            let pool = open_pool(&config)?;
            let agents = SqliteAgentStore::new(pool.clone());
            let canvases = SqliteCanvasStore::new(pool);
            let credentials = SecretsFile::new();

            commands::run::execute(
                &agents,
                &canvases,
                &config.llm,
                &credentials,
                &agent,
                &task,
                canvas.as_deref(),
            )
            .await?;
        }

        Commands::Auth(cmd) => {
            let mut store = SecretsFile::new();
            commands::auth::execute(&mut store, cmd)?;
        }
    }

    Ok(())
}

fn open_pool(config: &Config) -> Result<SqlitePool> {
    let path = config.database_path();
    debug!(path = %path.display(), "Opening database");
    Ok(SqlitePool::new(SqliteConfig::new(path))?)
}
