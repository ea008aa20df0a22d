use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use vpc_core::Backend;

#[derive(Parser)]
#[command(name = "vpc")]
#[command(about = "vpc - local-first Value Proposition Canvas planner with LLM agents")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path (defaults to ~/.config/vpc/config.toml)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Database file path (overrides the config file)
    #[arg(long, global = true)]
    pub db_path: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create, inspect, and export canvases
    #[command(subcommand)]
    Canvas(CanvasCommands),

    /// Manage reusable agent configurations
    #[command(subcommand)]
    Agent(AgentCommands),

    /// Run an agent on a task, optionally with a canvas as context
    Run {
        /// Name of the agent to run
        agent: String,

        /// Task text passed to the agent
        task: String,

        /// Attach the named canvas as JSON context
        #[arg(long)]
        canvas: Option<String>,
    },

    /// Manage stored API keys
    #[command(subcommand)]
    Auth(AuthCommands),
}

#[derive(Subcommand)]
pub enum CanvasCommands {
    /// Create a canvas or update fields of an existing one
    Save {
        /// Canvas name (unique key)
        name: String,

        /// What customers are trying to get done
        #[arg(long)]
        customer_jobs: Option<String>,

        /// Frustrations and obstacles customers face
        #[arg(long)]
        pains: Option<String>,

        /// Outcomes and benefits customers want
        #[arg(long)]
        gains: Option<String>,

        /// What the offering consists of
        #[arg(long)]
        products_services: Option<String>,

        /// How the offering creates the gains
        #[arg(long)]
        gain_creators: Option<String>,

        /// How the offering relieves the pains
        #[arg(long)]
        pain_relievers: Option<String>,
    },

    /// Print a canvas
    Show { name: String },

    /// List all canvases, most recently updated first
    List,

    /// Delete a canvas
    Delete { name: String },

    /// Export a canvas as markdown or JSON
    Export {
        name: String,

        #[arg(short, long, value_enum, default_value = "markdown")]
        format: ExportFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Markdown,
    Json,
}

#[derive(Subcommand)]
pub enum AgentCommands {
    /// Create an agent or update fields of an existing one
    Save {
        /// Agent name (unique key)
        name: String,

        /// Backend to run on (openai, anthropic, openrouter, ollama, echo)
        #[arg(short, long)]
        backend: Option<Backend>,

        /// Short role label, e.g. "Market Researcher"
        #[arg(short, long)]
        function: Option<String>,

        /// Instruction text prepended to every run
        #[arg(short, long)]
        prompt: Option<String>,

        /// Model identifier (empty uses the backend default)
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Print an agent's configuration
    Show { name: String },

    /// List all agents
    List,

    /// Delete an agent
    Delete { name: String },
}

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Store an API key for a backend
    Set {
        backend: Backend,

        /// The key; prompted on stdin when omitted
        #[arg(long)]
        key: Option<String>,
    },

    /// Remove the stored key for a backend
    Remove { backend: Backend },

    /// Show which backends have keys configured, and from where
    List,
}
