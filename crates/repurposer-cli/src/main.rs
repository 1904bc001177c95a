use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use repurposer_core::{config::load_dotenv, AppConfig};

mod commands;

use commands::OutputArgs;

#[derive(Parser)]
#[command(name = "repurposer")]
#[command(author, version, about = "Turn a blog post into a summary, social posts and a newsletter")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Model vendor (OPTOGPT, GROQ, NGU, OPENAI); overrides MODEL_SERVER
    #[arg(long, global = true)]
    server: Option<String>,

    /// Config file (defaults to ~/.config/repurposer/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Repurpose a markdown blog post
    Run {
        /// Blog post file; reads stdin when omitted
        input: Option<PathBuf>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Repurpose the bundled sample post
    Sample {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Show the resolved model endpoint
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // .env must be loaded before the config reads the environment
    let dotenv_path = load_dotenv()?;

    let config = AppConfig::load_from(cli.config.as_deref())?.with_server_override(cli.server);

    // Initialize logging; stdout is reserved for the generated content
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Some(path) = dotenv_path {
        tracing::debug!(path = %path.display(), "Loaded environment from .env");
    }

    match cli.command {
        Some(Commands::Run { input, output }) => {
            commands::run::run(&config, input.as_deref(), &output).await
        }
        None => commands::run::run(&config, None, &OutputArgs::default()).await,
        Some(Commands::Sample { output }) => commands::sample::run(&config, &output).await,
        Some(Commands::Config) => commands::config::run(&config, cli.config.as_deref()),
    }
}
