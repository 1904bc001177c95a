pub mod config;
pub mod run;
pub mod sample;

use anyhow::Result;
use clap::{Args, ValueEnum};

use repurposer_core::{ai::LlmClient, AppConfig, BlogPost, Repurposer};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text report
    #[default]
    Text,
    /// JSON document
    Json,
}

#[derive(Debug, Clone, Default, Args)]
pub struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Fail on model errors instead of using rule-based output
    #[arg(long)]
    pub no_fallback: bool,
}

/// Repurpose `text` with the configured model and print the result to stdout
pub async fn repurpose_and_print(config: &AppConfig, text: &str, output: &OutputArgs) -> Result<()> {
    let post = BlogPost::parse(text)?;

    let client = LlmClient::new(config)?;
    let repurposer =
        Repurposer::new(client, &config.ai).with_fallback(config.ai.fallback && !output.no_fallback);

    let content = repurposer.repurpose(&post).await?;

    if !content.fallbacks.is_empty() {
        tracing::warn!(
            count = content.fallbacks.len(),
            "Some outputs were generated without the model"
        );
    }

    match output.format {
        OutputFormat::Text => println!("{}", content),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&content)?),
    }

    Ok(())
}
