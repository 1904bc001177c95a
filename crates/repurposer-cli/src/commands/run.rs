use std::io::{self, IsTerminal, Read};
use std::path::Path;

use anyhow::{Context, Result};

use repurposer_core::AppConfig;

use super::{repurpose_and_print, OutputArgs};

pub async fn run(config: &AppConfig, input: Option<&Path>, output: &OutputArgs) -> Result<()> {
    let text = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut stdin = io::stdin();
            if stdin.is_terminal() {
                eprintln!("Paste the blog post, then press Ctrl-D:");
            }
            let mut text = String::new();
            stdin
                .read_to_string(&mut text)
                .context("Failed to read blog post from stdin")?;
            text
        }
    };

    repurpose_and_print(config, &text, output).await
}
