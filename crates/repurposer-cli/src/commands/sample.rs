use anyhow::Result;

use repurposer_core::{content::SAMPLE_POST, AppConfig};

use super::{repurpose_and_print, OutputArgs};

pub async fn run(config: &AppConfig, output: &OutputArgs) -> Result<()> {
    repurpose_and_print(config, SAMPLE_POST, output).await
}
