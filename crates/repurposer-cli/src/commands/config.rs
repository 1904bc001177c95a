use std::path::Path;

use anyhow::Result;

use repurposer_core::AppConfig;

pub fn run(config: &AppConfig, config_path: Option<&Path>) -> Result<()> {
    let endpoint = config.resolve_endpoint()?;

    println!("Model server: {}", endpoint.server);
    println!("  Base URL: {}", endpoint.base_url);
    println!("  Model:    {}", endpoint.model);
    println!("  API key:  {}", endpoint.masked_key());
    println!();
    println!("Request timeout: {}s", config.ai.request_timeout_secs);
    println!("Summary max tokens: {}", config.ai.summary_max_tokens);
    println!("Max input chars: {}", config.ai.max_input_chars);
    println!("Fallback: {}", if config.ai.fallback { "enabled" } else { "disabled" });
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(AppConfig::config_path);
    println!("Config file: {}", path.display());

    Ok(())
}
