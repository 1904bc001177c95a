use std::sync::Arc;
use std::time::Duration;

use super::providers::{ChatProvider, ChatRequest, OpenAiCompatProvider};
use crate::config::AppConfig;
use crate::Result;

/// LLM client that wraps the configured provider
#[derive(Clone)]
pub struct LlmClient {
    provider: Arc<dyn ChatProvider>,
    max_input_chars: usize,
}

impl LlmClient {
    /// Create a client for the vendor selected in the configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let endpoint = config.resolve_endpoint()?;
        let timeout = Duration::from_secs(config.ai.request_timeout_secs.max(1));

        tracing::debug!(
            server = %endpoint.server,
            model = %endpoint.model,
            base_url = %endpoint.base_url,
            "Using model endpoint"
        );

        let provider = Arc::new(OpenAiCompatProvider::new(&endpoint, timeout)?);
        Ok(Self::with_provider(provider, config.ai.max_input_chars))
    }

    /// Create a client around an existing provider
    pub fn with_provider(provider: Arc<dyn ChatProvider>, max_input_chars: usize) -> Self {
        Self {
            provider,
            max_input_chars: max_input_chars.max(1),
        }
    }

    pub async fn complete(&self, request: &ChatRequest) -> Result<String> {
        self.provider.complete(request).await
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Max blog characters embedded in a prompt
    pub fn max_input_chars(&self) -> usize {
        self.max_input_chars
    }
}
