use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};

use super::{ChatProvider, ChatRequest};
use crate::config::ResolvedEndpoint;
use crate::{Error, Result};

/// Provider for any OpenAI-compatible chat-completion API (OpenAI, Groq, self-hosted gateways)
pub struct OpenAiCompatProvider {
    client: Client<OpenAIConfig>,
    model: String,
    name: String,
}

impl OpenAiCompatProvider {
    pub fn new(endpoint: &ResolvedEndpoint, timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::AiProvider(format!("Failed to build HTTP client: {}", e)))?;

        let config = OpenAIConfig::new()
            .with_api_key(&endpoint.api_key)
            .with_api_base(&endpoint.base_url);
        let client = Client::with_config(config).with_http_client(http_client);

        Ok(Self {
            client,
            model: endpoint.model.clone(),
            name: endpoint.server.to_string(),
        })
    }

    fn build_messages(request: &ChatRequest) -> Result<Vec<ChatCompletionRequestMessage>> {
        let system = ChatCompletionRequestSystemMessageArgs::default()
            .content(request.system.as_str())
            .build()
            .map_err(|e| Error::AiProvider(e.to_string()))?;

        let user = ChatCompletionRequestUserMessageArgs::default()
            .content(request.user.as_str())
            .build()
            .map_err(|e| Error::AiProvider(e.to_string()))?;

        Ok(vec![system.into(), user.into()])
    }
}

#[async_trait::async_trait]
impl ChatProvider for OpenAiCompatProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, request: &ChatRequest) -> Result<String> {
        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(&self.model).messages(Self::build_messages(request)?);
        if let Some(max_tokens) = request.max_tokens {
            args.max_tokens(max_tokens);
        }
        let chat_request = args.build().map_err(|e| Error::AiProvider(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(chat_request)
            .await
            .map_err(|e| Error::AiProvider(format!("{} request failed: {}", self.name, e)))?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        Ok(content.trim().to_string())
    }
}
