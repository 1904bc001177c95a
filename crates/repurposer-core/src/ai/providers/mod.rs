mod openai;

pub use openai::OpenAiCompatProvider;

use crate::Result;

/// A single system + user exchange sent to a chat-completion endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub system: String,
    pub user: String,
    /// Reply length cap; `None` leaves it to the endpoint
    pub max_tokens: Option<u32>,
}

/// Trait for chat-completion backends
#[async_trait::async_trait]
pub trait ChatProvider: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Send one request and return the reply text, trimmed.
    /// A reply without content yields an empty string.
    async fn complete(&self, request: &ChatRequest) -> Result<String>;
}
