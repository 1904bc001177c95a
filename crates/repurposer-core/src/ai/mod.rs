pub mod providers;
mod client;

pub use client::LlmClient;
pub use providers::{ChatProvider, ChatRequest};
