//! Prompt templates, one per output kind.

use super::{BlogPost, OutputKind};
use crate::ai::ChatRequest;

const SUMMARY_SYSTEM: &str = "Create a concise blog summary.";
const SOCIAL_SYSTEM: &str = "Create engaging social media posts.";
const NEWSLETTER_SYSTEM: &str = "Create an engaging email newsletter.";

/// Tweets longer than this are rejected by the platform
pub const TWEET_MAX_CHARS: usize = 280;

/// Knobs applied to every template
#[derive(Debug, Clone, Copy)]
pub struct PromptOptions {
    pub max_input_chars: usize,
    pub summary_max_tokens: u32,
}

pub(crate) fn truncate_chars(input: &str, max_chars: usize) -> &str {
    match input.char_indices().nth(max_chars) {
        Some((idx, _)) => &input[..idx],
        None => input,
    }
}

/// Build the chat request for `kind` from the post text
pub fn build_request(kind: OutputKind, post: &BlogPost, options: &PromptOptions) -> ChatRequest {
    let body = truncate_chars(post.text(), options.max_input_chars);
    let title = post.title();

    match kind {
        OutputKind::Summary => ChatRequest {
            system: SUMMARY_SYSTEM.to_string(),
            user: format!("Summarize this blog post: {body}"),
            max_tokens: Some(options.summary_max_tokens),
        },
        OutputKind::Tweet => ChatRequest {
            system: SOCIAL_SYSTEM.to_string(),
            user: format!(
                "Write a tweet of at most {TWEET_MAX_CHARS} characters, with a few relevant hashtags, \
promoting the blog post \"{title}\":\n\n{body}"
            ),
            max_tokens: None,
        },
        OutputKind::LinkedIn => ChatRequest {
            system: SOCIAL_SYSTEM.to_string(),
            user: format!(
                "Write a professional LinkedIn post promoting the blog post \"{title}\":\n\n{body}"
            ),
            max_tokens: None,
        },
        OutputKind::Facebook => ChatRequest {
            system: SOCIAL_SYSTEM.to_string(),
            user: format!(
                "Write a friendly, conversational Facebook post promoting the blog post \"{title}\":\n\n{body}"
            ),
            max_tokens: None,
        },
        OutputKind::Newsletter => ChatRequest {
            system: NEWSLETTER_SYSTEM.to_string(),
            user: format!("Create newsletter for blog: {body}"),
            max_tokens: None,
        },
    }
}
