//! Rule-based output used when the model is unavailable.

use super::prompts::{truncate_chars, TWEET_MAX_CHARS};
use super::{BlogPost, OutputKind};

const SUMMARY_MAX_CHARS: usize = 250;
const LINK_PLACEHOLDER: &str = "[LINK]";

pub fn generate(kind: OutputKind, post: &BlogPost) -> String {
    match kind {
        OutputKind::Summary => summary(post),
        OutputKind::Tweet => ellipsize(&social_post(post), TWEET_MAX_CHARS),
        OutputKind::LinkedIn | OutputKind::Facebook => social_post(post),
        OutputKind::Newsletter => newsletter(post),
    }
}

/// Cut `text` to `max_chars`, marking the cut with "..."
fn ellipsize(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    format!("{}...", truncate_chars(text, keep))
}

/// First two paragraphs, capped at 250 characters
fn summary(post: &BlogPost) -> String {
    let summary = post
        .paragraphs()
        .into_iter()
        .take(2)
        .collect::<Vec<_>>()
        .join(" ");

    if summary.chars().count() > SUMMARY_MAX_CHARS {
        format!("{}...", truncate_chars(&summary, SUMMARY_MAX_CHARS))
    } else {
        summary
    }
}

/// One hashtag per title word longer than three characters
fn hashtags(title: &str) -> String {
    title
        .split_whitespace()
        .filter(|word| word.chars().count() > 3)
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|tag| !tag.is_empty())
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn social_post(post: &BlogPost) -> String {
    let title = post.title();
    format!(
        "{title}\n\nRead more: {LINK_PLACEHOLDER}\n\n{}",
        hashtags(title)
    )
}

fn newsletter(post: &BlogPost) -> String {
    let title = post.title();
    let paragraphs = post.paragraphs();
    let highlights = paragraphs.get(1).copied().unwrap_or_default();

    format!(
        "Subject: {title}\n\n\
Hi there!\n\n\
Check out our latest blog post: {title}\n\n\
Highlights:\n\
{highlights}\n\n\
Read full article: {LINK_PLACEHOLDER}\n\n\
Cheers!"
    )
}
