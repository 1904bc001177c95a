use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::prompts::{self, PromptOptions};
use super::{fallback, BlogPost, OutputKind};
use crate::ai::LlmClient;
use crate::config::AiConfig;
use crate::Result;

/// Where a piece of output came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Model,
    Fallback,
}

/// One generated variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub kind: OutputKind,
    pub text: String,
    pub source: Source,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialMediaPosts {
    pub twitter: String,
    pub linkedin: String,
    pub facebook: String,
}

/// Everything produced from one blog post
#[derive(Debug, Clone, Serialize)]
pub struct RepurposedContent {
    pub title: String,
    pub summary: String,
    pub social_media_posts: SocialMediaPosts,
    pub email_newsletter: String,
    /// Section headings of the source post
    pub outline: Vec<String>,
    /// Outputs that were produced by the rule-based fallback
    pub fallbacks: Vec<OutputKind>,
    pub model_server: String,
    pub generated_at: DateTime<Utc>,
}

impl fmt::Display for RepurposedContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title: {}\n", self.title)?;
        writeln!(f, "Summary:\n{}\n", self.summary)?;
        writeln!(f, "Social Media Posts:")?;
        for (platform, post) in [
            ("TWITTER", &self.social_media_posts.twitter),
            ("LINKEDIN", &self.social_media_posts.linkedin),
            ("FACEBOOK", &self.social_media_posts.facebook),
        ] {
            writeln!(f, "\n{platform}:")?;
            writeln!(f, "{post}")?;
        }
        write!(f, "\nEmail Newsletter:\n{}", self.email_newsletter)
    }
}

/// Runs every output kind against the model, one request at a time
pub struct Repurposer {
    client: LlmClient,
    options: PromptOptions,
    fallback: bool,
}

impl Repurposer {
    pub fn new(client: LlmClient, config: &AiConfig) -> Self {
        let options = PromptOptions {
            max_input_chars: client.max_input_chars(),
            summary_max_tokens: config.summary_max_tokens.max(1),
        };

        Self {
            client,
            options,
            fallback: config.fallback,
        }
    }

    /// Enable or disable the rule-based fallback
    pub fn with_fallback(mut self, enabled: bool) -> Self {
        self.fallback = enabled;
        self
    }

    /// Generate a single variant.
    ///
    /// With fallback enabled, a failed request or an empty reply is replaced
    /// by rule-based text; otherwise request errors are returned as is.
    pub async fn generate(&self, kind: OutputKind, post: &BlogPost) -> Result<Generated> {
        let request = prompts::build_request(kind, post, &self.options);

        match self.client.complete(&request).await {
            Ok(text) if !text.is_empty() || !self.fallback => Ok(Generated {
                kind,
                text,
                source: Source::Model,
            }),
            Ok(_) => {
                tracing::warn!(
                    provider = self.client.provider_name(),
                    "Empty {} reply, using fallback",
                    kind
                );
                Ok(self.fallback_for(kind, post))
            }
            Err(e) if self.fallback => {
                tracing::warn!(
                    provider = self.client.provider_name(),
                    error = %e,
                    "Failed to generate {}, using fallback",
                    kind
                );
                Ok(self.fallback_for(kind, post))
            }
            Err(e) => Err(e),
        }
    }

    fn fallback_for(&self, kind: OutputKind, post: &BlogPost) -> Generated {
        Generated {
            kind,
            text: fallback::generate(kind, post),
            source: Source::Fallback,
        }
    }

    /// Produce every variant for `post`
    pub async fn repurpose(&self, post: &BlogPost) -> Result<RepurposedContent> {
        tracing::info!(
            title = post.title(),
            sections = post.sections().len(),
            provider = self.client.provider_name(),
            "Repurposing blog post"
        );

        let mut outputs = Vec::with_capacity(OutputKind::ALL.len());
        for kind in OutputKind::ALL {
            tracing::info!("Generating {}", kind);
            outputs.push(self.generate(kind, post).await?);
        }

        Ok(self.assemble(post, outputs))
    }

    fn assemble(&self, post: &BlogPost, outputs: Vec<Generated>) -> RepurposedContent {
        let mut content = RepurposedContent {
            title: post.title().to_string(),
            summary: String::new(),
            social_media_posts: SocialMediaPosts {
                twitter: String::new(),
                linkedin: String::new(),
                facebook: String::new(),
            },
            email_newsletter: String::new(),
            outline: post.outline(),
            fallbacks: Vec::new(),
            model_server: self.client.provider_name().to_string(),
            generated_at: Utc::now(),
        };

        for output in outputs {
            if output.source == Source::Fallback {
                content.fallbacks.push(output.kind);
            }
            let slot = match output.kind {
                OutputKind::Summary => &mut content.summary,
                OutputKind::Tweet => &mut content.social_media_posts.twitter,
                OutputKind::LinkedIn => &mut content.social_media_posts.linkedin,
                OutputKind::Facebook => &mut content.social_media_posts.facebook,
                OutputKind::Newsletter => &mut content.email_newsletter,
            };
            *slot = output.text;
        }

        content
    }
}
