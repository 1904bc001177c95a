mod fallback;
mod kind;
mod post;
pub mod prompts;
mod repurposer;

pub use kind::OutputKind;
pub use post::{BlogPost, Section};
pub use repurposer::{Generated, RepurposedContent, Repurposer, SocialMediaPosts, Source};

/// Demo post used by `repurposer sample`
pub const SAMPLE_POST: &str = include_str!("../../assets/sample_post.md");
