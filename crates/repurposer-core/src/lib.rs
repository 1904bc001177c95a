pub mod config;
pub mod error;
pub mod ai;
pub mod content;

pub use config::{AppConfig, ModelServer, ResolvedEndpoint};
pub use content::{BlogPost, OutputKind, RepurposedContent, Repurposer};
pub use error::{Error, Result};
