use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable selecting the model vendor
pub const MODEL_SERVER_ENV: &str = "MODEL_SERVER";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ai: AiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level, used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Model vendor: "OPTOGPT", "GROQ", "NGU", "OPENAI"
    #[serde(default = "default_model_server")]
    pub model_server: String,
    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    /// Max tokens for the summary reply
    #[serde(default = "default_summary_max_tokens")]
    pub summary_max_tokens: u32,
    /// Blog text longer than this (chars) is truncated before prompting
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
    /// Use rule-based output when the model call fails or returns nothing
    #[serde(default = "default_true")]
    pub fallback: bool,
    #[serde(default)]
    pub optogpt: EndpointConfig,
    #[serde(default)]
    pub groq: EndpointConfig,
    #[serde(default)]
    pub ngu: EndpointConfig,
    #[serde(default)]
    pub openai: EndpointConfig,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model_server: default_model_server(),
            request_timeout_secs: default_timeout(),
            summary_max_tokens: default_summary_max_tokens(),
            max_input_chars: default_max_input_chars(),
            fallback: default_true(),
            optogpt: EndpointConfig::default(),
            groq: EndpointConfig::default(),
            ngu: EndpointConfig::default(),
            openai: EndpointConfig::default(),
        }
    }
}

/// Per-vendor endpoint settings, filled from `<VENDOR>_API_KEY`,
/// `<VENDOR>_BASE_URL` and `<VENDOR>_MODEL`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

/// Supported OpenAI-compatible vendors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelServer {
    OptoGpt,
    Groq,
    Ngu,
    OpenAi,
}

impl ModelServer {
    pub const ALL: [ModelServer; 4] = [
        ModelServer::OptoGpt,
        ModelServer::Groq,
        ModelServer::Ngu,
        ModelServer::OpenAi,
    ];

    /// Prefix of the vendor's environment variables
    pub fn env_prefix(&self) -> &'static str {
        match self {
            ModelServer::OptoGpt => "OPTOGPT",
            ModelServer::Groq => "GROQ",
            ModelServer::Ngu => "NGU",
            ModelServer::OpenAi => "OPENAI",
        }
    }

    pub fn default_base_url(&self) -> Option<&'static str> {
        match self {
            ModelServer::OpenAi => Some("https://api.openai.com/v1"),
            ModelServer::Groq => Some("https://api.groq.com/openai/v1"),
            ModelServer::OptoGpt | ModelServer::Ngu => None,
        }
    }
}

impl FromStr for ModelServer {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        let upper = s.trim().to_ascii_uppercase();
        ModelServer::ALL
            .into_iter()
            .find(|server| server.env_prefix() == upper)
            .ok_or_else(|| crate::Error::Config(format!("Unsupported MODEL_SERVER: {}", upper)))
    }
}

impl fmt::Display for ModelServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.env_prefix())
    }
}

/// Fully resolved endpoint for the selected vendor
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedEndpoint {
    pub server: ModelServer,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl ResolvedEndpoint {
    /// API key with everything but the last four characters hidden
    pub fn masked_key(&self) -> String {
        let count = self.api_key.chars().count();
        if count <= 8 {
            return "****".to_string();
        }
        let tail: String = self.api_key.chars().skip(count - 4).collect();
        format!("****{}", tail)
    }
}

impl fmt::Debug for ResolvedEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedEndpoint")
            .field("server", &self.server)
            .field("api_key", &self.masked_key())
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_model_server() -> String {
    "GROQ".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_summary_max_tokens() -> u32 {
    250
}

fn default_max_input_chars() -> usize {
    12000
}

fn default_true() -> bool {
    true
}

/// Load `.env` from the working directory, if there is one.
pub fn load_dotenv() -> crate::Result<Option<PathBuf>> {
    load_dotenv_from(Path::new(".env"))
}

/// Load environment variables from a dotenv file.
///
/// Returns the path that was loaded. A missing file is not an error; a
/// malformed one is. Variables already set in the process are not overwritten.
pub fn load_dotenv_from(path: &Path) -> crate::Result<Option<PathBuf>> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(Some(path.to_path_buf())),
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(crate::Error::Config(format!(
            "Failed to load {}: {}",
            path.display(),
            e
        ))),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl AppConfig {
    /// Load configuration from `path` (or the default location) and apply
    /// environment overrides on top.
    ///
    /// An explicitly given path must exist; the default one is optional.
    pub fn load_from(path: Option<&Path>) -> crate::Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Self::config_path();
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply the `--server` command-line flag, which beats `MODEL_SERVER`
    pub fn with_server_override(mut self, server: Option<String>) -> Self {
        if let Some(server) = non_empty(server) {
            self.ai.model_server = server;
        }
        self
    }

    /// Parse a TOML configuration file
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Override settings with environment variables looked up through `lookup`.
    ///
    /// Empty values count as unset.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(server) = non_empty(lookup(MODEL_SERVER_ENV)) {
            self.ai.model_server = server;
        }

        for server in ModelServer::ALL {
            let prefix = server.env_prefix();
            let endpoint = self.endpoint_mut(server);
            if let Some(key) = non_empty(lookup(&format!("{prefix}_API_KEY"))) {
                endpoint.api_key = Some(key);
            }
            if let Some(url) = non_empty(lookup(&format!("{prefix}_BASE_URL"))) {
                endpoint.base_url = Some(url);
            }
            if let Some(model) = non_empty(lookup(&format!("{prefix}_MODEL"))) {
                endpoint.model = Some(model);
            }
        }
    }

    pub fn endpoint(&self, server: ModelServer) -> &EndpointConfig {
        match server {
            ModelServer::OptoGpt => &self.ai.optogpt,
            ModelServer::Groq => &self.ai.groq,
            ModelServer::Ngu => &self.ai.ngu,
            ModelServer::OpenAi => &self.ai.openai,
        }
    }

    fn endpoint_mut(&mut self, server: ModelServer) -> &mut EndpointConfig {
        match server {
            ModelServer::OptoGpt => &mut self.ai.optogpt,
            ModelServer::Groq => &mut self.ai.groq,
            ModelServer::Ngu => &mut self.ai.ngu,
            ModelServer::OpenAi => &mut self.ai.openai,
        }
    }

    /// The selected vendor
    pub fn model_server(&self) -> crate::Result<ModelServer> {
        self.ai.model_server.parse()
    }

    /// Resolve API key, base URL and model for the selected vendor
    pub fn resolve_endpoint(&self) -> crate::Result<ResolvedEndpoint> {
        let server = self.model_server()?;
        let endpoint = self.endpoint(server);
        let prefix = server.env_prefix();

        let api_key = endpoint
            .api_key
            .clone()
            .ok_or_else(|| crate::Error::Config(format!("{prefix}_API_KEY is not set")))?;

        let model = endpoint
            .model
            .clone()
            .ok_or_else(|| crate::Error::Config(format!("{prefix}_MODEL is not set")))?;

        let base_url = endpoint
            .base_url
            .clone()
            .or_else(|| server.default_base_url().map(str::to_string))
            .ok_or_else(|| crate::Error::Config(format!("{prefix}_BASE_URL is not set")))?;

        let parsed = url::Url::parse(&base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(crate::Error::Config(format!(
                "{prefix}_BASE_URL must be an http(s) URL: {base_url}"
            )));
        }

        Ok(ResolvedEndpoint {
            server,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        })
    }

    /// Get the configuration file path
    /// Always uses ~/.config/repurposer/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("repurposer")
            .join("config.toml")
    }
}
