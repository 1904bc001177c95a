use std::io::Write;

use repurposer_core::config::load_dotenv_from;
use repurposer_core::{AppConfig, Error, ModelServer};
use tempfile::NamedTempFile;

#[test]
fn test_from_file_reads_vendor_sections() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[general]
log_level = "debug"

[ai]
model_server = "ngu"
request_timeout_secs = 15
fallback = false

[ai.ngu]
api_key = "ngu-key"
base_url = "https://llm.ngu.example/v1"
model = "ngu-chat"
"#
    )
    .unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(config.general.log_level, "debug");
    assert_eq!(config.ai.request_timeout_secs, 15);
    assert!(!config.ai.fallback);
    assert_eq!(config.ai.summary_max_tokens, 250);

    let endpoint = config.resolve_endpoint().unwrap();
    assert_eq!(endpoint.server, ModelServer::Ngu);
    assert_eq!(endpoint.base_url, "https://llm.ngu.example/v1");
    assert_eq!(endpoint.model, "ngu-chat");
}

#[test]
fn test_malformed_file_is_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[ai\nmodel_server = ").unwrap();

    assert!(matches!(AppConfig::from_file(file.path()), Err(Error::Config(_))));
}

#[test]
fn test_explicit_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    assert!(matches!(AppConfig::load_from(Some(&missing)), Err(Error::Io(_))));
}

#[test]
fn test_missing_dotenv_is_fine() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = load_dotenv_from(&dir.path().join(".env")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn test_malformed_dotenv_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(&path, "this is not valid\n").unwrap();

    assert!(matches!(load_dotenv_from(&path), Err(Error::Config(_))));
}

#[test]
fn test_dotenv_does_not_override_process_env() {
    std::env::set_var("REPURPOSER_DOTENV_KEEP", "from-process");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(
        &path,
        "REPURPOSER_DOTENV_KEEP=from-file\nREPURPOSER_DOTENV_NEW=from-file\n",
    )
    .unwrap();

    let loaded = load_dotenv_from(&path).unwrap();
    assert_eq!(loaded.as_deref(), Some(path.as_path()));
    assert_eq!(std::env::var("REPURPOSER_DOTENV_KEEP").unwrap(), "from-process");
    assert_eq!(std::env::var("REPURPOSER_DOTENV_NEW").unwrap(), "from-file");
}
