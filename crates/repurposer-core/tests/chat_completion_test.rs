use httpmock::prelude::*;
use serde_json::json;

use repurposer_core::ai::LlmClient;
use repurposer_core::{AppConfig, BlogPost, Error, OutputKind, Repurposer};

const BLOG_TEXT: &str = "# Zero-Copy Parsing\n\nBorrow, don't clone.\n\n## Lifetimes\n\nThey tie output to input.";

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1_700_000_000u32,
        "model": "test-model",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

fn config_for(server: &MockServer) -> AppConfig {
    let base_url = server.base_url();
    let mut config = AppConfig::default();
    config.apply_env(|key| match key {
        "MODEL_SERVER" => Some("openai".to_string()),
        "OPENAI_API_KEY" => Some("test-key".to_string()),
        "OPENAI_BASE_URL" => Some(base_url.clone()),
        "OPENAI_MODEL" => Some("test-model".to_string()),
        _ => None,
    });
    config
}

fn repurposer_for(config: &AppConfig) -> Repurposer {
    let client = LlmClient::new(config).unwrap();
    Repurposer::new(client, &config.ai)
}

#[tokio::test]
async fn test_model_replies_land_in_report() {
    let server = MockServer::start_async().await;

    let replies = [
        ("Summarize this blog post", "  Borrowing beats cloning.  "),
        ("Write a tweet", "Zero-copy FTW #rust"),
        ("LinkedIn post", "Thoughts on zero-copy parsing."),
        ("Facebook post", "New post is up!"),
        ("Create newsletter for blog", "Subject: Zero-Copy"),
    ];

    let mut mocks = Vec::new();
    for (marker, reply) in replies {
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/chat/completions")
                    .body_contains(marker);
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(completion(reply));
            })
            .await;
        mocks.push(mock);
    }

    let config = config_for(&server);
    let post = BlogPost::parse(BLOG_TEXT).unwrap();
    let result = repurposer_for(&config).repurpose(&post).await.unwrap();

    for mock in &mocks {
        mock.assert_hits_async(1).await;
    }

    assert_eq!(result.title, "Zero-Copy Parsing");
    assert_eq!(result.summary, "Borrowing beats cloning.");
    assert_eq!(result.social_media_posts.twitter, "Zero-copy FTW #rust");
    assert_eq!(result.social_media_posts.linkedin, "Thoughts on zero-copy parsing.");
    assert_eq!(result.social_media_posts.facebook, "New post is up!");
    assert_eq!(result.email_newsletter, "Subject: Zero-Copy");
    assert!(result.fallbacks.is_empty());
    assert_eq!(result.model_server, "OPENAI");

    let report = result.to_string();
    assert!(report.starts_with("Title: Zero-Copy Parsing\n\nSummary:\nBorrowing beats cloning.\n"));
    assert!(report.contains("\nTWITTER:\nZero-copy FTW #rust\n"));
    assert!(report.ends_with("Email Newsletter:\nSubject: Zero-Copy"));
}

#[tokio::test]
async fn test_summary_request_carries_model_and_token_cap() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/chat/completions")
                .body_contains("\"model\":\"test-model\"")
                .body_contains("\"max_tokens\":250")
                .body_contains("Create a concise blog summary.");
            then.status(200).json_body(completion("ok"));
        })
        .await;

    let config = config_for(&server);
    let post = BlogPost::parse(BLOG_TEXT).unwrap();
    let generated = repurposer_for(&config)
        .generate(OutputKind::Summary, &post)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(generated.text, "ok");
}

#[tokio::test]
async fn test_api_error_propagates_without_fallback() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(401).json_body(json!({
                "error": {
                    "message": "Invalid API Key",
                    "type": "invalid_request_error",
                    "code": "invalid_api_key"
                }
            }));
        })
        .await;

    let config = config_for(&server);
    let post = BlogPost::parse(BLOG_TEXT).unwrap();
    let err = repurposer_for(&config)
        .with_fallback(false)
        .repurpose(&post)
        .await
        .unwrap_err();

    assert!(matches!(&err, Error::AiProvider(_)));
    assert!(err.to_string().contains("Invalid API Key"));
}

#[tokio::test]
async fn test_api_error_falls_back_to_rules() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(401).json_body(json!({
                "error": { "message": "Invalid API Key", "type": "invalid_request_error" }
            }));
        })
        .await;

    let config = config_for(&server);
    let post = BlogPost::parse(BLOG_TEXT).unwrap();
    let result = repurposer_for(&config).repurpose(&post).await.unwrap();

    mock.assert_hits_async(5).await;
    assert_eq!(result.fallbacks, OutputKind::ALL.to_vec());
    assert_eq!(result.summary, "# Zero-Copy Parsing Borrow, don't clone.");
    assert_eq!(
        result.social_media_posts.twitter,
        "Zero-Copy Parsing\n\nRead more: [LINK]\n\n#zerocopy #parsing"
    );
    assert!(result.email_newsletter.contains("Highlights:\nBorrow, don't clone."));
}

#[tokio::test]
async fn test_empty_choices_fall_back() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200).json_body(json!({
                "id": "chatcmpl-empty",
                "object": "chat.completion",
                "created": 1_700_000_000u32,
                "model": "test-model",
                "choices": []
            }));
        })
        .await;

    let config = config_for(&server);
    let post = BlogPost::parse(BLOG_TEXT).unwrap();
    let generated = repurposer_for(&config)
        .generate(OutputKind::LinkedIn, &post)
        .await
        .unwrap();

    assert_eq!(generated.source, repurposer_core::content::Source::Fallback);
    assert!(generated.text.starts_with("Zero-Copy Parsing"));
}

#[test]
fn test_client_requires_configured_endpoint() {
    let mut config = AppConfig::default();
    config.apply_env(|key| match key {
        "MODEL_SERVER" => Some("OPTOGPT".to_string()),
        "OPTOGPT_API_KEY" => Some("key".to_string()),
        "OPTOGPT_MODEL" => Some("opto-1".to_string()),
        _ => None,
    });

    let err = LlmClient::new(&config).err().unwrap();
    assert!(err.to_string().contains("OPTOGPT_BASE_URL is not set"));
}
