//! HTTP-level tests for the Gemini provider against a local mock server.

use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use xofa_core::{CompletionError, EMPTY_RESPONSE_REPLY, ProviderConfig, Turn};
use xofa_providers::{
    ChatMessage, ChatRequest, CompletionClient, CompletionSettings, GeminiProvider, Provider, StaticCredential,
};

const MODEL: &str = "gemini-3-flash-preview";

fn provider_for(server: &MockServer) -> GeminiProvider {
    GeminiProvider::new(MODEL.to_string(), Some(format!("{}/v1beta", server.uri())))
}

fn client_for(server: &MockServer, key: Option<&str>) -> CompletionClient {
    let credential = match key {
        Some(key) => StaticCredential::new(key),
        None => StaticCredential::missing(),
    };
    CompletionClient::new(Arc::new(provider_for(server)), Arc::new(credential), CompletionSettings::default())
}

fn text_body(parts: &[&str]) -> serde_json::Value {
    let parts: Vec<_> = parts.iter().map(|t| json!({ "text": t })).collect();
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": parts },
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
async fn test_generate_content_request_shape() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/v1beta/models/{}:generateContent", MODEL)))
        .and(header("x-goog-api-key", "secret-key"))
        .and(body_partial_json(json!({
            "contents": [
                { "role": "user", "parts": [{ "text": "Assalamu Alaikum" }] },
                { "role": "model", "parts": [{ "text": "Wa Alaikum Assalam" }] },
                { "role": "user", "parts": [{ "text": "Who made you?" }] }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_body(&["I was created by MUKIT SARKER."])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("secret-key"));
    let prior = vec![Turn::user("Assalamu Alaikum"), Turn::model("Wa Alaikum Assalam")];

    let reply = client.complete(&prior, "Who made you?").await.unwrap();
    assert_eq!(reply, "I was created by MUKIT SARKER.");

    let received = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    assert!(body["systemInstruction"]["parts"][0]["text"].as_str().unwrap().contains("CRITICAL IDENTITY RULE"));
    assert!((body["generationConfig"]["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    assert!((body["generationConfig"]["topP"].as_f64().unwrap() - 0.95).abs() < 1e-6);
}

#[tokio::test]
async fn test_text_parts_are_concatenated() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_body(&["Peace ", "be upon ", "you"])))
        .mount(&server)
        .await;

    let request = ChatRequest::builder().add_message(ChatMessage::user("hi")).build();
    let response = provider_for(&server).complete("key", request).await.unwrap();
    assert_eq!(response.text.as_deref(), Some("Peace be upon you"));
}

#[tokio::test]
async fn test_no_candidates_yields_fallback_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let reply = client_for(&server, Some("key")).complete(&[], "hi").await.unwrap();
    assert_eq!(reply, EMPTY_RESPONSE_REPLY);
}

#[tokio::test]
async fn test_non_success_status_is_provider_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server, Some("key")).complete(&[], "hi").await.unwrap_err();
    match err {
        CompletionError::Provider(detail) => assert!(detail.contains("503")),
        other => panic!("expected provider failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_provider_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server, Some("key")).complete(&[], "hi").await.unwrap_err();
    assert!(matches!(err, CompletionError::Provider(_)));
}

#[tokio::test]
async fn test_missing_key_never_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_body(&["unreachable"])))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server, None).complete(&[], "hi").await.unwrap_err();
    assert!(err.is_missing_credential());
}

#[tokio::test]
async fn test_configured_base_url_and_model() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/custom/models/gemini-2.5-pro:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_body(&["ok"])))
        .expect(1)
        .mount(&server)
        .await;

    let config = ProviderConfig::Gemini {
        model: "gemini-2.5-pro".to_string(),
        base_url: format!("{}/custom", server.uri()),
        api_key_env: "XOFA_UNUSED_KEY_VAR".to_string(),
        temperature: 0.2,
        top_p: 0.5,
    };
    let provider = xofa_providers::ProviderFactory::create_from_config(&config).unwrap();
    let client =
        CompletionClient::new(provider, Arc::new(StaticCredential::new("key")), CompletionSettings::from(&config));

    assert_eq!(client.complete(&[], "hi").await.unwrap(), "ok");
}
