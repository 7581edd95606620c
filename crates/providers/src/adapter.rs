use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::types::*;
use xofa_core::{Error, ProviderConfig, Result};

/// Generic provider trait for LLM backends
#[async_trait::async_trait]
pub trait Provider: Send + Sync {
    /// Request one complete (non-streamed) answer
    async fn complete(&self, api_key: &str, request: ChatRequest) -> Result<ChatResponse>;

    /// Model used when the request does not name one
    fn model(&self) -> &str;
}

/// Gemini provider implementation
pub struct GeminiProvider {
    client: HttpClient,
    base_url: String,
    model: String,
}

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

impl GeminiProvider {
    pub fn new(model: String, base_url: Option<String>) -> Self {
        Self {
            client: HttpClient::new(),
            model,
            base_url: base_url.unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url.trim_end_matches('/'), model)
    }

    /// Convert ChatRequest to Gemini API format
    fn to_gemini_request(&self, request: &ChatRequest) -> GeminiChatRequest {
        let contents = request
            .messages
            .iter()
            .map(|msg| GeminiContent {
                role: Some(msg.role.as_str().to_string()),
                parts: vec![GeminiPart { text: Some(msg.content.clone()) }],
            })
            .collect();

        let system_instruction = request
            .system_instruction
            .as_ref()
            .map(|text| GeminiSystemInstruction { parts: vec![GeminiPart { text: Some(text.clone()) }] });

        let generation_config = if request.temperature.is_some() || request.top_p.is_some() {
            Some(GeminiGenerationConfig { temperature: request.temperature, top_p: request.top_p })
        } else {
            None
        };

        GeminiChatRequest { contents, system_instruction, generation_config }
    }

    /// Parse a `generateContent` body into a ChatResponse
    fn parse_response(body: &str) -> Result<ChatResponse> {
        let parsed: GeminiResponse = serde_json::from_str(body)
            .map_err(|e| Error::Parse(format!("Failed to parse Gemini response: {}", e)))?;

        let Some(candidate) = parsed.candidates.and_then(|c| c.into_iter().next()) else {
            return Ok(ChatResponse::empty());
        };

        let text: Option<String> = candidate.content.map(|content| {
            content.parts.into_iter().filter_map(|part| part.text).collect::<Vec<_>>().concat()
        });

        Ok(ChatResponse { text: text.filter(|t| !t.is_empty()), finish_reason: candidate.finish_reason })
    }
}

#[async_trait::async_trait]
impl Provider for GeminiProvider {
    async fn complete(&self, api_key: &str, request: ChatRequest) -> Result<ChatResponse> {
        let model = request.model.clone().unwrap_or_else(|| self.model.clone());
        let gemini_request = self.to_gemini_request(&request);
        let url = self.endpoint(&model);

        tracing::debug!(model = %model, contents = gemini_request.contents.len(), "sending generateContent");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| Error::Provider(format!("Gemini request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Provider(format!("Failed to read Gemini response: {}", e)))?;

        if !status.is_success() {
            return Err(Error::Provider(format!("Gemini API error: {} - {}", status, body)));
        }

        Self::parse_response(&body)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

/// Gemini API request format
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiChatRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiSystemInstruction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GeminiGenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
struct GeminiSystemInstruction {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

/// Factory to create providers from config
pub struct ProviderFactory;

impl ProviderFactory {
    pub fn create_from_config(config: &ProviderConfig) -> Result<Arc<dyn Provider>> {
        match config {
            ProviderConfig::Gemini { model, base_url, .. } => {
                Ok(Arc::new(GeminiProvider::new(model.clone(), Some(base_url.clone()))))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> GeminiProvider {
        GeminiProvider::new("gemini-3-flash-preview".to_string(), None)
    }

    #[test]
    fn test_gemini_provider_creation() {
        let provider = provider();
        assert_eq!(provider.model, "gemini-3-flash-preview");
        assert_eq!(provider.base_url, DEFAULT_GEMINI_BASE_URL);
    }

    #[test]
    fn test_gemini_endpoint() {
        let provider = GeminiProvider::new("m".to_string(), Some("http://localhost:9000/v1beta/".to_string()));
        assert_eq!(provider.endpoint("m"), "http://localhost:9000/v1beta/models/m:generateContent");
    }

    #[test]
    fn test_gemini_request_conversion() {
        let request = ChatRequest::builder()
            .system_instruction("You are Xofa")
            .add_message(ChatMessage::user("Salam"))
            .add_message(ChatMessage::model("Wa Alaikum Assalam"))
            .add_message(ChatMessage::user("Who made you?"))
            .temperature(0.7)
            .top_p(0.95)
            .build();

        let json = serde_json::to_value(provider().to_gemini_request(&request)).unwrap();

        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "You are Xofa");
        assert_eq!(json["contents"].as_array().unwrap().len(), 3);
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][1]["role"], "model");
        assert_eq!(json["contents"][2]["parts"][0]["text"], "Who made you?");
        assert!((json["generationConfig"]["topP"].as_f64().unwrap() - 0.95).abs() < 1e-6);
        assert!((json["generationConfig"]["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_gemini_request_without_sampling() {
        let request = ChatRequest::builder().add_message(ChatMessage::user("hi")).build();
        let json = serde_json::to_value(provider().to_gemini_request(&request)).unwrap();
        assert!(json.get("generationConfig").is_none());
        assert!(json.get("systemInstruction").is_none());
    }

    #[test]
    fn test_parse_response_concatenates_parts() {
        let body = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Assalamu "}, {"text": "Alaikum"}]},
                "finishReason": "STOP"
            }]
        }"#;

        let response = GeminiProvider::parse_response(body).unwrap();
        assert_eq!(response.text.as_deref(), Some("Assalamu Alaikum"));
        assert_eq!(response.finish_reason.as_deref(), Some("STOP"));
    }

    #[test]
    fn test_parse_response_without_candidates() {
        let response = GeminiProvider::parse_response(r#"{"promptFeedback": {}}"#).unwrap();
        assert!(response.text.is_none());
    }

    #[test]
    fn test_parse_response_without_text_parts() {
        let body = r#"{"candidates": [{"content": {"parts": []}, "finishReason": "SAFETY"}]}"#;
        let response = GeminiProvider::parse_response(body).unwrap();
        assert!(response.text.is_none());
        assert_eq!(response.finish_reason.as_deref(), Some("SAFETY"));
    }

    #[test]
    fn test_parse_response_malformed() {
        let result = GeminiProvider::parse_response("<html>bad gateway</html>");
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_factory_uses_configured_model() {
        let config = ProviderConfig::default().with_model("gemini-2.5-pro");
        let provider = ProviderFactory::create_from_config(&config).unwrap();
        assert_eq!(provider.model(), "gemini-2.5-pro");
    }
}
