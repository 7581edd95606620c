use crate::Provider;
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::Notify;
use xofa_core::{Error, Result};

/// Mock response types for deterministic testing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MockResponse {
    /// Successful answer with this text
    Text { content: String },
    /// Successful answer with no text
    Empty,
    /// Provider failure
    Error { message: String },
}

/// Mock configuration from TOML file
#[derive(Debug, Deserialize)]
struct MockConfig {
    responses: Vec<MockResponse>,
}

/// Mock provider for deterministic testing without API calls
///
/// Responses are consumed in order; once exhausted every call answers with
/// a short placeholder text. Each call is recorded before it is answered.
#[derive(Default)]
pub struct MockProvider {
    responses: Mutex<VecDeque<MockResponse>>,
    requests: Mutex<Vec<ChatRequest>>,
    api_keys: Mutex<Vec<String>>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    gate: Option<Notify>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockProvider {
    pub fn new(responses: Vec<MockResponse>) -> Self {
        Self { responses: Mutex::new(responses.into()), ..Default::default() }
    }

    /// Provider answering every call with the same text
    pub fn with_text(content: impl Into<String>) -> Self {
        Self::new(vec![MockResponse::Text { content: content.into() }])
    }

    /// Load scripted responses from a TOML file with `[[responses]]` entries
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: MockConfig = toml::from_str(&content)
            .map_err(|e| Error::Parse(format!("Failed to parse mock responses: {}", e)))?;
        Ok(Self::new(config.responses))
    }

    /// Hold every call open until [`MockProvider::release`] is called
    pub fn gated(mut self) -> Self {
        self.gate = Some(Notify::new());
        self
    }

    /// Let one held call (present or future) finish
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn push_response(&self, response: MockResponse) {
        lock(&self.responses).push_back(response);
    }

    /// Number of calls started so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Calls currently waiting on the gate or being answered
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Highest number of simultaneous calls observed
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        lock(&self.requests).clone()
    }

    pub fn last_request(&self) -> Option<ChatRequest> {
        lock(&self.requests).last().cloned()
    }

    pub fn api_keys(&self) -> Vec<String> {
        lock(&self.api_keys).clone()
    }

    fn next_response(&self) -> MockResponse {
        let mut responses = lock(&self.responses);
        if responses.len() > 1 {
            responses.pop_front().unwrap_or(MockResponse::Empty)
        } else {
            responses
                .front()
                .cloned()
                .unwrap_or_else(|| MockResponse::Text { content: "Mock response".to_string() })
        }
    }
}

#[async_trait::async_trait]
impl Provider for MockProvider {
    async fn complete(&self, api_key: &str, request: ChatRequest) -> Result<ChatResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        lock(&self.requests).push(request);
        lock(&self.api_keys).push(api_key.to_string());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let response = self.next_response();
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match response {
            MockResponse::Text { content } => Ok(ChatResponse::new(content).with_finish_reason("STOP")),
            MockResponse::Empty => Ok(ChatResponse::empty()),
            MockResponse::Error { message } => Err(Error::Provider(message)),
        }
    }

    fn model(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Arc;

    fn request(prompt: &str) -> ChatRequest {
        ChatRequest::builder().add_message(ChatMessage::user(prompt)).build()
    }

    #[tokio::test]
    async fn test_mock_provider_scripted_sequence() {
        let provider = MockProvider::new(vec![
            MockResponse::Text { content: "first".to_string() },
            MockResponse::Error { message: "boom".to_string() },
            MockResponse::Text { content: "last".to_string() },
        ]);

        let first = provider.complete("key", request("a")).await.unwrap();
        assert_eq!(first.text.as_deref(), Some("first"));

        let second = provider.complete("key", request("b")).await;
        assert!(matches!(second, Err(Error::Provider(ref m)) if m == "boom"));

        let third = provider.complete("key", request("c")).await.unwrap();
        assert_eq!(third.text.as_deref(), Some("last"));

        let repeated = provider.complete("key", request("d")).await.unwrap();
        assert_eq!(repeated.text.as_deref(), Some("last"));

        assert_eq!(provider.calls(), 4);
        assert_eq!(provider.last_request().and_then(|r| r.prompt().map(String::from)).as_deref(), Some("d"));
    }

    #[tokio::test]
    async fn test_mock_provider_records_api_keys() {
        let provider = MockProvider::with_text("ok");
        provider.complete("k1", request("a")).await.unwrap();
        provider.complete("k2", request("b")).await.unwrap();
        assert_eq!(provider.api_keys(), vec!["k1".to_string(), "k2".to_string()]);
    }

    #[tokio::test]
    async fn test_mock_provider_gate_holds_call() {
        let provider = Arc::new(MockProvider::with_text("done").gated());
        let task = {
            let provider = provider.clone();
            tokio::spawn(async move { provider.complete("key", request("wait")).await })
        };

        while provider.calls() == 0 {
            tokio::task::yield_now().await;
        }
        assert_eq!(provider.in_flight(), 1);
        assert!(!task.is_finished());

        provider.release();
        let response = task.await.unwrap().unwrap();
        assert_eq!(response.text.as_deref(), Some("done"));
        assert_eq!(provider.in_flight(), 0);
        assert_eq!(provider.max_in_flight(), 1);
    }

    #[test]
    fn test_mock_response_parsing() {
        let toml = r#"
[[responses]]
type = "text"
content = "Assalamu Alaikum"

[[responses]]
type = "empty"

[[responses]]
type = "error"
message = "HTTP 503"
"#;

        let config: MockConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.responses.len(), 3);
        assert!(matches!(config.responses[0], MockResponse::Text { .. }));
        assert_eq!(config.responses[1], MockResponse::Empty);
        assert!(matches!(config.responses[2], MockResponse::Error { .. }));
    }

    #[tokio::test]
    async fn test_mock_provider_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[responses]]\ntype = \"text\"\ncontent = \"from file\"").unwrap();

        let provider = MockProvider::from_file(file.path()).unwrap();
        let response = provider.complete("key", request("x")).await.unwrap();
        assert_eq!(response.text.as_deref(), Some("from file"));
    }

    #[test]
    fn test_mock_provider_from_missing_file() {
        let result = MockProvider::from_file(Path::new("/nonexistent/xofa/mock.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
