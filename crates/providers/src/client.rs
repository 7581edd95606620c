use std::sync::Arc;

use crate::adapter::{Provider, ProviderFactory};
use crate::credential::{CredentialSource, EnvCredential};
use crate::prompts::system_instruction;
use crate::types::{ChatMessage, ChatRequest};
use xofa_core::logging::preview;
use xofa_core::{CompletionError, EMPTY_RESPONSE_REPLY, ProviderConfig, Result, Turn};

/// Sampling and persona settings applied to every request
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSettings {
    pub model: String,
    pub temperature: f32,
    pub top_p: f32,
    pub system_instruction: String,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self::from(&ProviderConfig::default())
    }
}

impl From<&ProviderConfig> for CompletionSettings {
    fn from(config: &ProviderConfig) -> Self {
        Self {
            model: config.model().to_string(),
            temperature: config.temperature(),
            top_p: config.top_p(),
            system_instruction: system_instruction(),
        }
    }
}

/// Turns a transcript plus a new prompt into one model reply
///
/// Cheap to clone; clones share the provider and credential source.
#[derive(Clone)]
pub struct CompletionClient {
    provider: Arc<dyn Provider>,
    credential: Arc<dyn CredentialSource>,
    settings: CompletionSettings,
}

impl CompletionClient {
    pub fn new(
        provider: Arc<dyn Provider>, credential: Arc<dyn CredentialSource>, settings: CompletionSettings,
    ) -> Self {
        Self { provider, credential, settings }
    }

    /// Build a client for the configured provider, reading the key from its env var
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        let provider = ProviderFactory::create_from_config(config)?;
        let credential = Arc::new(EnvCredential::new(config.api_key_env()));
        Ok(Self::new(provider, credential, CompletionSettings::from(config)))
    }

    pub fn settings(&self) -> &CompletionSettings {
        &self.settings
    }

    /// Assemble the request: prior turns in order, then the prompt as the final user entry
    pub fn build_request(&self, prior: &[Turn], prompt: &str) -> ChatRequest {
        let mut messages: Vec<ChatMessage> = prior.iter().map(ChatMessage::from).collect();
        messages.push(ChatMessage::user(prompt));

        ChatRequest::builder()
            .system_instruction(self.settings.system_instruction.clone())
            .messages(messages)
            .model(self.settings.model.clone())
            .temperature(self.settings.temperature)
            .top_p(self.settings.top_p)
            .build()
    }

    /// Obtain one reply for `prompt` given the turns that precede it.
    ///
    /// The credential is read on every call; without one the provider is
    /// never contacted. Exactly one provider call is made otherwise. A reply
    /// without usable text becomes [`EMPTY_RESPONSE_REPLY`].
    #[tracing::instrument(name = "complete", skip_all, fields(prior = prior.len(), model = %self.settings.model))]
    pub async fn complete(&self, prior: &[Turn], prompt: &str) -> std::result::Result<String, CompletionError> {
        let Some(api_key) = self.credential.api_key() else {
            tracing::warn!(source = %self.credential.describe(), "no API key available");
            return Err(CompletionError::missing_credential(self.credential.describe()));
        };

        tracing::debug!(prompt = %preview(prompt, 80), "requesting completion");
        let request = self.build_request(prior, prompt);

        let response = self.provider.complete(&api_key, request).await.map_err(|e| {
            tracing::error!(error = %e, "completion failed");
            CompletionError::from(e)
        })?;

        match response.usable_text() {
            Some(text) => {
                tracing::debug!(chars = text.chars().count(), finish_reason = ?response.finish_reason, "completion received");
                Ok(text.to_string())
            }
            None => {
                tracing::info!(finish_reason = ?response.finish_reason, "provider returned no text");
                Ok(EMPTY_RESPONSE_REPLY.to_string())
            }
        }
    }
}
