//! Where the API key comes from
//!
//! The key is looked up at the moment of each call, never cached, so a key
//! exported after startup is picked up by the next message.

use std::env;

/// Environment variable read when none is configured
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Source of the provider credential
pub trait CredentialSource: Send + Sync {
    /// Current key, or `None` if absent or blank
    fn api_key(&self) -> Option<String>;

    /// Human-readable name of where the key is expected
    fn describe(&self) -> String;
}

/// Reads the key from an environment variable on every call
#[derive(Debug, Clone)]
pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvCredential {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY_ENV)
    }
}

impl CredentialSource for EnvCredential {
    fn api_key(&self) -> Option<String> {
        env::var(&self.var).ok().filter(|key| !key.trim().is_empty())
    }

    fn describe(&self) -> String {
        self.var.clone()
    }
}

/// Fixed key, or no key at all
#[derive(Debug, Clone, Default)]
pub struct StaticCredential {
    key: Option<String>,
}

impl StaticCredential {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: Some(key.into()) }
    }

    pub fn missing() -> Self {
        Self { key: None }
    }
}

impl CredentialSource for StaticCredential {
    fn api_key(&self) -> Option<String> {
        self.key.clone().filter(|key| !key.trim().is_empty())
    }

    fn describe(&self) -> String {
        DEFAULT_API_KEY_ENV.to_string()
    }
}
