pub mod adapter;
pub mod client;
pub mod credential;
pub mod mock;
pub mod prompts;
pub mod types;

pub use adapter::{DEFAULT_GEMINI_BASE_URL, GeminiProvider, Provider, ProviderFactory};
pub use client::{CompletionClient, CompletionSettings};
pub use credential::{CredentialSource, DEFAULT_API_KEY_ENV, EnvCredential, StaticCredential};
pub use mock::{MockProvider, MockResponse};
pub use prompts::{ASSISTANT_NAME, CREATOR_ANSWER, system_instruction};
pub use types::{ChatMessage, ChatRequest, ChatResponse, Role};

pub use xofa_core::{CompletionError, Error, Result};
