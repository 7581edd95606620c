pub mod config;
pub mod error;
pub mod logging;
pub mod transcript;

pub use config::{Config, ConfigError, FileLoggingConfig, LoggingConfig, ProviderConfig, ThemeVariant, UiConfig};
pub use error::{CompletionError, EMPTY_RESPONSE_REPLY, Error, PROVIDER_ERROR_REPLY, Result};
pub use transcript::{Speaker, Transcript, Turn, TurnId};
