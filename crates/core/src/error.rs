use thiserror::Error;

/// Result type alias for xofa-core
pub type Result<T> = std::result::Result<T, Error>;

/// Reply appended when any provider call fails for a reason other than a missing credential
pub const PROVIDER_ERROR_REPLY: &str = "I am sorry, I encountered an error. Please check your connection and try again.";

/// Reply substituted when the provider answers without any text
pub const EMPTY_RESPONSE_REPLY: &str = "I apologize, I could not generate a response. Please try again.";

/// Core error types for Xofa
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error for file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Provider errors
    #[error("provider error: {0}")]
    Provider(String),

    /// Parse/serialization errors
    #[error("parse error: {0}")]
    Parse(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Failure of a single completion call
///
/// Exactly two kinds are visible to the user. Everything that is not a
/// missing credential collapses into [`CompletionError::Provider`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompletionError {
    /// No API key was found in the environment when the call was made
    #[error("no API key configured (expected in ${var})")]
    MissingCredential { var: String },

    /// Transport, status or response-shape failure from the provider
    #[error("provider error: {0}")]
    Provider(String),
}

impl CompletionError {
    pub fn missing_credential(var: impl Into<String>) -> Self {
        Self::MissingCredential { var: var.into() }
    }

    pub fn is_missing_credential(&self) -> bool {
        matches!(self, Self::MissingCredential { .. })
    }

    /// Text shown to the user as the model's reply for this failure
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingCredential { var } => format!(
                "I cannot answer yet because no API key is configured. Please set the {} environment variable and restart Xofa.",
                var
            ),
            Self::Provider(_) => PROVIDER_ERROR_REPLY.to_string(),
        }
    }
}

impl From<Error> for CompletionError {
    fn from(err: Error) -> Self {
        match err {
            Error::Provider(detail) => CompletionError::Provider(detail),
            other => CompletionError::Provider(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Config("bad value".to_string());
        assert_eq!(err.to_string(), "configuration error: bad value");

        let err = Error::Provider("503".to_string());
        assert_eq!(err.to_string(), "provider error: 503");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_missing_credential_message_names_variable() {
        let err = CompletionError::missing_credential("GEMINI_API_KEY");
        assert!(err.is_missing_credential());

        let message = err.user_message();
        assert!(message.contains("GEMINI_API_KEY"));
        assert_ne!(message, PROVIDER_ERROR_REPLY);
    }

    #[test]
    fn test_provider_error_message_is_generic_apology() {
        let err = CompletionError::Provider("connection reset".to_string());
        assert!(!err.is_missing_credential());
        assert_eq!(err.user_message(), PROVIDER_ERROR_REPLY);
    }

    #[test]
    fn test_core_error_collapses_into_provider_failure() {
        let err: CompletionError = Error::Provider("HTTP 500".to_string()).into();
        assert_eq!(err, CompletionError::Provider("HTTP 500".to_string()));

        let err: CompletionError = Error::Parse("unexpected token".to_string()).into();
        assert_eq!(err, CompletionError::Provider("parse error: unexpected token".to_string()));
    }
}
