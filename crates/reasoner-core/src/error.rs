//! Error Types

use thiserror::Error;

/// Result type alias for reasoner operations
pub type Result<T> = std::result::Result<T, ReasonerError>;

/// Reasoner error types
#[derive(Error, Debug)]
pub enum ReasonerError {
    /// LLM provider error
    #[error("Provider error: {0}")]
    Provider(String),

    /// Provider unavailable or not responding
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Strategy identifier not part of the closed strategy set
    #[error("Unknown reasoning strategy: {0}")]
    UnknownStrategy(String),

    /// Session used in a way its phase does not allow
    #[error("Session error: {0}")]
    Session(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rate limited
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other/unknown error
    #[error("{0}")]
    Other(String),
}

impl ReasonerError {
    /// Check if error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ReasonerError::ProviderUnavailable(_)
                | ReasonerError::RateLimited(_)
                | ReasonerError::Io(_)
        )
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            ReasonerError::Provider(msg) => {
                format!("The AI service encountered an error: {}", msg)
            }
            ReasonerError::ProviderUnavailable(_) => {
                "The AI service is currently unavailable. Please try again.".into()
            }
            ReasonerError::UnknownStrategy(name) => {
                format!("'{}' is not a recognized reasoning strategy.", name)
            }
            ReasonerError::RateLimited(_) => {
                "You've made too many requests. Please wait a moment.".into()
            }
            _ => "An unexpected error occurred.".into(),
        }
    }
}

impl From<anyhow::Error> for ReasonerError {
    fn from(err: anyhow::Error) -> Self {
        ReasonerError::Other(err.to_string())
    }
}
