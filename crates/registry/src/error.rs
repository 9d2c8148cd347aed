//! Registry error types.

use thiserror::Error;

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors that can occur while talking to the delegation registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The registry rejected the delegation request.
    ///
    /// Carries the backend's human-readable message verbatim; the engine
    /// decides what to show when the message is blank.
    #[error("{message}")]
    Rejected { message: String },

    /// The registry could not be reached.
    #[error("registry unavailable: {0}")]
    Unavailable(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RegistryError {
    /// Creates a rejection with the given message.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_displays_message_verbatim() {
        let err = RegistryError::rejected("quota exceeded");
        assert_eq!(err.to_string(), "quota exceeded");
    }

    #[test]
    fn rejected_message_can_be_blank() {
        let err = RegistryError::rejected("");
        assert_eq!(err.to_string(), "");
    }
}
