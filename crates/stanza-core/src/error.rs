use thiserror::Error;

#[derive(Debug, Error)]
pub enum StanzaError {
    /// A required kind-specific field is missing or malformed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Media upload failed: {0}")]
    Upload(String),

    #[error("Content generation failed: {0}")]
    ContentGeneration(String),

    #[error("Relay failed: {0}")]
    Relay(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StanzaError {
    /// Short, stable error code for logs and callers that match on strings.
    pub fn code(&self) -> &'static str {
        match self {
            StanzaError::InvalidInput(_) => "INVALID_INPUT",
            StanzaError::Upload(_) => "UPLOAD_FAILED",
            StanzaError::ContentGeneration(_) => "CONTENT_GENERATION_FAILED",
            StanzaError::Relay(_) => "RELAY_FAILED",
            StanzaError::Config(_) => "CONFIG_ERROR",
            StanzaError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// True when an external collaborator (upload, content generation, relay)
    /// rejected the call, as opposed to a local validation failure.
    pub fn is_collaborator_failure(&self) -> bool {
        match self {
            StanzaError::Upload(_) | StanzaError::ContentGeneration(_) | StanzaError::Relay(_) => {
                true
            }
            _ => false,
        }
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        StanzaError::InvalidInput(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, StanzaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collaborator_failures_keep_their_codes() {
        let relay = StanzaError::Relay("socket closed".into());
        assert_eq!(relay.code(), "RELAY_FAILED");
        assert!(relay.is_collaborator_failure());
        assert_eq!(relay.to_string(), "Relay failed: socket closed");

        let upload = StanzaError::Upload("413".into());
        assert_eq!(upload.code(), "UPLOAD_FAILED");
        assert!(upload.is_collaborator_failure());
    }

    #[test]
    fn invalid_input_is_not_a_collaborator_failure() {
        let err = StanzaError::invalid("missing eventMessage");
        assert_eq!(err.code(), "INVALID_INPUT");
        assert!(!err.is_collaborator_failure());
    }
}
