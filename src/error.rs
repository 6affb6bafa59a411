use thiserror::Error;

/// Main error type for the planner
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Location check failed: {0}")]
    LocationCheck(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid trip request: {0}")]
    InvalidRequest(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    /// Check whether a manual resubmission could plausibly succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            PlannerError::Generation(_) => true,
            PlannerError::LocationCheck(_) => true,
            PlannerError::Config(_) => false,
            PlannerError::Serialization(_) => false,
            PlannerError::InvalidRequest(_) => false,
        }
    }

    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            PlannerError::Config(_) => "CONFIG_ERROR",
            PlannerError::Generation(_) => "GENERATION_FAILURE",
            PlannerError::LocationCheck(_) => "LOCATION_CHECK_FAILURE",
            PlannerError::Serialization(_) => "SERIALIZATION_ERROR",
            PlannerError::InvalidRequest(_) => "INVALID_REQUEST",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "retryable": self.is_retryable()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            PlannerError::Config("missing key".into()).error_code(),
            "CONFIG_ERROR"
        );
        assert_eq!(
            PlannerError::Generation("bad response".into()).error_code(),
            "GENERATION_FAILURE"
        );
        assert_eq!(
            PlannerError::LocationCheck("timeout".into()).error_code(),
            "LOCATION_CHECK_FAILURE"
        );
    }

    #[test]
    fn test_retryable_classification() {
        assert!(PlannerError::Generation("overloaded".into()).is_retryable());
        assert!(!PlannerError::Config("no API key".into()).is_retryable());
        assert!(!PlannerError::InvalidRequest("empty destination".into()).is_retryable());
    }

    #[test]
    fn test_error_payload_shape() {
        let payload = PlannerError::Generation("model returned garbage".into()).to_error_payload();
        assert_eq!(payload["error"]["code"], "GENERATION_FAILURE");
        assert_eq!(payload["error"]["retryable"], true);
    }
}
