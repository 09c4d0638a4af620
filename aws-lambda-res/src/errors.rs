use thiserror::Error;

/// Unified error type for response construction
#[derive(Error, Debug)]
pub enum ResponseError {
    // Body errors
    #[error("Failed to serialize response body: {0}")]
    BodySerialization(#[from] serde_json::Error),

    // Header errors
    #[error("Invalid header name: {0}")]
    InvalidHeaderName(String),
    #[error("Invalid header value for {0}")]
    InvalidHeaderValue(String),
}

impl ResponseError {
    /// Get user-friendly error message
    pub fn user_message(&self) -> &'static str {
        match self {
            ResponseError::BodySerialization(_) => "Response body could not be serialized",
            ResponseError::InvalidHeaderName(_) => "Response header name is not a valid HTTP token",
            ResponseError::InvalidHeaderValue(_) => "Response header value contains invalid bytes",
        }
    }
}

/// Result type for response operations
pub type ResponseResult<T> = Result<T, ResponseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_serialization_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: ResponseError = json_err.into();
        assert!(matches!(err, ResponseError::BodySerialization(_)));
        assert_eq!(err.user_message(), "Response body could not be serialized");
    }
}
