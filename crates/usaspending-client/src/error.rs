//! Error types for the API client

use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API client errors
///
/// Every failure of an endpoint call lands in one of two variants: the
/// request never produced a readable body (`Request`), or the body did not
/// decode into the endpoint's shape (`Decode`). Both carry the name of the
/// operation that failed.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed or the response body could not be read
    #[error("{operation}: HTTP request failed: {source}")]
    Request {
        /// Operation that issued the request
        operation: &'static str,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// Response body could not be decoded into the expected shape
    #[error("{operation}: JSON decode failed (HTTP {status}): {source}")]
    Decode {
        /// Operation that issued the request
        operation: &'static str,
        /// HTTP status code of the undecodable response
        status: u16,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// The HTTP transport could not be built from the configuration
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Wrap a transport error with the operation that caused it
    pub fn request(operation: &'static str, source: reqwest::Error) -> Self {
        Self::Request { operation, source }
    }

    /// Wrap a decode error with the operation and response status
    pub fn decode(operation: &'static str, status: u16, source: serde_json::Error) -> Self {
        Self::Decode {
            operation,
            status,
            source,
        }
    }

    /// Name of the operation that failed, if the error came from a call
    #[must_use]
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Self::Request { operation, .. } | Self::Decode { operation, .. } => Some(*operation),
            Self::Build(_) | Self::Config(_) => None,
        }
    }

    /// HTTP status of the response, when one was received
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { source, .. } => source.status().map(|s| s.as_u16()),
            Self::Decode { status, .. } => Some(*status),
            Self::Build(_) | Self::Config(_) => None,
        }
    }

    /// Check if this is a transport failure
    #[must_use]
    pub fn is_request(&self) -> bool {
        matches!(self, Self::Request { .. })
    }

    /// Check if this is a decode failure
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Check if the transport gave up because of a timeout
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request { source, .. } if source.is_timeout())
    }

    /// Check if the transport could not connect
    #[must_use]
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Request { source, .. } if source.is_connect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{not json").unwrap_err()
    }

    #[test]
    fn test_decode_error_context() {
        let err = ApiError::decode("agency", 502, json_error());

        assert!(err.is_decode());
        assert!(!err.is_request());
        assert!(!err.is_timeout());
        assert_eq!(err.operation(), Some("agency"));
        assert_eq!(err.status(), Some(502));

        let message = err.to_string();
        assert!(message.starts_with("agency: JSON decode failed (HTTP 502)"));
    }

    #[test]
    fn test_decode_error_exposes_source() {
        let err = ApiError::decode("budgetary_resources", 200, json_error());
        let source = err.source().expect("decode error should have a source");
        assert!(source.downcast_ref::<serde_json::Error>().is_some());
    }

    #[test]
    fn test_config_error() {
        let err = ApiError::config("timeout cannot be zero");
        assert_eq!(err.operation(), None);
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "Configuration error: timeout cannot be zero");
    }
}
