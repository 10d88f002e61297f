//! Error types for the Inventaris dashboard client

use serde::Deserialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// The request never produced a response (connection refused, timeout, DNS...).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a status outside 2xx.
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] validator::ValidationErrors),

    #[error("Unexpected response body: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error body convention of the backend: `{ "error": "<message>" }`
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}

impl AppError {
    /// Build an HTTP failure from a status code and the raw response body.
    ///
    /// The body is only a best-effort source for the message: anything that is not
    /// a JSON object with a string `error` field falls back to `HTTP error <status>`.
    pub fn from_http(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP error {}", status));

        AppError::Http { status, message }
    }

    /// HTTP status carried by the error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_network(&self) -> bool {
        matches!(self, AppError::Network(_))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_uses_error_field() {
        let err = AppError::from_http(404, br#"{"error":"not found"}"#);
        assert_eq!(err.to_string(), "not found");
        assert_eq!(err.status(), Some(404));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_http_error_fallback_message() {
        let err = AppError::from_http(500, b"<html>oops</html>");
        assert_eq!(err.to_string(), "HTTP error 500");

        let err = AppError::from_http(422, br#"{"message":"bad"}"#);
        assert_eq!(err.to_string(), "HTTP error 422");

        let err = AppError::from_http(502, b"");
        assert_eq!(err.to_string(), "HTTP error 502");
    }

    #[test]
    fn test_network_error_has_no_status() {
        let err = AppError::Network("connection refused".to_string());
        assert_eq!(err.status(), None);
        assert!(err.is_network());
    }
}
