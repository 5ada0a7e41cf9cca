//! Client error types

use http::StatusCode;
use shared::error::{AppError, ErrorCategory, ErrorCode, MSG_GENERIC, user_message};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, timeout, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: StatusCode,
        message: Option<String>,
    },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Rejected locally before any request was sent
    #[error("Validation error: {0}")]
    Validation(#[from] AppError),

    /// The parent chain of a category revisits a category
    #[error("Category hierarchy contains a cycle at category {category_id}")]
    CategoryCycle { category_id: i64 },

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Build an error from a failed response
    pub fn from_response(status: StatusCode, message: Option<String>) -> Self {
        Self::Api { status, message }
    }

    /// HTTP status of the failed response, if there was one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Error code describing this failure
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Api { status, .. } => ErrorCode::from_http_status(*status),
            Self::Http(e) if e.is_timeout() => ErrorCode::TimeoutError,
            Self::Http(e) => e
                .status()
                .map(ErrorCode::from_http_status)
                .unwrap_or(ErrorCode::NetworkError),
            Self::InvalidResponse(_) | Self::Serialization(_) => ErrorCode::InvalidResponse,
            Self::Validation(e) => e.code,
            Self::CategoryCycle { .. } => ErrorCode::CategoryCycle,
            Self::Config(_) => ErrorCode::ConfigError,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.code().category()
    }

    /// Text to show the user for this failure
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { status, message } => user_message(Some(*status), message.as_deref()),
            Self::Http(e) => user_message(e.status(), None),
            Self::Validation(e) => e.message.clone(),
            Self::CategoryCycle { .. } => self.to_string(),
            Self::Config(msg) => msg.clone(),
            Self::InvalidResponse(_) | Self::Serialization(_) => MSG_GENERIC.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
