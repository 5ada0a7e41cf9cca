//! HTTP status mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

/// Shown for 400 responses that carry no message of their own
pub const MSG_BAD_REQUEST: &str = "Invalid request.";
/// Shown for 404 responses
pub const MSG_NOT_FOUND: &str = "The requested resource was not found.";
/// Shown for 500 responses
pub const MSG_SERVER_ERROR: &str = "Server error. Please try again later.";
/// Shown for every other failure
pub const MSG_GENERIC: &str = "An error occurred. Please try again.";

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::NotFound
            | Self::ProductNotFound
            | Self::CategoryNotFound
            | Self::AttributeNotFound => StatusCode::NOT_FOUND,

            Self::AlreadyExists | Self::AttributeDuplicateBinding => StatusCode::CONFLICT,

            Self::NotAuthenticated => StatusCode::UNAUTHORIZED,
            Self::PermissionDenied => StatusCode::FORBIDDEN,

            Self::NetworkError | Self::TimeoutError => StatusCode::SERVICE_UNAVAILABLE,

            Self::Unknown
            | Self::InternalError
            | Self::ConfigError
            | Self::InvalidResponse
            | Self::CategoryCycle => StatusCode::INTERNAL_SERVER_ERROR,

            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Classify a non-success HTTP status returned by the catalog API
    pub fn from_http_status(status: StatusCode) -> Self {
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Self::InvalidRequest,
            StatusCode::UNAUTHORIZED => Self::NotAuthenticated,
            StatusCode::FORBIDDEN => Self::PermissionDenied,
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::CONFLICT => Self::AlreadyExists,
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => Self::TimeoutError,
            s if s.is_server_error() => Self::InternalError,
            s if s.is_success() => Self::Success,
            _ => Self::Unknown,
        }
    }
}

/// Central mapping from a failed call to the text shown to the user.
///
/// `status` is `None` when the request never produced a response.
/// Only 400 responses may surface the server's own message.
pub fn user_message(status: Option<StatusCode>, server_message: Option<&str>) -> String {
    match status {
        Some(StatusCode::BAD_REQUEST) => server_message
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(MSG_BAD_REQUEST)
            .to_string(),
        Some(StatusCode::NOT_FOUND) => MSG_NOT_FOUND.to_string(),
        Some(StatusCode::INTERNAL_SERVER_ERROR) => MSG_SERVER_ERROR.to_string(),
        _ => MSG_GENERIC.to_string(),
    }
}
