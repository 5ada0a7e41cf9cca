//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// How a failure came about, from the user's point of view
///
/// - Validation: caught locally before any request was sent
/// - Request: the server rejected the request (4xx)
/// - Server: the server failed (5xx)
/// - Network: transport failure, timeout or anything unclassified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    Validation,
    Request,
    Server,
    Network,
}

impl ErrorCode {
    /// Category of this error code
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ValidationFailed
            | Self::RequiredField
            | Self::ValueOutOfRange
            | Self::CategoryParentInvalid
            | Self::AttributeDuplicateBinding
            | Self::AttributeValueRequired => ErrorCategory::Validation,

            Self::InternalError | Self::InvalidResponse | Self::CategoryCycle => {
                ErrorCategory::Server
            }

            Self::Unknown | Self::NetworkError | Self::TimeoutError | Self::ConfigError => {
                ErrorCategory::Network
            }

            _ => ErrorCategory::Request,
        }
    }
}
