//! Unified error system for the catalog tools
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`ErrorCategory`]: Validation / request / server / network classification
//! - [`AppError`]: Error with code, message and details
//! - [`user_message`]: the single place HTTP failures become user-facing text
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorCategory};
//!
//! let err = AppError::validation("Category name is required")
//!     .with_detail("field", "name");
//! assert_eq!(err.code.category(), ErrorCategory::Validation);
//!
//! let err = AppError::new(ErrorCode::CategoryNotFound);
//! assert_eq!(err.http_status().as_u16(), 404);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use self::http::{MSG_BAD_REQUEST, MSG_GENERIC, MSG_NOT_FOUND, MSG_SERVER_ERROR, user_message};
pub use types::{ApiErrorBody, AppError, AppResult};
