//! Data models
//!
//! Wire types of the catalog API. JSON field names are camelCase.
//! All IDs are `i64`.

pub mod attribute;
pub mod category;
pub mod product;

// Re-exports
pub use attribute::*;
pub use category::*;
pub use product::*;
