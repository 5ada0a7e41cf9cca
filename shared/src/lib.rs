//! Shared types for the catalog tools
//!
//! Wire models of the catalog API, the error-code system and pure
//! category-tree helpers. Nothing in here performs I/O.

pub mod error;
pub mod models;
pub mod tree;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{
    Attribute, AttributeType, Category, CategoryAttribute, CategoryDto, CategoryNodeData,
    CategoryTreeNode, Product, ProductAttributeValue, ProductAttributeValueDto, ProductCondition,
    ProductDto,
};
pub use tree::flatten_categories;
