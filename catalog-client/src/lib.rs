//! Catalog Client - typed client for the catalog REST API
//!
//! Provides the HTTP transport, API services for categories, attributes and
//! products, the inherited attribute resolver and form drafts.

pub mod api;
pub mod cache;
pub mod config;
pub mod draft;
pub mod error;
pub mod http;
pub mod resolver;

pub use api::{AttributeApi, CatalogClient, CategoryApi, ProductApi};
pub use cache::AttributeCache;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use resolver::InheritedAttributeResolver;

// Re-export shared types for convenience
pub use shared::models::{
    Attribute, AttributeType, Category, CategoryAttribute, CategoryDto, CategoryTreeNode, Product,
    ProductCondition, ProductDto,
};
