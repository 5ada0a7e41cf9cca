//! Typed services over the catalog REST API
//!
//! [`CatalogClient`] owns the transport and the per-category attribute cache.
//! The service views borrow it, so every view shares one cache.

mod attribute;
mod category;
mod product;

pub use attribute::AttributeApi;
pub use category::CategoryApi;
pub use product::ProductApi;

use crate::cache::AttributeCache;
use crate::http::{HttpClient, NetworkHttpClient};
use crate::resolver::InheritedAttributeResolver;
use crate::{ClientConfig, ClientResult};

pub(crate) const CATEGORIES: &str = "categories";
pub(crate) const ATTRIBUTES: &str = "attributes";
pub(crate) const CATEGORY_ATTRIBUTES: &str = "category-attributes";
pub(crate) const PRODUCTS: &str = "products";

/// Entry point for every catalog call
#[derive(Debug)]
pub struct CatalogClient<C = NetworkHttpClient> {
    http: C,
    cache: AttributeCache,
}

impl CatalogClient<NetworkHttpClient> {
    /// Build a network client from configuration
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(NetworkHttpClient::new(config)?))
    }
}

impl<C: HttpClient> CatalogClient<C> {
    pub fn new(http: C) -> Self {
        Self {
            http,
            cache: AttributeCache::new(),
        }
    }

    /// Underlying transport
    pub fn http(&self) -> &C {
        &self.http
    }

    pub fn cache(&self) -> &AttributeCache {
        &self.cache
    }

    pub fn categories(&self) -> CategoryApi<'_, C> {
        CategoryApi::new(self)
    }

    pub fn attributes(&self) -> AttributeApi<'_, C> {
        AttributeApi::new(self)
    }

    pub fn products(&self) -> ProductApi<'_, C> {
        ProductApi::new(self)
    }

    /// Resolver for own plus inherited attributes
    pub fn resolver(&self) -> InheritedAttributeResolver<'_, C> {
        InheritedAttributeResolver::new(self)
    }
}
