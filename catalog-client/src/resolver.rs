//! Inherited attribute resolution
//!
//! A category carries its own attribute links plus every link of its
//! ancestors. The resolver walks the parent chain one request at a time,
//! nearest category first, and tags each link with `inherited` relative to
//! the category the walk started from:
//!
//! ```text
//! Shoes (own: Size)          -> Size      inherited = true
//!   └─ Sneakers (own: Sole)  -> Sole      inherited = false   <- resolve(Sneakers)
//! ```
//!
//! Result order is the starting category's links, then the parent's, up to
//! the root's. Links with equal names are kept side by side. Any failed
//! request fails the whole resolution.

use crate::api::CatalogClient;
use crate::{ClientError, ClientResult, HttpClient};
use shared::models::CategoryAttribute;
use std::collections::HashSet;

pub struct InheritedAttributeResolver<'a, C> {
    client: &'a CatalogClient<C>,
}

impl<'a, C: HttpClient> InheritedAttributeResolver<'a, C> {
    pub(crate) fn new(client: &'a CatalogClient<C>) -> Self {
        Self { client }
    }

    /// Own plus inherited attributes of `category_id`
    pub async fn resolve(&self, category_id: i64) -> ClientResult<Vec<CategoryAttribute>> {
        self.walk(category_id, Vec::new(), false).await
    }

    /// Continue a resolution on top of already collected links.
    ///
    /// With a non-empty `collected`, `category_id` is taken to be an ancestor
    /// of whatever produced those links, so its own links count as inherited.
    pub async fn resolve_with(
        &self,
        category_id: i64,
        collected: Vec<CategoryAttribute>,
    ) -> ClientResult<Vec<CategoryAttribute>> {
        let seeded = !collected.is_empty();
        self.walk(category_id, collected, seeded).await
    }

    /// Links a new child of `parent_id` would inherit, all tagged inherited.
    /// No parent means nothing to inherit.
    pub async fn inherited_from(
        &self,
        parent_id: Option<i64>,
    ) -> ClientResult<Vec<CategoryAttribute>> {
        match parent_id.filter(|id| *id > 0) {
            Some(id) => self.walk(id, Vec::new(), true).await,
            None => Ok(Vec::new()),
        }
    }

    async fn walk(
        &self,
        start: i64,
        mut collected: Vec<CategoryAttribute>,
        start_inherited: bool,
    ) -> ClientResult<Vec<CategoryAttribute>> {
        let mut visited = HashSet::new();
        let mut next = Some(start);
        let mut inherited = start_inherited;

        while let Some(category_id) = next {
            if !visited.insert(category_id) {
                tracing::warn!(category_id, start, "Cycle in category parent chain");
                return Err(ClientError::CategoryCycle { category_id });
            }

            let category = self.client.categories().get(category_id).await?;
            let own = self
                .client
                .attributes()
                .category_attributes(category_id, false)
                .await?;
            tracing::debug!(category_id, count = own.len(), inherited, "Collected attributes");

            collected.extend(own.into_iter().map(|mut attr| {
                attr.inherited = inherited;
                attr
            }));

            next = category.parent_id.filter(|id| *id > 0);
            inherited = true;
        }

        Ok(collected)
    }
}
