use super::{ATTRIBUTES, CATEGORY_ATTRIBUTES, CatalogClient};
use crate::{ClientResult, HttpClient};
use shared::models::{Attribute, CategoryAttribute};

/// Attribute definitions and their category links
pub struct AttributeApi<'a, C> {
    client: &'a CatalogClient<C>,
}

impl<'a, C: HttpClient> AttributeApi<'a, C> {
    pub(crate) fn new(client: &'a CatalogClient<C>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ClientResult<Vec<Attribute>> {
        self.client.http().get(ATTRIBUTES).await
    }

    pub async fn create(&self, attribute: &Attribute) -> ClientResult<Attribute> {
        let created: Attribute = self.client.http().post(ATTRIBUTES, attribute).await?;
        tracing::info!(attribute_id = created.id, name = %created.name, "Attribute created");
        Ok(created)
    }

    /// Own attributes of one category, without its ancestors.
    ///
    /// Served from the cache unless `force_refresh` is set or the category
    /// has not been fetched yet. A fetch overwrites the cached entry.
    pub async fn category_attributes(
        &self,
        category_id: i64,
        force_refresh: bool,
    ) -> ClientResult<Vec<CategoryAttribute>> {
        let cache = self.client.cache();
        if !force_refresh {
            if let Some(cached) = cache.get(category_id) {
                tracing::debug!(category_id, "Attribute cache hit");
                return Ok(cached);
            }
        }

        let attributes: Vec<CategoryAttribute> = self
            .client
            .http()
            .get(&format!("{}/category/{}", CATEGORY_ATTRIBUTES, category_id))
            .await?;
        cache.insert(category_id, attributes.clone());
        Ok(attributes)
    }

    /// Link an attribute to a category. Clears the attribute cache on success.
    pub async fn add_category_attribute(
        &self,
        link: &CategoryAttribute,
    ) -> ClientResult<CategoryAttribute> {
        let created: CategoryAttribute =
            self.client.http().post(CATEGORY_ATTRIBUTES, link).await?;
        self.client.cache().clear();
        tracing::info!(
            link_id = created.id,
            category_id = created.category_id,
            attribute_id = created.attribute_id,
            "Attribute linked to category"
        );
        Ok(created)
    }

    /// Remove a category link. Clears the attribute cache on success.
    pub async fn delete_category_attribute(&self, id: i64) -> ClientResult<()> {
        self.client
            .http()
            .delete(&format!("{}/{}", CATEGORY_ATTRIBUTES, id))
            .await?;
        self.client.cache().clear();
        tracing::info!(link_id = id, "Category attribute removed");
        Ok(())
    }
}
