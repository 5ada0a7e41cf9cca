use super::{CATEGORIES, CatalogClient};
use crate::{ClientResult, HttpClient};
use shared::models::{Category, CategoryDto, CategoryTreeNode};

/// Category endpoints
pub struct CategoryApi<'a, C> {
    client: &'a CatalogClient<C>,
}

impl<'a, C: HttpClient> CategoryApi<'a, C> {
    pub(crate) fn new(client: &'a CatalogClient<C>) -> Self {
        Self { client }
    }

    /// `GET /categories/tree`
    pub async fn tree(&self) -> ClientResult<Vec<CategoryTreeNode>> {
        self.client.http().get(&format!("{}/tree", CATEGORIES)).await
    }

    /// `GET /categories/{id}`
    pub async fn get(&self, id: i64) -> ClientResult<Category> {
        self.client.http().get(&format!("{}/{}", CATEGORIES, id)).await
    }

    /// One level of children, for lazy tree expansion
    pub async fn children(&self, id: i64) -> ClientResult<Vec<CategoryTreeNode>> {
        self.client
            .http()
            .get(&format!("{}/{}/children", CATEGORIES, id))
            .await
    }

    pub async fn create(&self, dto: &CategoryDto) -> ClientResult<Category> {
        let category: Category = self.client.http().post(CATEGORIES, dto).await?;
        tracing::info!(category_id = category.id, name = %category.name, "Category created");
        Ok(category)
    }

    pub async fn update(&self, id: i64, dto: &CategoryDto) -> ClientResult<Category> {
        let category: Category = self
            .client
            .http()
            .put(&format!("{}/{}", CATEGORIES, id), dto)
            .await?;
        tracing::info!(category_id = id, "Category updated");
        Ok(category)
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.client
            .http()
            .delete(&format!("{}/{}", CATEGORIES, id))
            .await?;
        tracing::info!(category_id = id, "Category deleted");
        Ok(())
    }
}
