use super::{CatalogClient, PRODUCTS};
use crate::{ClientResult, HttpClient};
use shared::models::{CategoryAttribute, Product, ProductDto};

/// Product endpoints
pub struct ProductApi<'a, C> {
    client: &'a CatalogClient<C>,
}

impl<'a, C: HttpClient> ProductApi<'a, C> {
    pub(crate) fn new(client: &'a CatalogClient<C>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ClientResult<Vec<Product>> {
        self.client.http().get(PRODUCTS).await
    }

    /// `GET /products/search?term=`
    pub async fn search(&self, term: &str) -> ClientResult<Vec<Product>> {
        self.client
            .http()
            .get_with_query(&format!("{}/search", PRODUCTS), &[("term", term)])
            .await
    }

    pub async fn create(&self, dto: &ProductDto) -> ClientResult<Product> {
        let product: Product = self.client.http().post(PRODUCTS, dto).await?;
        tracing::info!(product_id = product.id, title = %product.title, "Product created");
        Ok(product)
    }

    pub async fn update(&self, id: i64, dto: &ProductDto) -> ClientResult<Product> {
        let product: Product = self
            .client
            .http()
            .put(&format!("{}/{}", PRODUCTS, id), dto)
            .await?;
        tracing::info!(product_id = id, "Product updated");
        Ok(product)
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.client
            .http()
            .delete(&format!("{}/{}", PRODUCTS, id))
            .await?;
        tracing::info!(product_id = id, "Product deleted");
        Ok(())
    }

    /// Attributes a product in `category_id` carries values for: the
    /// category's own attributes followed by every ancestor's.
    pub async fn available_attributes(
        &self,
        category_id: i64,
    ) -> ClientResult<Vec<CategoryAttribute>> {
        self.client.resolver().resolve(category_id).await
    }
}
