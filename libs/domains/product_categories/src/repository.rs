use async_trait::async_trait;
use database::mongodb::{ListQuery, Page};

use crate::error::ProductCategoryResult;
use crate::models::{CreateProductCategory, ProductCategory};

/// Persistence for product categories
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductCategoryRepository: Send + Sync {
    /// Store a new category under a freshly allocated id and return that id
    async fn create(&self, input: CreateProductCategory) -> ProductCategoryResult<u32>;

    async fn list(&self, query: ListQuery) -> ProductCategoryResult<Page<ProductCategory>>;

    async fn get_by_id(&self, id: u32) -> ProductCategoryResult<Option<ProductCategory>>;

    /// Overwrite the name and return the record as stored afterwards.
    /// `None` when no category has this id.
    async fn update_name(
        &self,
        id: u32,
        category_name: String,
    ) -> ProductCategoryResult<Option<ProductCategory>>;

    /// Hard delete. Fails with `NoDocumentsDeleted` when nothing matched.
    async fn delete(&self, id: u32) -> ProductCategoryResult<()>;
}
