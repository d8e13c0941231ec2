//! Product category service

use database::mongodb::{ListQuery, Page};
use std::sync::Arc;
use tracing::instrument;

use crate::error::{CategoryOperation, ProductCategoryError, ProductCategoryResult};
use crate::models::{CreateProductCategory, ProductCategory, UpdateProductCategory};
use crate::repository::ProductCategoryRepository;

pub struct ProductCategoryService<R: ProductCategoryRepository> {
    repository: Arc<R>,
}

impl<R: ProductCategoryRepository> ProductCategoryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a category and return its allocated id
    #[instrument(skip(self, input))]
    pub async fn create_category(&self, input: CreateProductCategory) -> ProductCategoryResult<u32> {
        self.repository
            .create(input)
            .await
            .map_err(|e| e.during(CategoryOperation::Create))
    }

    #[instrument(skip(self))]
    pub async fn list_categories(
        &self,
        query: ListQuery,
    ) -> ProductCategoryResult<Page<ProductCategory>> {
        self.repository
            .list(query)
            .await
            .map_err(|e| e.during(CategoryOperation::List))
    }

    #[instrument(skip(self))]
    pub async fn get_category(&self, id: u32) -> ProductCategoryResult<ProductCategory> {
        self.repository
            .get_by_id(id)
            .await
            .map_err(|e| e.during(CategoryOperation::Get))?
            .ok_or(ProductCategoryError::NotFound(id))
    }

    /// Rename a category and return the stored record
    #[instrument(skip(self, input))]
    pub async fn update_category(
        &self,
        id: u32,
        input: UpdateProductCategory,
    ) -> ProductCategoryResult<ProductCategory> {
        self.repository
            .update_name(id, input.category_name)
            .await
            .map_err(|e| e.during(CategoryOperation::Update))?
            .ok_or(ProductCategoryError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: u32) -> ProductCategoryResult<()> {
        self.repository
            .delete(id)
            .await
            .map_err(|e| e.during(CategoryOperation::Delete))
    }
}
