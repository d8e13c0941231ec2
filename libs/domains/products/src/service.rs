//! Product Service - Business logic layer

use database::DatabaseError;
use database::mongodb::{ListQuery, Page};
use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductOperation, ProductResult};
use crate::models::{CreateProduct, Product, ProductFieldUpdate};
use crate::repository::ProductRepository;

/// Product service providing the use cases behind the HTTP handlers
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a product and return its sequential id.
    ///
    /// The stored record is read back by storage id so the returned id is the
    /// one that was persisted.
    #[instrument(skip(self, input), fields(product_name = %input.product_name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<u32> {
        let oid = self
            .repository
            .create(input)
            .await
            .map_err(|e| e.during(ProductOperation::Create))?;

        let product = self
            .repository
            .get_by_oid(oid)
            .await
            .map_err(|e| e.during(ProductOperation::Create))?
            .ok_or_else(|| {
                ProductError::Database(DatabaseError::Generic(format!(
                    "product {oid} missing after insert"
                )))
                .during(ProductOperation::Create)
            })?;

        Ok(product.id_product)
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self, query: ListQuery) -> ProductResult<Page<Product>> {
        self.repository
            .list(query)
            .await
            .map_err(|e| e.during(ProductOperation::List))
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: u32) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await
            .map_err(|e| e.during(ProductOperation::Get))?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn get_by_seller(&self, seller_id: u32) -> ProductResult<Vec<Product>> {
        self.repository
            .get_by_seller_id(seller_id)
            .await
            .map_err(|e| e.during(ProductOperation::GetBySeller))
    }

    /// Overwrite one field and return the product as stored afterwards
    #[instrument(skip(self))]
    pub async fn update_product_field(
        &self,
        id: u32,
        update: ProductFieldUpdate,
    ) -> ProductResult<Product> {
        let matched = self
            .repository
            .update_field(id, update)
            .await
            .map_err(|e| e.during(ProductOperation::Update))?;

        if !matched {
            return Err(ProductError::NotFound(id));
        }

        self.repository
            .get_by_id(id)
            .await
            .map_err(|e| e.during(ProductOperation::Update))?
            .ok_or(ProductError::NotFound(id))
    }
}
