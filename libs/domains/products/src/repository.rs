use async_trait::async_trait;
use database::mongodb::{ListQuery, Page};
use mongodb::bson::oid::ObjectId;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ProductFieldUpdate};

/// Repository trait for Product persistence
///
/// Products are addressed by their sequential `id_product`; the storage
/// `ObjectId` is only used to read back a freshly inserted record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Store a new product under a freshly allocated id.
    /// Returns the storage id of the inserted record.
    async fn create(&self, input: CreateProduct) -> ProductResult<ObjectId>;

    /// Page of products matching `query`, plus the unpaginated total
    async fn list(&self, query: ListQuery) -> ProductResult<Page<Product>>;

    async fn get_by_id(&self, id: u32) -> ProductResult<Option<Product>>;

    /// Every product of a seller; empty when there are none
    async fn get_by_seller_id(&self, seller_id: u32) -> ProductResult<Vec<Product>>;

    async fn get_by_oid(&self, oid: ObjectId) -> ProductResult<Option<Product>>;

    /// Overwrite one field. Returns whether a product with `id` exists.
    async fn update_field(&self, id: u32, update: ProductFieldUpdate) -> ProductResult<bool>;
}
