//! MongoDB implementation of ProductCategoryRepository

use async_trait::async_trait;
use database::common::with_timeout;
use database::mongodb::{ListQuery, MongoSequenceAllocator, Page, SequenceAllocator, find_page};
use mongodb::{
    Collection, Database, IndexModel,
    bson::{doc, oid::ObjectId},
    options::{IndexOptions, ReturnDocument},
};
use std::future::IntoFuture;
use std::time::Duration;
use tracing::instrument;

use crate::error::{ProductCategoryError, ProductCategoryResult};
use crate::models::{CategoryDocument, CreateProductCategory, ProductCategory};
use crate::repository::ProductCategoryRepository;

/// Collection holding category records
pub const COLLECTION: &str = "product_category";

/// Counter bucket field for category ids
pub const ID_FIELD: &str = "id_product_category";

const SEARCH_FIELD: &str = "category_name";

#[derive(Clone)]
pub struct MongoProductCategoryRepository {
    collection: Collection<CategoryDocument>,
    allocator: MongoSequenceAllocator,
    timeout: Duration,
}

impl MongoProductCategoryRepository {
    /// Every storage call, id allocation included, is bounded by `timeout`.
    pub fn new(db: &Database, timeout: Duration) -> Self {
        Self {
            collection: db.collection(COLLECTION),
            allocator: MongoSequenceAllocator::new(db, timeout),
            timeout,
        }
    }

    pub async fn init_indexes(&self) -> ProductCategoryResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "category_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("idx_category_id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(index).await?;
        tracing::info!("Product category indexes created successfully");
        Ok(())
    }

    async fn bounded<T, F>(&self, operation: F) -> ProductCategoryResult<T>
    where
        F: IntoFuture<Output = Result<T, mongodb::error::Error>>,
    {
        with_timeout(self.timeout, async {
            operation.await.map_err(ProductCategoryError::from)
        })
        .await
    }
}

#[async_trait]
impl ProductCategoryRepository for MongoProductCategoryRepository {
    #[instrument(skip(self, input), fields(category_name = %input.category_name))]
    async fn create(&self, input: CreateProductCategory) -> ProductCategoryResult<u32> {
        let category_id = self.allocator.next(COLLECTION, ID_FIELD).await?;

        let document = CategoryDocument {
            id: ObjectId::new(),
            category_id,
            category_name: input.category_name,
        };
        self.bounded(self.collection.insert_one(&document)).await?;

        tracing::info!(category_id, "Product category created successfully");
        Ok(category_id)
    }

    #[instrument(skip(self))]
    async fn list(&self, query: ListQuery) -> ProductCategoryResult<Page<ProductCategory>> {
        let page = self
            .bounded(find_page(&self.collection, &query, SEARCH_FIELD))
            .await?;
        Ok(page.map(ProductCategory::from))
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: u32) -> ProductCategoryResult<Option<ProductCategory>> {
        let found = self
            .bounded(self.collection.find_one(doc! { "category_id": id }))
            .await?;
        Ok(found.map(ProductCategory::from))
    }

    #[instrument(skip(self))]
    async fn update_name(
        &self,
        id: u32,
        category_name: String,
    ) -> ProductCategoryResult<Option<ProductCategory>> {
        let updated = self
            .bounded(
                self.collection
                    .find_one_and_update(
                        doc! { "category_id": id },
                        doc! { "$set": { "category_name": category_name } },
                    )
                    .return_document(ReturnDocument::After),
            )
            .await?;

        if updated.is_some() {
            tracing::info!(category_id = id, "Product category updated successfully");
        }
        Ok(updated.map(ProductCategory::from))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: u32) -> ProductCategoryResult<()> {
        let result = self
            .bounded(self.collection.delete_one(doc! { "category_id": id }))
            .await?;

        if result.deleted_count == 0 {
            return Err(ProductCategoryError::NoDocumentsDeleted(id));
        }

        tracing::info!(category_id = id, "Product category deleted successfully");
        Ok(())
    }
}
