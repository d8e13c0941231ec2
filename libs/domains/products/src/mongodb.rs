//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use database::common::with_timeout;
use database::mongodb::{ListQuery, MongoSequenceAllocator, Page, SequenceAllocator, find_page};
use futures::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
};
use std::future::IntoFuture;
use std::time::Duration;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductDocument, ProductFieldUpdate};
use crate::repository::ProductRepository;

/// Collection holding product records
pub const COLLECTION: &str = "product";

/// Counter bucket field for product ids
pub const ID_FIELD: &str = "id_product";

const SEARCH_FIELD: &str = "product_name";

/// MongoDB implementation of the ProductRepository
#[derive(Clone)]
pub struct MongoProductRepository {
    collection: Collection<ProductDocument>,
    allocator: MongoSequenceAllocator,
    timeout: Duration,
}

impl MongoProductRepository {
    /// Every storage call, id allocation included, is bounded by `timeout`.
    pub fn new(db: &Database, timeout: Duration) -> Self {
        Self {
            collection: db.collection(COLLECTION),
            allocator: MongoSequenceAllocator::new(db, timeout),
            timeout,
        }
    }

    /// Initialize indexes for lookups by id, seller and category
    pub async fn init_indexes(&self) -> ProductResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "id_product": 1 })
                .options(
                    IndexOptions::builder()
                        .unique(true)
                        .name("idx_id_product_unique".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "id_seller": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_id_seller".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "product_category_id": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_product_category_id".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Product indexes created successfully");
        Ok(())
    }

    async fn bounded<T, F>(&self, operation: F) -> ProductResult<T>
    where
        F: IntoFuture<Output = Result<T, mongodb::error::Error>>,
    {
        with_timeout(self.timeout, async {
            operation.await.map_err(ProductError::from)
        })
        .await
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, input), fields(product_name = %input.product_name))]
    async fn create(&self, input: CreateProduct) -> ProductResult<ObjectId> {
        let id_product = self.allocator.next(COLLECTION, ID_FIELD).await?;

        let document = ProductDocument::new(id_product, input);
        self.bounded(self.collection.insert_one(&document)).await?;

        tracing::info!(product_id = id_product, "Product created successfully");
        Ok(document.id)
    }

    #[instrument(skip(self))]
    async fn list(&self, query: ListQuery) -> ProductResult<Page<Product>> {
        let page = self
            .bounded(find_page(&self.collection, &query, SEARCH_FIELD))
            .await?;
        Ok(page.map(Product::from))
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: u32) -> ProductResult<Option<Product>> {
        let found = self
            .bounded(self.collection.find_one(doc! { "id_product": id }))
            .await?;
        Ok(found.map(Product::from))
    }

    #[instrument(skip(self))]
    async fn get_by_seller_id(&self, seller_id: u32) -> ProductResult<Vec<Product>> {
        let documents: Vec<ProductDocument> = self
            .bounded(async {
                self.collection
                    .find(doc! { "id_seller": seller_id })
                    .sort(doc! { "id_product": 1 })
                    .await?
                    .try_collect()
                    .await
            })
            .await?;
        Ok(documents.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self))]
    async fn get_by_oid(&self, oid: ObjectId) -> ProductResult<Option<Product>> {
        let found = self
            .bounded(self.collection.find_one(doc! { "_id": oid }))
            .await?;
        Ok(found.map(Product::from))
    }

    #[instrument(skip(self))]
    async fn update_field(&self, id: u32, update: ProductFieldUpdate) -> ProductResult<bool> {
        let result = self
            .bounded(self.collection.update_one(
                doc! { "id_product": id },
                doc! { "$set": { update.field(): update.value() } },
            ))
            .await?;

        let matched = result.matched_count > 0;
        if matched {
            tracing::info!(product_id = id, field = update.field(), "Product updated successfully");
        }
        Ok(matched)
    }
}
