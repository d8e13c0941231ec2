//! Product Categories Domain
//!
//! Categories carry a sequential `category_id` handed out by the shared
//! counter allocator, a name, and their MongoDB `_id` exposed as `OID`.
//!
//! ```text
//! handlers ──► ProductCategoryService ──► ProductCategoryRepository
//!                                              │
//!                                              ▼
//!                              MongoProductCategoryRepository
//!                           (product_category + counters collections)
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_product_categories::{
//!     MongoProductCategoryRepository, ProductCategoryService, handlers,
//! };
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = mongodb::Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("catalog");
//!
//! let repository = MongoProductCategoryRepository::new(&db, Duration::from_secs(5));
//! repository.init_indexes().await?;
//!
//! let router = axum::Router::new().nest(
//!     "/product_category",
//!     handlers::router(ProductCategoryService::new(repository)),
//! );
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{CategoryOperation, ProductCategoryError, ProductCategoryResult};
pub use handlers::ApiDoc;
pub use models::{
    CategoryCreated, CategoryListResponse, CategoryResponse, CreateProductCategory,
    ProductCategory, ProductCategoryListParams, UpdateProductCategory,
};
pub use mongodb::MongoProductCategoryRepository;
pub use repository::ProductCategoryRepository;
pub use service::ProductCategoryService;
