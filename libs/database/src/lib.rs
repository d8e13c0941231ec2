//! Shared persistence plumbing for the catalog services.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB connector, health checks, sequence
//!   allocation and list-query construction
//! - `config` - `core_config::FromEnv` support for [`mongodb::MongoConfig`]
//! - `all` - everything above
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{self, ListQuery, MongoSequenceAllocator};
//!
//! let client = mongodb::connect("mongodb://localhost:27017").await?;
//! let db = client.database("catalog");
//!
//! let ids = MongoSequenceAllocator::new(&db, Duration::from_secs(5));
//! let next = ids.next("product", "id_product").await?;
//!
//! let query = ListQuery::parse(Some("phone"), Some("1"), Some("20"));
//! let page = mongodb::find_page(&collection, &query, "product_name").await?;
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{DatabaseError, DatabaseResult};
