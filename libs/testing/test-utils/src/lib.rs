//! Shared test utilities for the catalog crates
//!
//! - `TestMongo`: MongoDB container with automatic cleanup (feature: "mongodb")
//! - `TestDataBuilder`: deterministic test data
//! - `assertions`: assertion helpers
//!
//! ```rust,ignore
//! use test_utils::{TestDataBuilder, TestMongo};
//!
//! #[tokio::test]
//! async fn lists_products() {
//!     let mongo = TestMongo::new().await;
//!     let db = mongo.database("lists_products");
//!     let builder = TestDataBuilder::from_test_name("lists_products");
//!
//!     let seller = builder.seller_id();
//!     let name = builder.name("product", "lamp");
//! }
//! ```

#[cfg(feature = "mongodb")]
mod mongo;

#[cfg(feature = "mongodb")]
pub use mongo::TestMongo;

/// Seeded generator so data differs between tests but not between runs.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from the test's name.
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Seller id in `1..=100_000`
    pub fn seller_id(&self) -> u32 {
        (self.seed % 100_000) as u32 + 1
    }

    /// Unique database name, safe for MongoDB's 63-byte limit.
    pub fn database_name(&self) -> String {
        format!("test_{:x}", self.seed)
    }

    /// `test-<prefix>-<seed>-<suffix>`
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }
}

pub mod assertions {
    /// Unwrap `value` or panic with `context`.
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert `ids` is exactly `1..=ids.len()` in any order.
    pub fn assert_dense_sequence(ids: &[u32], context: &str) {
        let mut sorted = ids.to_vec();
        sorted.sort_unstable();
        let expected: Vec<u32> = (1..=ids.len() as u32).collect();
        assert_eq!(sorted, expected, "{}: ids are not exactly 1..=N", context);
    }
}
