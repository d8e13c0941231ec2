//! Sequential numeric identifiers backed by a `counters` collection.
//!
//! Each bucket is one `(collection, field)` pair stored as a single
//! document keyed by `"<collection>.<field>"`. Allocation is one atomic
//! `findOneAndUpdate` with `$inc` and `upsert`, so concurrent callers on the
//! same bucket never observe the same value.

use async_trait::async_trait;
use mongodb::{
    Collection, Database,
    bson::doc,
    options::ReturnDocument,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::instrument;

use crate::common::{DatabaseError, DatabaseResult, with_timeout};

/// Collection holding one document per bucket
pub const COUNTERS_COLLECTION: &str = "counters";

/// Hands out increasing identifiers per `(collection, field)` bucket.
#[async_trait]
pub trait SequenceAllocator: Send + Sync {
    /// Next value for the bucket. The first call on a fresh bucket returns 1.
    async fn next(&self, collection: &str, field: &str) -> DatabaseResult<u32>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CounterRecord {
    #[serde(rename = "_id")]
    id: String,
    collection: String,
    field: String,
    seq: i64,
}

fn bucket_key(collection: &str, field: &str) -> String {
    format!("{collection}.{field}")
}

fn to_identifier(bucket: String, value: i64) -> DatabaseResult<u32> {
    u32::try_from(value).map_err(|_| DatabaseError::SequenceExhausted { bucket, value })
}

/// [`SequenceAllocator`] over the `counters` collection
#[derive(Clone)]
pub struct MongoSequenceAllocator {
    counters: Collection<CounterRecord>,
    timeout: Duration,
}

impl MongoSequenceAllocator {
    pub fn new(db: &Database, timeout: Duration) -> Self {
        Self {
            counters: db.collection(COUNTERS_COLLECTION),
            timeout,
        }
    }
}

#[async_trait]
impl SequenceAllocator for MongoSequenceAllocator {
    #[instrument(skip(self))]
    async fn next(&self, collection: &str, field: &str) -> DatabaseResult<u32> {
        let key = bucket_key(collection, field);

        let updated = with_timeout(self.timeout, async {
            self.counters
                .find_one_and_update(
                    doc! { "_id": key.as_str() },
                    doc! {
                        "$inc": { "seq": 1_i64 },
                        "$setOnInsert": { "collection": collection, "field": field },
                    },
                )
                .upsert(true)
                .return_document(ReturnDocument::After)
                .await
                .map_err(DatabaseError::from)
        })
        .await?;

        let record = updated.ok_or_else(|| {
            DatabaseError::Generic(format!("counter {key} missing after upsert"))
        })?;

        tracing::debug!(bucket = %key, seq = record.seq, "Allocated sequence value");
        to_identifier(key, record.seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_key_joins_collection_and_field() {
        assert_eq!(bucket_key("product", "id_product"), "product.id_product");
        assert_ne!(
            bucket_key("product", "id_product"),
            bucket_key("product_category", "id_product")
        );
    }

    #[test]
    fn test_to_identifier_rejects_values_outside_u32() {
        assert_eq!(to_identifier("b".to_string(), 1).unwrap(), 1);
        assert_eq!(to_identifier("b".to_string(), u32::MAX as i64).unwrap(), u32::MAX);

        let err = to_identifier("product.id_product".to_string(), u32::MAX as i64 + 1).unwrap_err();
        assert!(matches!(err, DatabaseError::SequenceExhausted { ref bucket, .. } if bucket == "product.id_product"));
    }
}
