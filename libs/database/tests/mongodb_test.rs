//! Sequence allocation and paginated listing against a real MongoDB.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use database::mongodb::{
    ListQuery, MongoSequenceAllocator, SequenceAllocator, SortDirection, find_page,
};
use mongodb::bson::{Document, doc};
use test_utils::{TestDataBuilder, TestMongo, assertions::assert_dense_sequence};

const TIMEOUT: Duration = Duration::from_secs(5);

// ============================================================================
// Sequence allocation
// ============================================================================

#[tokio::test]
async fn test_first_allocation_on_fresh_bucket_is_one() {
    let mongo = TestMongo::new().await;
    let db = mongo.database("fresh_bucket");
    let ids = MongoSequenceAllocator::new(&db, TIMEOUT);

    assert_eq!(ids.next("product", "id_product").await.unwrap(), 1);

    let stored = db
        .collection::<Document>("counters")
        .find_one(doc! { "_id": "product.id_product" })
        .await
        .unwrap()
        .expect("counter document created");
    assert_eq!(stored.get_i64("seq").unwrap(), 1);
    assert_eq!(stored.get_str("collection").unwrap(), "product");
    assert_eq!(stored.get_str("field").unwrap(), "id_product");
}

#[tokio::test]
async fn test_sequential_allocations_count_up() {
    let mongo = TestMongo::new().await;
    let ids = MongoSequenceAllocator::new(&mongo.database("sequential"), TIMEOUT);

    for expected in 1..=10 {
        assert_eq!(ids.next("product", "id_product").await.unwrap(), expected);
    }
}

#[tokio::test]
async fn test_buckets_are_independent() {
    let mongo = TestMongo::new().await;
    let ids = MongoSequenceAllocator::new(&mongo.database("independent"), TIMEOUT);

    assert_eq!(ids.next("product", "id_product").await.unwrap(), 1);
    assert_eq!(ids.next("product", "id_product").await.unwrap(), 2);
    assert_eq!(
        ids.next("product_category", "id_product_category")
            .await
            .unwrap(),
        1
    );
    assert_eq!(ids.next("product", "id_product").await.unwrap(), 3);
}

#[tokio::test]
async fn test_concurrent_allocations_are_unique_and_gapless() {
    let mongo = TestMongo::new().await;
    let ids = Arc::new(MongoSequenceAllocator::new(
        &mongo.database("concurrent"),
        TIMEOUT,
    ));

    let handles: Vec<_> = (0..50)
        .map(|_| {
            let ids = ids.clone();
            tokio::spawn(async move { ids.next("product", "id_product").await })
        })
        .collect();

    let mut allocated = Vec::new();
    for handle in handles {
        allocated.push(handle.await.unwrap().unwrap());
    }

    let unique: HashSet<u32> = allocated.iter().copied().collect();
    assert_eq!(unique.len(), allocated.len(), "duplicate ids handed out");
    assert_dense_sequence(&allocated, "concurrent allocation");
}

// ============================================================================
// Paginated listing
// ============================================================================

async fn seed_names(db: &mongodb::Database, names: &[&str]) -> mongodb::Collection<Document> {
    let collection = db.collection::<Document>("things");
    let docs: Vec<Document> = names
        .iter()
        .enumerate()
        .map(|(i, name)| doc! { "n": i as i64, "name": *name, "group": (i % 2) as i64 })
        .collect();
    collection.insert_many(docs).await.unwrap();
    collection
}

#[tokio::test]
async fn test_find_page_total_ignores_window() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("test_find_page_total_ignores_window");
    let things = seed_names(
        &mongo.database(&builder.database_name()),
        &["alpha", "beta", "gamma", "delta", "epsilon"],
    )
    .await;

    let query = ListQuery::parse(None, Some("1"), Some("1"));
    let page = find_page(&things, &query, "name").await.unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total, 5);
    assert_eq!((page.page, page.limit), (1, 1));
}

#[tokio::test]
async fn test_find_page_without_window_returns_everything() {
    let mongo = TestMongo::new().await;
    let things = seed_names(&mongo.database("everything"), &["a", "b", "c"]).await;

    let page = find_page(&things, &ListQuery::parse(Some(""), None, None), "name")
        .await
        .unwrap();

    assert_eq!(page.items.len(), 3);
    assert_eq!((page.total, page.page, page.limit), (3, 1, 3));
}

#[tokio::test]
async fn test_find_page_search_filter_and_sort() {
    let mongo = TestMongo::new().await;
    let things = seed_names(
        &mongo.database("search_sort"),
        &["Desk Lamp", "desk", "LAMP shade", "chair", "lamp.post"],
    )
    .await;

    let query = ListQuery::parse(Some("lamp"), None, None).sort_by("n", SortDirection::Descending);
    let page = find_page(&things, &query, "name").await.unwrap();
    let names: Vec<&str> = page
        .items
        .iter()
        .map(|d| d.get_str("name").unwrap())
        .collect();
    assert_eq!(names, vec!["lamp.post", "LAMP shade", "Desk Lamp"]);

    let query = ListQuery::parse(Some("lamp"), None, None).filter_eq("group", 0_i64);
    let page = find_page(&things, &query, "name").await.unwrap();
    assert_eq!(page.total, 3);

    // "." must match literally, not any character
    let query = ListQuery::parse(Some("p.s"), None, None);
    let page = find_page(&things, &query, "name").await.unwrap();
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn test_find_page_no_matches_is_empty_not_error() {
    let mongo = TestMongo::new().await;
    let things = seed_names(&mongo.database("no_matches"), &["a"]).await;

    let query = ListQuery::parse(Some("zzz"), Some("2"), Some("10"));
    let page = find_page(&things, &query, "name").await.unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!((page.page, page.limit), (2, 10));
}
