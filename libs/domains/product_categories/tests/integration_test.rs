//! Repository tests against a real MongoDB (testcontainers)

use database::mongodb::{ListQuery, SortDirection};
use domain_product_categories::*;
use std::time::Duration;
use test_utils::{TestDataBuilder, TestMongo};

const TIMEOUT: Duration = Duration::from_secs(5);

fn create(name: &str) -> CreateProductCategory {
    CreateProductCategory {
        category_name: name.to_string(),
    }
}

async fn repository(mongo: &TestMongo, test_name: &str) -> MongoProductCategoryRepository {
    let builder = TestDataBuilder::from_test_name(test_name);
    let db = mongo.database(&builder.database_name());
    let repo = MongoProductCategoryRepository::new(&db, TIMEOUT);
    repo.init_indexes().await.unwrap();
    repo
}

#[tokio::test]
async fn test_create_assigns_sequential_ids() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "category_sequential_ids").await;

    let first = repo.create(create("Books")).await.unwrap();
    let second = repo.create(create("Games")).await.unwrap();

    assert_eq!(first, 1);
    assert_eq!(second, 2);

    let stored = repo.get_by_id(second).await.unwrap().unwrap();
    assert_eq!(stored.category_name, "Games");
    assert_eq!(stored.oid.len(), 24);
}

#[tokio::test]
async fn test_get_missing_is_none() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "category_get_missing").await;

    assert!(repo.get_by_id(12345).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_without_window_returns_everything() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "category_list_all").await;

    for name in ["Books", "Games", "Garden", "Music", "Toys"] {
        repo.create(create(name)).await.unwrap();
    }

    let page = repo.list(ListQuery::default()).await.unwrap();
    assert_eq!(page.total, 5);
    assert_eq!(page.items.len(), 5);
    assert_eq!((page.page, page.limit), (1, 5));
}

#[tokio::test]
async fn test_list_page_of_one_reports_full_total() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "category_page_of_one").await;

    for name in ["Books", "Games", "Garden", "Music", "Toys"] {
        repo.create(create(name)).await.unwrap();
    }

    let query = ListQuery::parse(None, Some("1"), Some("1"))
        .sort_by("category_id", SortDirection::Ascending);
    let page = repo.list(query).await.unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total, 5);
    assert_eq!(page.items[0].category_id, 1);
}

#[tokio::test]
async fn test_list_search_is_case_insensitive_substring() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "category_search").await;

    for name in ["Garden Tools", "garden seeds", "Kitchen"] {
        repo.create(create(name)).await.unwrap();
    }

    let page = repo
        .list(ListQuery::parse(Some("GARDEN"), None, None))
        .await
        .unwrap();

    assert_eq!(page.total, 2);
    assert!(page
        .items
        .iter()
        .all(|c| c.category_name.to_lowercase().contains("garden")));
}

#[tokio::test]
async fn test_update_name_returns_updated_record() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "category_update").await;

    let id = repo.create(create("Old")).await.unwrap();
    let before = repo.get_by_id(id).await.unwrap().unwrap();

    let updated = repo
        .update_name(id, "New".to_string())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.category_id, id);
    assert_eq!(updated.category_name, "New");
    assert_eq!(updated.oid, before.oid);

    let fetched = repo.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(fetched.category_name, "New");
}

#[tokio::test]
async fn test_update_missing_is_none() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "category_update_missing").await;

    assert!(repo.update_name(77, "x".to_string()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_removes_exactly_one() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "category_delete").await;

    let keep = repo.create(create("Keep")).await.unwrap();
    let gone = repo.create(create("Gone")).await.unwrap();

    repo.delete(gone).await.unwrap();

    assert!(repo.get_by_id(gone).await.unwrap().is_none());
    assert!(repo.get_by_id(keep).await.unwrap().is_some());
    assert_eq!(repo.list(ListQuery::default()).await.unwrap().total, 1);
}

#[tokio::test]
async fn test_delete_missing_reports_no_documents_deleted() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "category_delete_missing").await;

    let err = repo.delete(404).await.unwrap_err();
    assert!(matches!(err, ProductCategoryError::NoDocumentsDeleted(404)));
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "category_concurrent").await;

    let creates = (0..20).map(|i| {
        let repo = repo.clone();
        async move { repo.create(create(&format!("Category {i}"))).await }
    });
    let ids: Vec<u32> = futures::future::try_join_all(creates).await.unwrap();

    test_utils::assertions::assert_dense_sequence(&ids, "concurrent category ids");
}
