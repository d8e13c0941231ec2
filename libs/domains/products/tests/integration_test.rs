//! Repository and service tests against a real MongoDB (testcontainers)

use database::mongodb::{ListQuery, MongoSequenceAllocator, SequenceAllocator, SortDirection};
use domain_products::*;
use std::time::Duration;
use test_utils::{TestDataBuilder, TestMongo};

async fn repository(mongo: &TestMongo, test_name: &str) -> MongoProductRepository {
    let builder = TestDataBuilder::from_test_name(test_name);
    let db = mongo.database(&builder.database_name());
    let repo = MongoProductRepository::new(&db, Duration::from_secs(5));
    repo.init_indexes().await.unwrap();
    repo
}

fn product(name: &str, price: f64, seller: u32, category: u32) -> CreateProduct {
    CreateProduct {
        product_name: name.to_string(),
        description: format!("{name} description"),
        price,
        id_seller: seller,
        product_category_id: category,
    }
}

async fn seed(repo: &MongoProductRepository) {
    let items = [
        product("Red Shirt", 20.0, 1, 10),
        product("Blue Shirt", 22.0, 1, 10),
        product("Green Hat", 15.0, 2, 20),
        product("Sneakers", 80.0, 2, 30),
        product("Shirt.v2", 30.0, 3, 10),
    ];
    for item in items {
        repo.create(item).await.unwrap();
    }
}

#[tokio::test]
async fn test_create_then_get_by_oid_and_id() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "product_create_get").await;

    let oid = repo.create(product("Lamp", 12.5, 7, 1)).await.unwrap();

    let by_oid = repo.get_by_oid(oid).await.unwrap().unwrap();
    assert_eq!(by_oid.id_product, 1);
    assert_eq!(by_oid.product_name, "Lamp");

    let by_id = repo.get_by_id(1).await.unwrap().unwrap();
    assert_eq!(by_id, by_oid);
}

#[tokio::test]
async fn test_service_create_returns_sequential_ids() {
    let mongo = TestMongo::new().await;
    let service = ProductService::new(repository(&mongo, "product_service_create").await);

    let first = service.create_product(product("A", 1.0, 1, 1)).await.unwrap();
    let second = service.create_product(product("B", 2.0, 1, 1)).await.unwrap();

    assert_eq!((first, second), (1, 2));
}

#[tokio::test]
async fn test_list_everything_without_window() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "product_list_all").await;
    seed(&repo).await;

    let page = repo.list(ListQuery::default()).await.unwrap();

    assert_eq!(page.total, 5);
    assert_eq!(page.items.len(), 5);
    assert_eq!((page.page, page.limit), (1, 5));
}

#[tokio::test]
async fn test_list_page_of_one() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "product_page_of_one").await;
    seed(&repo).await;

    let page = repo
        .list(ListQuery::parse(None, Some("1"), Some("1")))
        .await
        .unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total, 5);
}

#[tokio::test]
async fn test_category_filter_restricts_items_and_total() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "product_category_filter").await;
    seed(&repo).await;

    let params = ProductListParams {
        category_id: Some("10".into()),
        ..Default::default()
    };
    let page = repo.list(params.to_query()).await.unwrap();

    assert_eq!(page.total, 3);
    assert!(page.items.iter().all(|p| p.product_category_id == 10));
}

#[tokio::test]
async fn test_search_sort_and_filter_combined() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "product_search_sort").await;
    seed(&repo).await;

    let query = ListQuery::parse(Some("shirt"), None, None)
        .filter_eq("product_category_id", 10_u32)
        .sort_by("price", SortDirection::Descending);
    let page = repo.list(query).await.unwrap();

    let names: Vec<&str> = page.items.iter().map(|p| p.product_name.as_str()).collect();
    assert_eq!(names, vec!["Shirt.v2", "Blue Shirt", "Red Shirt"]);
}

#[tokio::test]
async fn test_search_text_is_literal() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "product_search_literal").await;
    seed(&repo).await;

    let page = repo
        .list(ListQuery::parse(Some("t.v"), None, None))
        .await
        .unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].product_name, "Shirt.v2");
}

#[tokio::test]
async fn test_get_by_seller() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "product_by_seller").await;
    seed(&repo).await;

    let products = repo.get_by_seller_id(2).await.unwrap();
    assert_eq!(products.len(), 2);
    assert!(products.iter().all(|p| p.id_seller == 2));

    assert!(repo.get_by_seller_id(999).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_field_overwrites_one_field() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "product_update_field").await;
    seed(&repo).await;

    let before = repo.get_by_id(3).await.unwrap().unwrap();
    assert!(
        repo.update_field(3, ProductFieldUpdate::ProductName("Blue Hat".into()))
            .await
            .unwrap()
    );

    let after = repo.get_by_id(3).await.unwrap().unwrap();
    assert_eq!(after.product_name, "Blue Hat");
    assert_eq!(after.price, before.price);
    assert_eq!(after.id_seller, before.id_seller);

    assert!(
        repo.update_field(3, ProductFieldUpdate::ProductCategoryId(99))
            .await
            .unwrap()
    );
    let moved = repo.get_by_id(3).await.unwrap().unwrap();
    assert_eq!(moved.product_category_id, 99);
}

#[tokio::test]
async fn test_update_field_missing_product() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "product_update_missing").await;

    assert!(
        !repo
            .update_field(1, ProductFieldUpdate::Price(1.0))
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn test_product_and_category_counters_are_independent() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("product_counter_independent");
    let db = mongo.database(&builder.database_name());
    let repo = MongoProductRepository::new(&db, Duration::from_secs(5));

    let allocator = MongoSequenceAllocator::new(&db, Duration::from_secs(5));
    for _ in 0..3 {
        allocator.next("product_category", "id_product_category").await.unwrap();
    }

    let oid = repo.create(product("First", 1.0, 1, 1)).await.unwrap();
    assert_eq!(repo.get_by_oid(oid).await.unwrap().unwrap().id_product, 1);
}
