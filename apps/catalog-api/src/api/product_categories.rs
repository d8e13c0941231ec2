//! Product category API routes

use axum::Router;
use domain_product_categories::{
    MongoProductCategoryRepository, ProductCategoryService, handlers,
};

use crate::state::AppState;

fn repository(state: &AppState) -> MongoProductCategoryRepository {
    MongoProductCategoryRepository::new(&state.db, state.operation_timeout())
}

pub fn router(state: &AppState) -> Router {
    handlers::router(ProductCategoryService::new(repository(state)))
}

pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    repository(state).init_indexes().await?;
    Ok(())
}
