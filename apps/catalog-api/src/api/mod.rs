//! API routes module
//!
//! Wires the domain routers to their URL prefixes.

pub mod health;
pub mod product_categories;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// All API routes. Documentation UIs and cross-cutting layers are added by
/// `axum_helpers::create_router`.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/product", products::router(state))
        .nest("/product_category", product_categories::router(state))
        .merge(health::router(state.clone()))
}

/// Create the indexes every collection relies on
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    products::init_indexes(state).await?;
    product_categories::init_indexes(state).await?;
    Ok(())
}
