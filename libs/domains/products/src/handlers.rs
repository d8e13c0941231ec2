//! HTTP handlers for Products API

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    U32Path, ValidatedJson,
    errors::responses::{
        BadRequestBodyResponse, BadRequestIntegerResponse, BadRequestValidationResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{
    CreateProduct, Product, ProductCreated, ProductFieldUpdate, ProductListParams,
    ProductListResponse, ProductResponse, SellerProductsResponse,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        get_by_seller,
        update_product_field,
    ),
    components(
        schemas(
            Product, CreateProduct, ProductFieldUpdate, ProductCreated,
            ProductResponse, ProductListResponse, SellerProductsResponse
        ),
        responses(
            NotFoundResponse,
            BadRequestBodyResponse,
            BadRequestValidationResponse,
            BadRequestIntegerResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Product routes, meant to be nested under `/product`
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/seller/{id}", get(get_by_seller))
        .route("/{id}", get(get_product).patch(update_product_field))
        .with_state(shared_service)
}

/// List products with search, category filter, pagination and sort
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductListParams),
    responses(
        (status = 200, description = "Page of products", body = ProductListResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(params): Query<ProductListParams>,
) -> ProductResult<Json<ProductListResponse>> {
    let page = service.list_products(params.to_query()).await?;
    Ok(Json(page.into()))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = ProductCreated),
        (status = 400, response = BadRequestBodyResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let id_product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(ProductCreated { id_product })))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = u32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 400, response = BadRequestIntegerResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    U32Path(id): U32Path,
) -> ProductResult<Json<ProductResponse>> {
    let data = service.get_product(id).await?;
    Ok(Json(ProductResponse { data }))
}

/// All products of one seller
#[utoipa::path(
    get,
    path = "/seller/{id}",
    tag = "Products",
    params(
        ("id" = u32, Path, description = "Seller ID")
    ),
    responses(
        (status = 200, description = "Seller's products, possibly empty", body = SellerProductsResponse),
        (status = 400, response = BadRequestIntegerResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_by_seller<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    U32Path(seller_id): U32Path,
) -> ProductResult<Json<SellerProductsResponse>> {
    let data = service.get_by_seller(seller_id).await?;
    Ok(Json(SellerProductsResponse { data }))
}

/// Overwrite a single product field
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = u32, Path, description = "Product ID")
    ),
    request_body = ProductFieldUpdate,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product_field<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    U32Path(id): U32Path,
    ValidatedJson(update): ValidatedJson<ProductFieldUpdate>,
) -> ProductResult<Json<ProductResponse>> {
    let data = service.update_product_field(id, update).await?;
    Ok(Json(ProductResponse { data }))
}
