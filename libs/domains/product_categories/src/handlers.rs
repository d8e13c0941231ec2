//! HTTP handlers for the product category API

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

use crate::error::ProductCategoryResult;
use crate::models::{
    CategoryCreated, CategoryListResponse, CategoryResponse, CreateProductCategory,
    ProductCategory, ProductCategoryListParams, UpdateProductCategory,
};
use crate::repository::ProductCategoryRepository;
use crate::service::ProductCategoryService;

#[derive(OpenApi)]
#[openapi(
    paths(
        list_categories,
        create_category,
        get_category,
        update_category,
        delete_category,
    ),
    components(
        schemas(
            ProductCategory, CreateProductCategory, UpdateProductCategory,
            CategoryCreated, CategoryResponse, CategoryListResponse
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
        (name = "Product Categories", description = "Product category endpoints")
    )
)]
pub struct ApiDoc;

/// Category routes, meant to be nested under `/product_category`
pub fn router<R: ProductCategoryRepository + 'static>(
    service: ProductCategoryService<R>,
) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/{id}",
            get(get_category).put(update_category).delete(delete_category),
        )
        .with_state(shared_service)
}

/// List categories with optional search, pagination and sort
#[utoipa::path(
    get,
    path = "",
    tag = "Product Categories",
    params(ProductCategoryListParams),
    responses(
        (status = 200, description = "Page of categories", body = CategoryListResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_categories<R: ProductCategoryRepository>(
    State(service): State<Arc<ProductCategoryService<R>>>,
    Query(params): Query<ProductCategoryListParams>,
) -> ProductCategoryResult<Json<CategoryListResponse>> {
    let page = service.list_categories(params.to_query()).await?;
    Ok(Json(page.into()))
}

#[utoipa::path(
    post,
    path = "",
    tag = "Product Categories",
    request_body = CreateProductCategory,
    responses(
        (status = 201, description = "Category created", body = CategoryCreated),
        (status = 400, response = BadRequestBodyResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_category<R: ProductCategoryRepository>(
    State(service): State<Arc<ProductCategoryService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProductCategory>,
) -> ProductCategoryResult<impl IntoResponse> {
    let category_id = service.create_category(input).await?;
    Ok((StatusCode::CREATED, Json(CategoryCreated { category_id })))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Product Categories",
    params(
        ("id" = u32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponse),
        (status = 400, response = BadRequestIntegerResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_category<R: ProductCategoryRepository>(
    State(service): State<Arc<ProductCategoryService<R>>>,
    U32Path(id): U32Path,
) -> ProductCategoryResult<Json<CategoryResponse>> {
    let data = service.get_category(id).await?;
    Ok(Json(CategoryResponse { data }))
}

/// Rename a category; responds with the stored record
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Product Categories",
    params(
        ("id" = u32, Path, description = "Category ID")
    ),
    request_body = UpdateProductCategory,
    responses(
        (status = 200, description = "Category updated", body = ProductCategory),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_category<R: ProductCategoryRepository>(
    State(service): State<Arc<ProductCategoryService<R>>>,
    U32Path(id): U32Path,
    ValidatedJson(input): ValidatedJson<UpdateProductCategory>,
) -> ProductCategoryResult<Json<ProductCategory>> {
    let category = service.update_category(id, input).await?;
    Ok(Json(category))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Product Categories",
    params(
        ("id" = u32, Path, description = "Category ID")
    ),
    responses(
        (status = 202, description = "Category deleted"),
        (status = 400, response = BadRequestIntegerResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_category<R: ProductCategoryRepository>(
    State(service): State<Arc<ProductCategoryService<R>>>,
    U32Path(id): U32Path,
) -> ProductCategoryResult<StatusCode> {
    service.delete_category(id).await?;
    Ok(StatusCode::ACCEPTED)
}
