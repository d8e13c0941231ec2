use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::DatabaseError;
use std::fmt;
use thiserror::Error;

/// Product operation a storage failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductOperation {
    Create,
    List,
    Get,
    GetBySeller,
    Update,
}

impl ProductOperation {
    /// Message returned to the client when the operation fails in storage.
    pub fn failure_message(self) -> &'static str {
        match self {
            ProductOperation::Create => "failed to create product",
            ProductOperation::List => "failed to get product data",
            ProductOperation::Get => "failed to get product data by id",
            ProductOperation::GetBySeller => "failed to get product data by seller id",
            ProductOperation::Update => "failed to update product",
        }
    }
}

impl fmt::Display for ProductOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_message())
    }
}

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product {0} not found")]
    NotFound(u32),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("{operation}: {source}")]
    Storage {
        operation: ProductOperation,
        source: DatabaseError,
    },
}

pub type ProductResult<T> = Result<T, ProductError>;

impl ProductError {
    /// Attach `operation` to a bare storage error; other kinds pass through.
    pub fn during(self, operation: ProductOperation) -> Self {
        match self {
            ProductError::Database(source) => ProductError::Storage { operation, source },
            other => other,
        }
    }
}

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            ProductError::Database(source) if source.is_timeout() => {
                AppError::timeout("product storage")
            }
            ProductError::Database(source) => AppError::database("product storage failure", source),
            ProductError::Storage { operation, source } if source.is_timeout() => {
                AppError::timeout(operation.failure_message())
            }
            ProductError::Storage { operation, source } => {
                AppError::database(operation.failure_message(), source)
            }
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ProductError {
    fn from(err: mongodb::error::Error) -> Self {
        ProductError::Database(err.into())
    }
}
