use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::DatabaseError;
use std::fmt;
use thiserror::Error;

/// Category operation a storage failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryOperation {
    Create,
    List,
    Get,
    Update,
    Delete,
}

impl CategoryOperation {
    /// Message returned to the client when the operation fails in storage.
    pub fn failure_message(self) -> &'static str {
        match self {
            CategoryOperation::Create => "failed to create product category",
            CategoryOperation::List => "failed to get product category data",
            CategoryOperation::Get => "failed to get product category data by id",
            CategoryOperation::Update => "failed to update product category",
            CategoryOperation::Delete => "failed to delete product category",
        }
    }
}

impl fmt::Display for CategoryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_message())
    }
}

#[derive(Debug, Error)]
pub enum ProductCategoryError {
    #[error("Product category {0} not found")]
    NotFound(u32),

    #[error("No documents deleted for product category {0}")]
    NoDocumentsDeleted(u32),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("{operation}: {source}")]
    Storage {
        operation: CategoryOperation,
        source: DatabaseError,
    },
}

pub type ProductCategoryResult<T> = Result<T, ProductCategoryError>;

impl ProductCategoryError {
    /// Attach `operation` to a bare storage error; other kinds pass through.
    pub fn during(self, operation: CategoryOperation) -> Self {
        match self {
            ProductCategoryError::Database(source) => {
                ProductCategoryError::Storage { operation, source }
            }
            other => other,
        }
    }
}

impl From<mongodb::error::Error> for ProductCategoryError {
    fn from(err: mongodb::error::Error) -> Self {
        ProductCategoryError::Database(err.into())
    }
}

impl From<ProductCategoryError> for AppError {
    fn from(err: ProductCategoryError) -> Self {
        match err {
            ProductCategoryError::NotFound(id) => {
                AppError::NotFound(format!("Product category {} not found", id))
            }
            ProductCategoryError::NoDocumentsDeleted(id) => {
                AppError::NotFound(format!("No documents deleted for product category {}", id))
            }
            ProductCategoryError::Database(source) if source.is_timeout() => {
                AppError::timeout("product category storage")
            }
            ProductCategoryError::Database(source) => {
                AppError::database("product category storage failure", source)
            }
            ProductCategoryError::Storage { operation, source } if source.is_timeout() => {
                AppError::timeout(operation.failure_message())
            }
            ProductCategoryError::Storage { operation, source } => {
                AppError::database(operation.failure_message(), source)
            }
        }
    }
}

impl IntoResponse for ProductCategoryError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
