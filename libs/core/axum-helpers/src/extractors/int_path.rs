//! Numeric path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Single `u32` path segment.
///
/// Rejects anything that is not a non-negative 32-bit integer with
/// `400 "<value> is not integer"`.
///
/// ```ignore
/// async fn get_product(U32Path(id): U32Path) -> String {
///     format!("product {id}")
/// }
///
/// let app = Router::new().route("/product/{id}", get(get_product));
/// ```
pub struct U32Path(pub u32);

impl<S> FromRequestParts<S> for U32Path
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        raw.parse::<u32>()
            .map(U32Path)
            .map_err(|_| AppError::InvalidInteger(raw).into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new().route(
            "/things/{id}",
            get(|U32Path(id): U32Path| async move { id.to_string() }),
        )
    }

    async fn call(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_accepts_u32() {
        assert_eq!(call("/things/42").await, (StatusCode::OK, "42".to_string()));
    }

    #[tokio::test]
    async fn test_rejects_non_integer() {
        let (status, body) = call("/things/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("abc is not integer"));
    }

    #[tokio::test]
    async fn test_rejects_negative_and_overflow() {
        assert_eq!(call("/things/-1").await.0, StatusCode::BAD_REQUEST);
        assert_eq!(call("/things/4294967296").await.0, StatusCode::BAD_REQUEST);
    }
}
