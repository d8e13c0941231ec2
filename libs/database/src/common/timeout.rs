use std::future::IntoFuture;
use std::time::Duration;

use super::DatabaseError;

/// Run `operation` with a hard deadline.
///
/// The future is dropped when `limit` elapses and the caller receives
/// [`DatabaseError::Timeout`] converted into its own error type.
///
/// ```ignore
/// let found = with_timeout(limit, collection.find_one(filter)).await?;
/// ```
pub async fn with_timeout<F, T, E>(limit: Duration, operation: F) -> Result<T, E>
where
    F: IntoFuture<Output = Result<T, E>>,
    E: From<DatabaseError>,
{
    match tokio::time::timeout(limit, operation.into_future()).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(timeout = ?limit, "Database operation timed out");
            Err(DatabaseError::Timeout(limit).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_with_timeout_passes_result_through() {
        let result: Result<u32, DatabaseError> =
            with_timeout(Duration::from_secs(1), async { Ok(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_with_timeout_keeps_inner_error() {
        let result: Result<u32, DatabaseError> = with_timeout(Duration::from_secs(1), async {
            Err(DatabaseError::Generic("boom".to_string()))
        })
        .await;
        assert!(matches!(result, Err(DatabaseError::Generic(msg)) if msg == "boom"));
    }

    #[tokio::test]
    async fn test_with_timeout_expires() {
        let result: Result<(), DatabaseError> =
            with_timeout(Duration::from_millis(50), async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(())
            })
            .await;

        let err = result.unwrap_err();
        assert!(err.is_timeout());
        assert!(err.to_string().contains("50ms"));
    }
}
