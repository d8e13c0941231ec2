use std::time::Duration;

/// Error type shared by the database helpers
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Driver-level MongoDB errors
    #[cfg(feature = "mongodb")]
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// Operation did not finish within its deadline
    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),

    /// A counter no longer fits the identifier type
    #[error("Sequence {bucket} exhausted at {value}")]
    SequenceExhausted { bucket: String, value: i64 },

    /// Connection failed after retries
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Database error: {0}")]
    Generic(String),
}

impl DatabaseError {
    /// True for [`DatabaseError::Timeout`]
    pub fn is_timeout(&self) -> bool {
        matches!(self, DatabaseError::Timeout(_))
    }
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
