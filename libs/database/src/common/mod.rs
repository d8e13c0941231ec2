//! Utilities shared by every backend

pub mod error;
pub mod retry;
pub mod timeout;

pub use error::{DatabaseError, DatabaseResult};
pub use retry::{RetryConfig, retry, retry_with_backoff};
pub use timeout::with_timeout;
