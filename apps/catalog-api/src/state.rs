//! Shared application state.

use mongodb::{Client, Database};
use std::time::Duration;

/// Cloned into every router; the MongoDB handles share one connection pool.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub mongo_client: Client,
    pub db: Database,
}

impl AppState {
    /// Deadline applied to each repository and counter operation
    pub fn operation_timeout(&self) -> Duration {
        self.config.mongodb.operation_timeout()
    }
}
