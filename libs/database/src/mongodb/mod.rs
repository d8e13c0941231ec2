//! MongoDB connector and helpers
//!
//! - [`connect_from_config_with_retry`] for startup
//! - [`check_health`] for readiness probes
//! - [`MongoSequenceAllocator`] for sequential numeric ids
//! - [`ListQuery`] and [`find_page`] for paginated listings

mod config;
mod connector;
mod counter;
mod health;
mod query;

pub use config::MongoConfig;
pub use connector::{connect, connect_from_config, connect_from_config_with_retry};
pub use counter::{COUNTERS_COLLECTION, MongoSequenceAllocator, SequenceAllocator};
pub use health::{HealthStatus, check_health, check_health_detailed};
pub use query::{ListQuery, Page, PageRequest, SortDirection, SortSpec, find_page};

pub use mongodb::{Client, Collection, Database};
