//! MongoDB test infrastructure

use mongodb::{Client, Database};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::mongo::Mongo;

/// Throwaway MongoDB container.
///
/// The container is stopped and removed when this value is dropped. Use a
/// separate [`TestMongo::database`] per test to keep collections isolated.
///
/// ```no_run
/// use test_utils::TestMongo;
///
/// # async fn example() {
/// let mongo = TestMongo::new().await;
/// let db = mongo.database("create_product");
/// # }
/// ```
pub struct TestMongo {
    #[allow(dead_code)]
    container: ContainerAsync<Mongo>,
    client: Client,
    url: String,
}

impl TestMongo {
    /// Start a `mongo:7` container and connect to it.
    pub async fn new() -> Self {
        let container = Mongo::default()
            .with_tag("7")
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let host_port = container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get MongoDB port");

        let url = format!("mongodb://127.0.0.1:{}", host_port);

        let client = Client::with_uri_str(&url)
            .await
            .expect("Failed to connect to MongoDB");

        tracing::info!(port = host_port, "Test MongoDB ready");

        Self {
            container,
            client,
            url,
        }
    }

    pub fn client(&self) -> Client {
        self.client.clone()
    }

    /// Connection string for code under test that builds its own client
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn database(&self, name: &str) -> Database {
        self.client.database(name)
    }
}
