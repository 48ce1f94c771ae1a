use super::service_endpoint::{build_client, ensure_success, ServiceEndpoint};
use crate::license_reconciliation::domain::DatabaseRecord;
use crate::ports::outbound::PrimaryDatabaseRepository;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use std::time::Duration;

const DATABASES_PATH: &str = "hosts/technologies/oracle/databases";
const SERVICE_NAME: &str = "Fleet database inventory";

/// FleetDatabaseClient adapter for the API service database listing
///
/// Implements the PrimaryDatabaseRepository port. The full listing is
/// requested and narrowed down to open primaries before it is returned.
pub struct FleetDatabaseClient {
    client: reqwest::Client,
    endpoint: ServiceEndpoint,
}

impl FleetDatabaseClient {
    pub fn new(endpoint: ServiceEndpoint, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            endpoint,
        })
    }

    fn retain_open_primaries(mut databases: Vec<DatabaseRecord>) -> Vec<DatabaseRecord> {
        databases.retain(DatabaseRecord::is_open_primary);
        databases
    }
}

#[async_trait]
impl PrimaryDatabaseRepository for FleetDatabaseClient {
    async fn fetch_primary_open_databases(&self) -> Result<Vec<DatabaseRecord>> {
        let url = format!("{}?full=true", self.endpoint.url(DATABASES_PATH));
        tracing::debug!(url = %url, "Fetching fleet databases");

        let response = self
            .endpoint
            .authorize(self.client.get(&url))
            .send()
            .await
            .with_context(|| format!("Can't retrieve databases from {}", url))?;

        let databases: Vec<DatabaseRecord> = ensure_success(SERVICE_NAME, response)?
            .json()
            .await
            .context("Can't decode databases")?;

        Ok(Self::retain_open_primaries(databases))
    }
}
