use super::service_endpoint::{build_client, ensure_success, ServiceEndpoint};
use crate::license_reconciliation::domain::LicenseTypeCatalogEntry;
use crate::ports::outbound::LicenseTypeRepository;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use std::time::Duration;

const LICENSE_TYPES_PATH: &str = "settings/oracle/database/license-types";
const SERVICE_NAME: &str = "License type catalog";

/// LicenseTypeClient adapter for the API service license-type catalog
///
/// Implements the LicenseTypeRepository port. Entries are returned in the
/// order the service lists them; ranking happens in the domain.
pub struct LicenseTypeClient {
    client: reqwest::Client,
    endpoint: ServiceEndpoint,
}

impl LicenseTypeClient {
    pub fn new(endpoint: ServiceEndpoint, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            endpoint,
        })
    }

    fn catalog_url(&self, environment: &str) -> String {
        format!(
            "{}?environment={}",
            self.endpoint.url(LICENSE_TYPES_PATH),
            urlencoding::encode(environment)
        )
    }
}

#[async_trait]
impl LicenseTypeRepository for LicenseTypeClient {
    async fn fetch_license_types(&self, environment: &str) -> Result<Vec<LicenseTypeCatalogEntry>> {
        let url = self.catalog_url(environment);
        tracing::debug!(url = %url, "Fetching license type catalog");

        let response = self
            .endpoint
            .authorize(self.client.get(&url))
            .send()
            .await
            .with_context(|| format!("Can't retrieve license types from {}", url))?;

        let catalog = ensure_success(SERVICE_NAME, response)?
            .json()
            .await
            .context("Can't decode license types")?;

        Ok(catalog)
    }
}
