use crate::license_reconciliation::domain::LicenseTypeCatalogEntry;
use crate::shared::Result;
use async_trait::async_trait;

/// LicenseTypeRepository port for the license-type catalog
#[async_trait]
pub trait LicenseTypeRepository: Send + Sync {
    /// Fetches the catalog in service order
    ///
    /// # Arguments
    /// * `environment` - Environment of the host being reconciled
    ///
    /// # Errors
    /// Returns an error if the request fails or the payload cannot be decoded
    async fn fetch_license_types(&self, environment: &str) -> Result<Vec<LicenseTypeCatalogEntry>>;
}
