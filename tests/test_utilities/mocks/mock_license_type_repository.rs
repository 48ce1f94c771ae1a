use async_trait::async_trait;
use oracle_license_reconciler::prelude::*;

/// Mock LicenseTypeRepository serving a fixed catalog
#[derive(Clone, Default)]
pub struct MockLicenseTypeRepository {
    pub catalog: Vec<LicenseTypeCatalogEntry>,
    pub should_fail: bool,
}

impl MockLicenseTypeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, id: &str, metric: &str, aliases: &[&str]) -> Self {
        self.catalog
            .push(LicenseTypeCatalogEntry::new(id, metric, aliases));
        self
    }

    pub fn with_failure() -> Self {
        Self {
            catalog: Vec::new(),
            should_fail: true,
        }
    }
}

#[async_trait]
impl LicenseTypeRepository for MockLicenseTypeRepository {
    async fn fetch_license_types(&self, _environment: &str) -> Result<Vec<LicenseTypeCatalogEntry>> {
        if self.should_fail {
            anyhow::bail!("Mock license type catalog failure");
        }
        Ok(self.catalog.clone())
    }
}
