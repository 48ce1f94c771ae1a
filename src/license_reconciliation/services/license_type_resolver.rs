use crate::license_reconciliation::domain::{DatabaseRecord, LicenseTypeCatalogEntry};
use crate::license_reconciliation::policies::{LicenseTypeMetrics, LicenseTypePriority};

/// LicenseTypeResolver annotates license entries with catalog identifiers
pub struct LicenseTypeResolver;

impl LicenseTypeResolver {
    /// Orders a freshly fetched catalog for `environment`
    pub fn order_catalog(
        catalog: Vec<LicenseTypeCatalogEntry>,
        metrics: &LicenseTypeMetrics,
        environment: &str,
    ) -> Vec<LicenseTypeCatalogEntry> {
        LicenseTypePriority::order(catalog, metrics.for_environment(environment))
    }

    /// Assigns catalog identifiers to every license entry of `database`
    ///
    /// The first catalog entry with an alias equal to the license name wins.
    /// Entries without a match are left as they are.
    ///
    /// # Returns
    /// The number of entries that matched a catalog entry
    pub fn assign_type_ids(
        catalog: &[LicenseTypeCatalogEntry],
        database: &mut DatabaseRecord,
    ) -> usize {
        let mut resolved = 0;

        for license in database.licenses.iter_mut() {
            if let Some(entry) = catalog.iter().find(|entry| entry.has_alias(&license.name)) {
                license.license_type_id = Some(entry.id.clone());
                resolved += 1;
            }
        }

        resolved
    }
}
