use crate::license_reconciliation::domain::{DatabaseRecord, LicenseEntry};

/// EntitlementCalculator derives the license counts of a secondary database
/// from its primary.
///
/// Every license the primary actively uses is carried over with a count of
/// `host_core_count × core_factor`, where the core count and factor belong to
/// the host running the secondary.
pub struct EntitlementCalculator;

impl EntitlementCalculator {
    /// Computes the inherited license set
    ///
    /// # Arguments
    /// * `primary_licenses` - License entries of the primary database
    /// * `host_core_count` - Physical cores of the secondary's host
    /// * `core_factor` - Multiplier for the secondary's host, usually in `(0, 1]`
    ///
    /// # Returns
    /// One entry per active primary license, carrying the primary's resolved
    /// catalog identifier. Primary entries with a zero count are skipped.
    pub fn compute_inherited_licenses(
        primary_licenses: &[LicenseEntry],
        host_core_count: u32,
        core_factor: f64,
    ) -> Vec<LicenseEntry> {
        let count = f64::from(host_core_count) * core_factor;

        primary_licenses
            .iter()
            .filter(|license| license.is_active())
            .map(|license| LicenseEntry {
                name: license.name.clone(),
                count,
                license_type_id: license.license_type_id.clone(),
            })
            .collect()
    }

    /// Applies inherited licenses to a secondary database
    ///
    /// Entries with a matching name are overwritten, others are appended.
    /// Entries the secondary already carries that are not in `inherited`
    /// are left as they are.
    pub fn apply(secondary: &mut DatabaseRecord, inherited: Vec<LicenseEntry>) {
        for license in inherited {
            match secondary
                .licenses
                .iter_mut()
                .find(|existing| existing.name == license.name)
            {
                Some(existing) => existing.count = license.count,
                None => secondary.licenses.push(license),
            }
        }
    }
}
