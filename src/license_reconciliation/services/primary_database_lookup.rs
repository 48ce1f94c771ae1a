use crate::license_reconciliation::domain::DatabaseRecord;

/// PrimaryDatabaseLookup finds the primary counterpart of a standby database
/// within a fleet-wide listing.
pub struct PrimaryDatabaseLookup;

impl PrimaryDatabaseLookup {
    /// Finds the open primary sharing the secondary's `(db_id, name)` identity
    ///
    /// Entries of the fleet listing that are not open primaries are never
    /// matched, even if the listing was not filtered upstream.
    ///
    /// # Returns
    /// The first matching primary, or `None` when the fleet holds no match
    pub fn find_primary<'a>(
        secondary: &DatabaseRecord,
        fleet: &'a [DatabaseRecord],
    ) -> Option<&'a DatabaseRecord> {
        fleet
            .iter()
            .filter(|candidate| candidate.is_open_primary())
            .find(|candidate| candidate.identity() == secondary.identity())
    }
}
