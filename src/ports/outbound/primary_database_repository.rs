use crate::license_reconciliation::domain::DatabaseRecord;
use crate::shared::Result;
use async_trait::async_trait;

/// PrimaryDatabaseRepository port for the fleet-wide database listing
///
/// Used to look up the primary counterpart of standby databases.
/// Implementations must be `Send + Sync` so batch runs can share one client.
#[async_trait]
pub trait PrimaryDatabaseRepository: Send + Sync {
    /// Fetches every open primary database known to the fleet
    ///
    /// # Errors
    /// Returns an error if the request fails, the service answers with a
    /// non-success status, or the payload cannot be decoded.
    async fn fetch_primary_open_databases(&self) -> Result<Vec<DatabaseRecord>>;
}
