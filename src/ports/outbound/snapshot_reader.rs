use crate::license_reconciliation::domain::HostSnapshot;
use crate::shared::Result;
use std::path::Path;

/// SnapshotReader port for loading host snapshots
pub trait SnapshotReader {
    /// Reads and decodes the snapshot stored at `path`
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid snapshot
    fn read_snapshot(&self, path: &Path) -> Result<HostSnapshot>;
}
