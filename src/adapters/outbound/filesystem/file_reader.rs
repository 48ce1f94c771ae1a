use crate::license_reconciliation::domain::HostSnapshot;
use crate::ports::outbound::SnapshotReader;
use crate::shared::error::ReconcileError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum snapshot size (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// FileSystemReader adapter reading host snapshots stored as JSON files
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a file, rejecting symbolic links, non-regular files and files
    /// above the size limit
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read metadata: {}", e))?;

        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            );
        }

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        if metadata.len() > MAX_FILE_SIZE {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                metadata.len(),
                MAX_FILE_SIZE
            );
        }

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read file: {}", e))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotReader for FileSystemReader {
    fn read_snapshot(&self, path: &Path) -> Result<HostSnapshot> {
        let content = self
            .safe_read_file(path)
            .map_err(|e| ReconcileError::SnapshotReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        let snapshot = serde_json::from_str(&content).map_err(|e| {
            ReconcileError::SnapshotParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        Ok(snapshot)
    }
}
