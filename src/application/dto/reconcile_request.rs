use crate::license_reconciliation::domain::HostSnapshot;
use crate::shared::error::ReconcileError;
use crate::shared::Result;

/// ReconcileRequest - one ingestion of one host
#[derive(Debug, Clone)]
pub struct ReconcileRequest {
    /// Snapshot being ingested; its license entries get annotated
    pub current: HostSnapshot,
    /// Last snapshot of the same host, absent on first ingestion
    pub previous: Option<HostSnapshot>,
}

impl ReconcileRequest {
    /// Creates a request after checking the two snapshots belong together
    ///
    /// # Errors
    /// Returns a validation error if the hostnames differ or the previous
    /// snapshot was captured after the current one
    pub fn new(current: HostSnapshot, previous: Option<HostSnapshot>) -> Result<Self> {
        if let Some(previous) = &previous {
            if previous.hostname != current.hostname {
                return Err(ReconcileError::Validation {
                    message: format!(
                        "previous snapshot belongs to host '{}', current snapshot to '{}'",
                        previous.hostname, current.hostname
                    ),
                }
                .into());
            }

            if previous.captured_at > current.captured_at {
                return Err(ReconcileError::Validation {
                    message: format!(
                        "previous snapshot of '{}' was captured after the current one ({} > {})",
                        current.hostname, previous.captured_at, current.captured_at
                    ),
                }
                .into());
            }
        }

        Ok(Self { current, previous })
    }
}
