use crate::license_reconciliation::domain::{Alert, AlertCode, HostSnapshot};
use serde::Serialize;
use std::fmt;

/// Reconciliation checks that depend on a remote service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconcileCheck {
    SecondaryEntitlement,
    LicenseTypeResolution,
}

impl fmt::Display for ReconcileCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconcileCheck::SecondaryEntitlement => write!(f, "secondary entitlement"),
            ReconcileCheck::LicenseTypeResolution => write!(f, "license type resolution"),
        }
    }
}

/// ReconcileResponse - outcome of one ingestion
///
/// The run never fails as a whole; checks that could not reach their data
/// source are listed in `degraded_checks`.
#[derive(Debug, Clone)]
pub struct ReconcileResponse {
    /// The current snapshot with license entries annotated
    pub snapshot: HostSnapshot,
    /// Every alert built, in emission order, whether or not it was delivered
    pub alerts: Vec<Alert>,
    /// Number of alerts accepted by the emitter
    pub alerts_submitted: usize,
    pub degraded_checks: Vec<ReconcileCheck>,
}

impl ReconcileResponse {
    pub fn new(snapshot: HostSnapshot) -> Self {
        Self {
            snapshot,
            alerts: Vec::new(),
            alerts_submitted: 0,
            degraded_checks: Vec::new(),
        }
    }

    pub fn alerts_with_code(&self, code: AlertCode) -> impl Iterator<Item = &Alert> {
        self.alerts.iter().filter(move |alert| alert.code() == code)
    }

    pub fn alerts_failed(&self) -> usize {
        self.alerts.len() - self.alerts_submitted
    }

    pub fn is_degraded(&self) -> bool {
        !self.degraded_checks.is_empty()
    }
}
