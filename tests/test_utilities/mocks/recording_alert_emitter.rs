use async_trait::async_trait;
use oracle_license_reconciler::prelude::*;
use std::sync::{Arc, Mutex};

/// AlertEmitter that records every alert it accepts
///
/// Clones share the recorded alerts, so a test can keep one handle while
/// the use case owns another.
#[derive(Clone, Default)]
pub struct RecordingAlertEmitter {
    alerts: Arc<Mutex<Vec<Alert>>>,
    pub should_fail: bool,
}

impl RecordingAlertEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn codes(&self) -> Vec<AlertCode> {
        self.alerts.lock().unwrap().iter().map(Alert::code).collect()
    }
}

#[async_trait]
impl AlertEmitter for RecordingAlertEmitter {
    async fn throw_alert(&self, alert: &Alert) -> Result<()> {
        if self.should_fail {
            anyhow::bail!("Mock alert service failure");
        }
        self.alerts.lock().unwrap().push(alert.clone());
        Ok(())
    }
}
