use crate::license_reconciliation::domain::Alert;
use crate::shared::Result;
use async_trait::async_trait;

/// AlertEmitter port for submitting alerts to the alerting sink
#[async_trait]
pub trait AlertEmitter: Send + Sync {
    /// Submits one fully-formed alert
    ///
    /// # Errors
    /// Returns an error if the sink rejects or cannot receive the alert.
    /// Callers log the error and carry on.
    async fn throw_alert(&self, alert: &Alert) -> Result<()>;
}

#[async_trait]
impl AlertEmitter for Box<dyn AlertEmitter> {
    async fn throw_alert(&self, alert: &Alert) -> Result<()> {
        self.as_ref().throw_alert(alert).await
    }
}
