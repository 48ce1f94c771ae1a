use crate::license_reconciliation::domain::{Alert, AlertSeverity};
use crate::ports::outbound::AlertEmitter;
use crate::shared::Result;
use async_trait::async_trait;
use owo_colors::OwoColorize;

/// ConsoleAlertEmitter adapter printing alerts to stderr
///
/// Used for dry runs, where nothing is submitted to the alert service.
pub struct ConsoleAlertEmitter;

impl ConsoleAlertEmitter {
    pub fn new() -> Self {
        Self
    }

    /// Single-line rendering of an alert, without colors
    pub fn render(alert: &Alert) -> String {
        format!(
            "[{}] {} {}: {}",
            alert.severity(),
            alert.code(),
            alert.hostname().unwrap_or("-"),
            alert.description()
        )
    }
}

impl Default for ConsoleAlertEmitter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AlertEmitter for ConsoleAlertEmitter {
    async fn throw_alert(&self, alert: &Alert) -> Result<()> {
        let line = Self::render(alert);
        match alert.severity() {
            AlertSeverity::Critical => eprintln!("{}", line.red().bold()),
            AlertSeverity::Warning => eprintln!("{}", line.yellow()),
            AlertSeverity::Info => eprintln!("{}", line.cyan()),
        }
        Ok(())
    }
}
