use super::service_endpoint::{build_client, ensure_success, ServiceEndpoint};
use crate::license_reconciliation::domain::Alert;
use crate::ports::outbound::AlertEmitter;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use std::time::Duration;

const ALERTS_PATH: &str = "alerts";
const SERVICE_NAME: &str = "Alert service";

/// AlertServiceClient adapter posting alerts to the alert service
pub struct AlertServiceClient {
    client: reqwest::Client,
    endpoint: ServiceEndpoint,
}

impl AlertServiceClient {
    pub fn new(endpoint: ServiceEndpoint, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            endpoint,
        })
    }
}

#[async_trait]
impl AlertEmitter for AlertServiceClient {
    async fn throw_alert(&self, alert: &Alert) -> Result<()> {
        let url = self.endpoint.url(ALERTS_PATH);

        let request = self.client.post(&url).json(alert);
        let response = self
            .endpoint
            .authorize(request)
            .send()
            .await
            .with_context(|| format!("Can't throw {} alert", alert.code()))?;

        ensure_success(SERVICE_NAME, response)?;
        tracing::debug!(id = %alert.id(), code = %alert.code(), "Alert submitted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let endpoint = ServiceEndpoint::new("http://localhost:11114", "", "");
        assert!(AlertServiceClient::new(endpoint, Duration::from_secs(5)).is_ok());
    }
}
