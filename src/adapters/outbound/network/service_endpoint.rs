use crate::shared::error::ReconcileError;
use crate::shared::Result;
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;

/// Location and credentials of a remote service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint {
    pub remote_endpoint: String,
    pub username: String,
    pub password: String,
}

impl ServiceEndpoint {
    pub fn new(
        remote_endpoint: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            remote_endpoint: remote_endpoint.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Joins `path` onto the endpoint, tolerating slashes on either side
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.remote_endpoint.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Attaches basic-auth credentials when a username is configured
    pub(super) fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        if self.username.is_empty() {
            request
        } else {
            request.basic_auth(&self.username, Some(&self.password))
        }
    }
}

/// Builds the HTTP client shared by the network adapters
pub(super) fn build_client(timeout: Duration) -> Result<Client> {
    let user_agent = format!("oracle-license-reconciler/{}", env!("CARGO_PKG_VERSION"));
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// Rejects any non-2xx response
pub(super) fn ensure_success(service: &str, response: Response) -> Result<Response> {
    let status = response.status();
    if !status.is_success() {
        return Err(ReconcileError::RemoteServiceError {
            service: service.to_string(),
            details: format!("status code {}", status),
        }
        .into());
    }
    Ok(response)
}
