//! Activities REST API Client
//!
//! HTTP transport for the two calls the page makes. The [`ActivityApi`] trait
//! is the seam the portal is written against; [`HttpActivityClient`] is the
//! reqwest implementation.

use async_trait::async_trait;
use reqwest::Client;

use crate::endpoints;
use crate::error::{ClientError, ClientResult};
use crate::model::{ActivityCatalog, SignupReply, SignupRequest, SignupResponse};

/// Default API base URL (the backend's development server)
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Requests the page issues against the backend
#[async_trait]
pub trait ActivityApi: Send + Sync {
    /// `GET /activities`. Non-2xx statuses are errors.
    async fn fetch_catalog(&self) -> ClientResult<ActivityCatalog>;

    /// `POST /activities/{activity}/signup?email={email}`. The body is decoded
    /// whatever the status; only transport and decode failures are errors.
    async fn sign_up(&self, request: &SignupRequest) -> ClientResult<SignupReply>;

    /// Base URL requests are sent to
    fn base_url(&self) -> &str;

    /// Full URL of the catalog endpoint, used in operator hints
    fn catalog_url(&self) -> String {
        endpoints::join(self.base_url(), endpoints::catalog_path())
    }
}

/// reqwest-backed client
#[derive(Debug, Clone)]
pub struct HttpActivityClient {
    client: Client,
    base_url: String,
}

impl HttpActivityClient {
    /// Create a client for `base_url`. No request timeout is set; the single
    /// attempt per user action waits for the transport to give up.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }
}

impl Default for HttpActivityClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[async_trait]
impl ActivityApi for HttpActivityClient {
    async fn fetch_catalog(&self) -> ClientResult<ActivityCatalog> {
        let path = endpoints::catalog_path();
        let url = endpoints::join(&self.base_url, path);

        tracing::debug!(url = %url, "Fetching activities");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        let body = response.text().await?;
        let catalog: ActivityCatalog = serde_json::from_str(&body)?;

        tracing::debug!(count = catalog.len(), "Activities received");
        Ok(catalog)
    }

    async fn sign_up(&self, request: &SignupRequest) -> ClientResult<SignupReply> {
        let url = endpoints::join(&self.base_url, &endpoints::signup_path(request));

        tracing::debug!(
            activity = %request.activity,
            email = %request.email,
            "Submitting signup"
        );

        let response = self.client.post(&url).send().await?;

        let success = response.status().is_success();
        let body = response.text().await?;
        let body: SignupResponse = serde_json::from_str(&body)?;

        Ok(SignupReply { success, body })
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
