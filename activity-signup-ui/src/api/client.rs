//! HTTP API Client
//!
//! Functions for communicating with the activities REST API.

use activity_signup::endpoints;
use activity_signup::{
    ActivityCatalog, ClientError, ClientResult, SignupReply, SignupRequest, SignupResponse,
};
use gloo_net::http::Request;

/// Local storage key of an API base override
pub const API_BASE_KEY: &str = "activity_signup_api_url";

/// Get the API base URL from local storage. Empty means the page's own
/// origin, which is how the backend serves this page.
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten());

    normalize_base(stored)
}

fn normalize_base(stored: Option<String>) -> String {
    stored
        .map(|url| url.trim().trim_end_matches('/').to_string())
        .unwrap_or_default()
}

/// Absolute URL of the catalog endpoint, for the operator hint
pub fn catalog_url() -> String {
    let origin = web_sys::window().and_then(|window| window.location().origin().ok());
    probe_url(&get_api_base(), origin)
}

fn probe_url(api_base: &str, page_origin: Option<String>) -> String {
    let base = if api_base.is_empty() {
        page_origin.unwrap_or_default()
    } else {
        api_base.to_string()
    };
    endpoints::join(&base, endpoints::catalog_path())
}

/// Fetch the activity catalog
pub async fn fetch_activities() -> ClientResult<ActivityCatalog> {
    let path = endpoints::catalog_path();

    let response = Request::get(&endpoints::join(&get_api_base(), path))
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ClientError::Status {
            status: response.status(),
            path: path.to_string(),
        });
    }

    response
        .json::<ActivityCatalog>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

/// Sign up for an activity. The body is decoded whatever the status.
pub async fn sign_up(request: &SignupRequest) -> ClientResult<SignupReply> {
    let url = endpoints::join(&get_api_base(), &endpoints::signup_path(request));

    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    let body: SignupResponse = response
        .json()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))?;

    Ok(SignupReply {
        success: response.ok(),
        body,
    })
}
