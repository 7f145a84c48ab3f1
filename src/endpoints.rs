//! Activities API paths
//!
//! - `GET /activities` - the catalog
//! - `POST /activities/{activity}/signup?email={email}` - sign up
//!
//! Both path segments and query values are percent-encoded here so every
//! transport sends the same request target.

use crate::model::SignupRequest;

/// Path of the catalog endpoint
pub const ACTIVITIES_PATH: &str = "/activities";

/// Request target for the catalog
pub fn catalog_path() -> &'static str {
    ACTIVITIES_PATH
}

/// Request target for a signup: activity in the path, email in the query
pub fn signup_path(request: &SignupRequest) -> String {
    format!(
        "{}/{}/signup?email={}",
        ACTIVITIES_PATH,
        urlencoding::encode(&request.activity),
        urlencoding::encode(&request.email)
    )
}

/// Join an API base URL and a request target. An empty base means the
/// page's own origin.
pub fn join(base_url: &str, target: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), target)
}
