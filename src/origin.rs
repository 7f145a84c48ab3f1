//! Page origin check
//!
//! The client only works when served from a network origin. A page opened
//! straight from disk has a `file:` origin and must not attempt any request.

/// Shown in the list region when the page is not served over HTTP
pub const SERVE_OVER_HTTP_MESSAGE: &str =
    "This page must be served over HTTP. See the tip below to start a simple local server.";

/// Operator hint revealed alongside [`SERVE_OVER_HTTP_MESSAGE`]
pub const SERVE_TIP: &str =
    "Start the backend (it serves this page at /static/index.html), or run `trunk serve` \
     in activity-signup-ui/ and open http://127.0.0.1:8080.";

/// Where the page (or the configured API base) lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOrigin {
    /// http, https or the empty same-origin prefix
    Network,
    /// Local filesystem reference
    LocalFile,
}

impl PageOrigin {
    /// Classify a browser protocol (`"file:"`) or a full URL
    /// (`"file:///tmp/index.html"`, `"http://host"`). A value without a scheme
    /// is treated as relative to a network origin.
    pub fn classify(url_or_protocol: &str) -> Self {
        let scheme = url_or_protocol
            .split_once(':')
            .map(|(scheme, _)| scheme)
            .unwrap_or_default();

        if scheme.trim().eq_ignore_ascii_case("file") {
            PageOrigin::LocalFile
        } else {
            PageOrigin::Network
        }
    }

    pub fn is_servable(self) -> bool {
        self == PageOrigin::Network
    }
}
