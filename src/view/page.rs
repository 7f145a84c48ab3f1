//! Page state
//!
//! `Page` is the UI context shared by the lister and the submitter: the
//! activity list region, the signup form, the selection options, the notice
//! region and the serve tip. Both front-ends (terminal and browser) render
//! from it, and every mutation the two components make goes through the
//! methods below.

use crate::model::{ActivityCatalog, SignupOutcome, SignupRequest};
use crate::origin::SERVE_OVER_HTTP_MESSAGE;

use super::card::ActivityCard;
use super::notice::{Notice, NoticeBoard, NoticeTicket};

/// Text of the list region before the catalog arrives
pub const LOADING_TEXT: &str = "Loading activities...";

/// Label of the empty first option of the activity selector
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// Main diagnostic when the catalog cannot be loaded
pub const CATALOG_UNAVAILABLE_MESSAGE: &str =
    "Failed to load activities. Check that the backend is running and accessible at /activities.";

/// Static diagnostic replacing the activity list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Page opened from a local file
    ServeOverHttp,
    /// Catalog request failed; carries the URL an operator can probe
    CatalogUnavailable { probe_url: String },
}

impl Diagnostic {
    pub fn message(&self) -> &'static str {
        match self {
            Diagnostic::ServeOverHttp => SERVE_OVER_HTTP_MESSAGE,
            Diagnostic::CatalogUnavailable { .. } => CATALOG_UNAVAILABLE_MESSAGE,
        }
    }

    /// Secondary hint line, if any
    pub fn hint(&self) -> Option<String> {
        match self {
            Diagnostic::ServeOverHttp => None,
            Diagnostic::CatalogUnavailable { probe_url } => Some(format!(
                "Quick test: curl -v {} (adjust port if needed)",
                probe_url
            )),
        }
    }
}

/// Content of the activity list region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRegion {
    Loading,
    Activities(Vec<ActivityCard>),
    Diagnostic(Diagnostic),
}

/// Current values of the signup form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    /// Selected option value; empty means the placeholder
    pub activity: String,
}

impl SignupForm {
    /// Snapshot the fields as a request, exactly as entered
    pub fn to_request(&self) -> SignupRequest {
        SignupRequest::new(self.activity.clone(), self.email.clone())
    }

    pub fn reset(&mut self) {
        self.email.clear();
        self.activity.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub list: ListRegion,
    /// Option values of the activity selector, placeholder excluded
    pub activity_options: Vec<String>,
    pub form: SignupForm,
    pub notice: NoticeBoard,
    pub serve_tip_visible: bool,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    pub fn new() -> Self {
        Self {
            list: ListRegion::Loading,
            activity_options: Vec::new(),
            form: SignupForm::default(),
            notice: NoticeBoard::new(),
            serve_tip_visible: false,
        }
    }

    /// Environment short-circuit: the page is not served over a network origin
    pub fn show_serve_hint(&mut self) {
        self.list = ListRegion::Diagnostic(Diagnostic::ServeOverHttp);
        self.serve_tip_visible = true;
    }

    /// Replace the list and selector with the catalog contents. Calling this
    /// repeatedly never accumulates cards or options.
    pub fn show_catalog(&mut self, catalog: &ActivityCatalog) {
        self.list = ListRegion::Activities(
            catalog
                .iter()
                .map(|(name, record)| ActivityCard::new(name, record))
                .collect(),
        );
        self.activity_options = catalog.names().map(str::to_string).collect();
    }

    /// Catalog failure: swap the list for the diagnostic panel
    pub fn show_catalog_error(&mut self, probe_url: impl Into<String>) {
        self.list = ListRegion::Diagnostic(Diagnostic::CatalogUnavailable {
            probe_url: probe_url.into(),
        });
    }

    /// Show the notice for a signup outcome, resetting the form on success
    pub fn apply_signup_outcome(&mut self, outcome: &SignupOutcome) -> NoticeTicket {
        if outcome.is_success() {
            self.form.reset();
        }
        self.notice.show(Notice::from(outcome))
    }

    pub fn expire_notice(&mut self, ticket: NoticeTicket) -> bool {
        self.notice.expire(ticket)
    }

    /// Rendered cards, empty unless the catalog is shown
    pub fn cards(&self) -> &[ActivityCard] {
        match &self.list {
            ListRegion::Activities(cards) => cards,
            _ => &[],
        }
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match &self.list {
            ListRegion::Diagnostic(diagnostic) => Some(diagnostic),
            _ => None,
        }
    }
}
