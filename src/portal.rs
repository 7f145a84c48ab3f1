//! Activity Portal
//!
//! Native driver for the page: the activity lister and the signup submitter
//! running against an [`ActivityApi`] and a shared [`Page`].
//!
//! ## Data Flow
//!
//! 1. `start` checks the origin and runs the lister once
//! 2. `load_activities` fetches the catalog, then swaps it into the page
//! 3. `submit_signup` reads the form, posts it, shows the outcome notice and
//!    schedules the notice to hide after [`NOTICE_TIMEOUT`]
//!
//! The page lock is never held across a request, so overlapping submissions
//! each update the page when their own response arrives. The last notice
//! shown wins, and its timer replaces (aborts) the hide of any older notice.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::client::ActivityApi;
use crate::model::{SignupOutcome, SignupRequest};
use crate::origin::PageOrigin;
use crate::view::{NoticeTicket, Page, NOTICE_TIMEOUT};

/// Page shared between the portal and its notice timer
pub type SharedPage = Arc<RwLock<Page>>;

/// Lister + submitter over one page
pub struct Portal<A> {
    api: Arc<A>,
    page: SharedPage,
    timer: Arc<NoticeTimer>,
}

impl<A> Clone for Portal<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            page: Arc::clone(&self.page),
            timer: Arc::clone(&self.timer),
        }
    }
}

impl<A: ActivityApi + 'static> Portal<A> {
    pub fn new(api: A) -> Self {
        Self {
            api: Arc::new(api),
            page: Arc::new(RwLock::new(Page::new())),
            timer: Arc::new(NoticeTimer::new(NOTICE_TIMEOUT)),
        }
    }

    /// Handle to the shared page
    pub fn page(&self) -> SharedPage {
        Arc::clone(&self.page)
    }

    /// Copy of the page as it is right now
    pub async fn snapshot(&self) -> Page {
        self.page.read().await.clone()
    }

    /// Page-initialized entry point. Returns `false` when the origin check
    /// short-circuited and no request was made.
    pub async fn start(&self, origin: PageOrigin) -> bool {
        if !origin.is_servable() {
            tracing::warn!("Page is not served over HTTP, activities will not be loaded");
            self.page.write().await.show_serve_hint();
            return false;
        }

        self.load_activities().await;
        true
    }

    /// Fetch the catalog and render it. Failures replace the list with the
    /// diagnostic panel; nothing is retried.
    pub async fn load_activities(&self) {
        match self.api.fetch_catalog().await {
            Ok(catalog) => {
                tracing::info!(count = catalog.len(), "Loaded activities");
                self.page.write().await.show_catalog(&catalog);
            }
            Err(e) => {
                let probe_url = self.api.catalog_url();
                tracing::error!(error = %e, url = %probe_url, "Error fetching activities");
                self.page.write().await.show_catalog_error(probe_url);
            }
        }
    }

    /// Set the form fields, as a user typing and selecting would
    pub async fn fill_form(&self, email: impl Into<String>, activity: impl Into<String>) {
        let mut page = self.page.write().await;
        page.form.email = email.into();
        page.form.activity = activity.into();
    }

    /// Submit the form as it currently stands
    pub async fn submit_signup(&self) -> SignupOutcome {
        let request = self.page.read().await.form.to_request();
        let outcome = self.send_signup(&request).await;

        let ticket = self.page.write().await.apply_signup_outcome(&outcome);
        self.timer.schedule(Arc::clone(&self.page), ticket).await;

        outcome
    }

    async fn send_signup(&self, request: &SignupRequest) -> SignupOutcome {
        match self.api.sign_up(request).await {
            Ok(reply) => {
                let outcome = SignupOutcome::from_reply(reply);
                if outcome.is_success() {
                    tracing::info!(activity = %request.activity, "Signup accepted");
                } else {
                    tracing::warn!(
                        activity = %request.activity,
                        detail = %outcome.text(),
                        "Signup rejected"
                    );
                }
                outcome
            }
            Err(e) => {
                tracing::error!(error = %e, activity = %request.activity, "Error signing up");
                SignupOutcome::Failed
            }
        }
    }
}

/// Hides the notice after a fixed delay. Only the hide for the newest ticket
/// is kept alive; a stale ticket never replaces a newer pending hide.
pub struct NoticeTimer {
    delay: Duration,
    pending: Mutex<Option<(NoticeTicket, JoinHandle<()>)>>,
}

impl NoticeTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Hide the notice identified by `ticket` once the delay has elapsed.
    /// Does nothing when a newer ticket is already scheduled.
    pub async fn schedule(&self, page: SharedPage, ticket: NoticeTicket) {
        let mut pending = self.pending.lock().await;
        if matches!(&*pending, Some((scheduled, _)) if *scheduled > ticket) {
            tracing::debug!("Skipping hide for superseded notice");
            return;
        }

        let deadline = Instant::now() + self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if page.write().await.expire_notice(ticket) {
                tracing::debug!("Notice hidden");
            }
        });

        if let Some((_, previous)) = pending.replace((ticket, handle)) {
            previous.abort();
        }
    }
}
