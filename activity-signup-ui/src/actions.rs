//! Page Actions
//!
//! The activity lister (run once when the page starts) and the signup
//! submitter (run on every form submission).

use activity_signup::SignupOutcome;
use leptos::*;

use crate::api;
use crate::state::PageState;

/// Fetch the catalog and render it, or show the diagnostic panel
pub async fn load_activities(state: PageState) {
    match api::fetch_activities().await {
        Ok(catalog) => {
            state.page.update(|page| page.show_catalog(&catalog));
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Error fetching activities: {}", e).into());
            let probe_url = api::catalog_url();
            state.page.update(|page| page.show_catalog_error(probe_url));
        }
    }
}

/// Post the form as it stands and show the resulting notice
pub async fn submit_signup(state: PageState) {
    let request = state.page.with_untracked(|page| page.form.to_request());

    let outcome = match api::sign_up(&request).await {
        Ok(reply) => SignupOutcome::from_reply(reply),
        Err(e) => {
            web_sys::console::error_1(&format!("Error signing up: {}", e).into());
            SignupOutcome::Failed
        }
    };

    state.show_outcome(&outcome);
}
