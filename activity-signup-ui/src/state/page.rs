//! Page State
//!
//! The shared `Page` model wrapped in a signal, plus the notice hide timer.

use activity_signup::{NoticeTicket, Page, SignupOutcome, NOTICE_TIMEOUT};
use gloo_timers::callback::Timeout;
use leptos::*;

/// Page state provided to all components
#[derive(Clone, Copy)]
pub struct PageState {
    /// Everything the page shows
    pub page: RwSignal<Page>,
    /// Pending notice hide; replacing it drops (cancels) the previous timeout
    hide_timer: StoredValue<Option<Timeout>>,
}

/// Provide page state to the component tree
pub fn provide_page_state() -> PageState {
    let state = PageState {
        page: create_rw_signal(Page::new()),
        hide_timer: store_value(None),
    };

    provide_context(state);
    state
}

/// Page state from context
pub fn use_page_state() -> PageState {
    use_context::<PageState>().expect("PageState not found")
}

impl PageState {
    /// Show the notice for a signup outcome and (re)start its hide timer
    pub fn show_outcome(&self, outcome: &SignupOutcome) {
        if let Some(ticket) = self.page.try_update(|page| page.apply_signup_outcome(outcome)) {
            self.schedule_hide(ticket);
        }
    }

    fn schedule_hide(&self, ticket: NoticeTicket) {
        let page = self.page;
        let timeout = Timeout::new(NOTICE_TIMEOUT.as_millis() as u32, move || {
            page.update(|page| {
                page.expire_notice(ticket);
            });
        });

        self.hide_timer.set_value(Some(timeout));
    }
}

/// Protocol of the current page, e.g. `"http:"` or `"file:"`
pub fn current_protocol() -> String {
    web_sys::window()
        .and_then(|window| window.location().protocol().ok())
        .unwrap_or_default()
}
