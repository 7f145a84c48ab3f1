//! Serve Tip Component
//!
//! Hidden unless the page was opened from a local file.

use activity_signup::origin::SERVE_TIP;
use leptos::*;

use crate::state::use_page_state;

#[component]
pub fn ServeTip() -> impl IntoView {
    let state = use_page_state();
    let visible = create_memo(move |_| state.page.with(|page| page.serve_tip_visible));

    view! {
        <div id="serve-tip" class=move || {
            if visible.get() { "info" } else { "info hidden" }
        }>
            <strong>"Tip:"</strong>" "{SERVE_TIP}
        </div>
    }
}
