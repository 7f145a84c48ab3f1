//! Notice Component
//!
//! Shows the latest signup outcome; hidden again by the page state timer.

use leptos::*;

use crate::state::use_page_state;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let state = use_page_state();
    let notice = create_memo(move |_| {
        state
            .page
            .with(|page| (page.notice.last().cloned(), page.notice.is_visible()))
    });

    let class = move || {
        let (last, visible) = notice.get();
        let kind = last.map(|n| n.kind.class()).unwrap_or_default();
        if visible {
            kind.to_string()
        } else {
            format!("{} hidden", kind).trim().to_string()
        }
    };

    view! {
        <div id="message" class=class>
            {move || notice.get().0.map(|n| n.text).unwrap_or_default()}
        </div>
    }
}
