//! Activity List Component
//!
//! The list region: loading text, the cards, or a diagnostic panel.

use activity_signup::view::LOADING_TEXT;
use activity_signup::ListRegion;
use leptos::*;

use super::activity_card::ActivityCardView;
use crate::state::use_page_state;

#[component]
pub fn ActivityList() -> impl IntoView {
    let state = use_page_state();
    let list = create_memo(move |_| state.page.with(|page| page.list.clone()));

    view! {
        <div id="activities-list">
            {move || match list.get() {
                ListRegion::Loading => view! { <p>{LOADING_TEXT}</p> }.into_view(),
                ListRegion::Activities(cards) => cards
                    .into_iter()
                    .map(|card| view! { <ActivityCardView card=card /> })
                    .collect_view(),
                ListRegion::Diagnostic(diagnostic) => view! {
                    <p class="error">{diagnostic.message()}</p>
                    {diagnostic.hint().map(|hint| view! { <p class="info">{hint}</p> })}
                }
                .into_view(),
            }}
        </div>
    }
}
