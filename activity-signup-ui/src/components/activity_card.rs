//! Activity Card Component
//!
//! One activity with its schedule, availability and participant roster.
//! Text goes through Leptos text nodes, so server strings are never parsed
//! as markup.

use activity_signup::view::NO_PARTICIPANTS_TEXT;
use activity_signup::{ActivityCard, Roster};
use leptos::*;

#[component]
pub fn ActivityCardView(card: ActivityCard) -> impl IntoView {
    let availability = card.availability();

    view! {
        <div class="activity-card">
            <h4>{card.name}</h4>
            <p>{card.description}</p>
            <p><strong>"Schedule:"</strong>" "{card.schedule}</p>
            <p><strong>"Availability:"</strong>" "{availability}</p>
            <RosterView roster=card.roster />
        </div>
    }
}

#[component]
fn RosterView(roster: Roster) -> impl IntoView {
    let heading = roster.heading();

    match roster {
        Roster::Empty => view! {
            <div class="participants-section no-participants">{NO_PARTICIPANTS_TEXT}</div>
        }
        .into_view(),
        Roster::Members(items) => view! {
            <div class="participants-section">
                <strong>{heading}</strong>
                <ul class="participants-list">
                    {items
                        .into_iter()
                        .map(|item| view! {
                            <li class="participant-item">
                                <span class="avatar" aria-hidden="true">{item.initials}</span>
                                <span class="participant-email">{item.email}</span>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </div>
        }
        .into_view(),
    }
}
