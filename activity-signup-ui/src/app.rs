//! App Root Component
//!
//! Page layout, page state provider and the page-initialized entry point.

use activity_signup::PageOrigin;
use leptos::*;

use crate::actions;
use crate::components::{ActivityList, NoticeBanner, ServeTip, SignupForm};
use crate::state::{current_protocol, provide_page_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_page_state();

    // A page opened from disk cannot reach the API; say so and stop here.
    if PageOrigin::classify(&current_protocol()).is_servable() {
        spawn_local(actions::load_activities(state));
    } else {
        state.page.update(|page| page.show_serve_hint());
    }

    view! {
        <header>
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>

        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList />
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm />
                <NoticeBanner />
            </section>

            <ServeTip />
        </main>
    }
}
