//! Signup Form Component
//!
//! Email field plus activity selector. Submitting never disables the form,
//! so overlapping signups are possible; the latest notice wins.

use activity_signup::view::SELECT_PLACEHOLDER;
use leptos::*;

use crate::actions;
use crate::state::use_page_state;

#[component]
pub fn SignupForm() -> impl IntoView {
    let state = use_page_state();
    let page = state.page;

    let email = create_memo(move |_| page.with(|page| page.form.email.clone()));
    let activity = create_memo(move |_| page.with(|page| page.form.activity.clone()));
    let options = create_memo(move |_| page.with(|page| page.activity_options.clone()));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        spawn_local(actions::submit_signup(state));
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    placeholder="your-email@mergington.edu"
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        page.update(|page| page.form.email = value);
                    }
                />
            </div>

            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    prop:value=move || activity.get()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        page.update(|page| page.form.activity = value);
                    }
                >
                    <option value="">{SELECT_PLACEHOLDER}</option>
                    {move || {
                        options
                            .get()
                            .into_iter()
                            .map(|name| view! { <option value=name.clone()>{name}</option> })
                            .collect_view()
                    }}
                </select>
            </div>

            <button type="submit">"Sign Up"</button>
        </form>
    }
}
