//! Sign-up form for registering an email with an activity.
//!
//! DESIGN
//! ======
//! The activity selector derives from the full catalog snapshot, not the
//! filtered view, and rebuilds once per applied fetch — filtering can never
//! duplicate its options. Submission posts the signup, surfaces the result
//! on the shared notice, and refetches the catalog on success.

use leptos::prelude::*;

use crate::app::CatalogRefresh;
use crate::state::catalog::CatalogState;
#[cfg(feature = "csr")]
use crate::state::notice::NoticeKind;
use crate::state::notice::NoticeState;

/// Signup form with an email input and a full-catalog activity selector.
#[component]
pub fn SignupForm() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let notice = expect_context::<RwSignal<NoticeState>>();
    let refresh = expect_context::<CatalogRefresh>();

    let email = RwSignal::new(String::new());
    let selected = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get().trim().to_owned();
        let activity_value = selected.get();
        if email_value.is_empty() || activity_value.is_empty() {
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::signup(&activity_value, &email_value).await {
                Ok(message) => {
                    notice.update(|n| {
                        n.show(NoticeKind::Success, message);
                    });
                    email.set(String::new());
                    selected.set(String::new());
                    refresh.0.run(());
                }
                Err(crate::net::api::ActionError::Rejected(detail)) => {
                    notice.update(|n| {
                        n.show(NoticeKind::Error, detail);
                    });
                }
                Err(crate::net::api::ActionError::Transport(err)) => {
                    log::error!("signup failed: {err}");
                    notice.update(|n| {
                        n.show(NoticeKind::Error, crate::net::api::signup_failed_copy());
                    });
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email_value, activity_value, notice, refresh);
        }
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <label for="email">"Email:"</label>
            <input
                id="email"
                type="email"
                required=true
                placeholder="your-email@example.com"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <label for="activity">"Activity:"</label>
            <select
                id="activity"
                required=true
                prop:value=move || selected.get()
                on:change=move |ev| selected.set(event_target_value(&ev))
            >
                <option value="">"-- Select an activity --"</option>
                {move || {
                    catalog
                        .get()
                        .names()
                        .into_iter()
                        .map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
                        .collect::<Vec<_>>()
                }}
            </select>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
