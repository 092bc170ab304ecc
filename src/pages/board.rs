//! Activity board page — fetch orchestration, filtering, and actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only screen. It fetches the catalog once on mount, derives
//! the filtered view reactively, and funnels signup/unregister results into
//! the shared notice state. Every failure path leaves the page interactive.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use leptos::prelude::*;

use crate::app::CatalogRefresh;
use crate::components::activity_card::ActivityCard;
use crate::components::filters_toolbar::FiltersToolbar;
use crate::components::message_area::MessageArea;
use crate::components::signup_form::SignupForm;
use crate::state::catalog::CatalogState;
use crate::state::filters::{FilterState, apply_filters};
#[cfg(feature = "csr")]
use crate::state::notice::NoticeKind;
use crate::state::notice::NoticeState;

/// Fixed copy for the list area when the catalog cannot be loaded.
const LOAD_FAILED_COPY: &str = "Failed to load activities. Please try again later.";

/// Placeholder copy for an empty activity list.
fn empty_list_copy(initial_load: bool) -> &'static str {
    if initial_load {
        "Loading activities..."
    } else {
        "No activities found."
    }
}

/// The activity board screen.
#[component]
pub fn ActivityBoardPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let filters = expect_context::<RwSignal<FilterState>>();
    let notice = expect_context::<RwSignal<NoticeState>>();
    let refresh = expect_context::<CatalogRefresh>();

    // Initial load.
    let started = RwSignal::new(false);
    Effect::new(move || {
        if started.get() {
            return;
        }
        started.set(true);
        refresh.0.run(());
    });

    let filtered = move || apply_filters(&catalog.get().entries, &filters.get());

    let on_unregister = Callback::new(move |(activity, email): (String, String)| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::unregister(&activity, &email).await {
                Ok(message) => {
                    notice.update(|n| {
                        n.show(NoticeKind::Success, message);
                    });
                    refresh.0.run(());
                }
                Err(crate::net::api::ActionError::Rejected(detail)) => {
                    notice.update(|n| {
                        n.show(NoticeKind::Error, detail);
                    });
                }
                Err(crate::net::api::ActionError::Transport(err)) => {
                    log::error!("unregister failed: {err}");
                    notice.update(|n| {
                        n.show(NoticeKind::Error, crate::net::api::unregister_failed_copy());
                    });
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (activity, email, notice);
        }
    });

    view! {
        <header>
            <h1>"Activity Board"</h1>
            <p>"Discover and sign up for activities"</p>
        </header>
        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <FiltersToolbar />
                <div id="activities-list">
                    <Show
                        when=move || catalog.get().error.is_none()
                        fallback=move || view! { <p>{LOAD_FAILED_COPY}</p> }
                    >
                        <Show
                            when=move || !filtered().is_empty()
                            fallback=move || {
                                view! {
                                    <p>
                                        {move || {
                                            let state = catalog.get();
                                            empty_list_copy(state.loading && state.entries.is_empty())
                                        }}
                                    </p>
                                }
                            }
                        >
                            {move || {
                                filtered()
                                    .into_iter()
                                    .map(|(name, activity)| {
                                        view! {
                                            <ActivityCard
                                                name=name
                                                activity=activity
                                                on_unregister=on_unregister
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </Show>
                    </Show>
                </div>
            </section>
            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm />
                <MessageArea />
            </section>
        </main>
    }
}
