//! Root application component wiring shared state into context.
//!
//! ARCHITECTURE
//! ============
//! All shared state lives in `RwSignal` context providers created here, so
//! pages and components stay prop-light and every transition goes through
//! the `state` module.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::board::ActivityBoardPage;
use crate::state::catalog::CatalogState;
use crate::state::filters::FilterState;
use crate::state::notice::NoticeState;

/// Context handle that triggers a catalog refetch from any component.
#[derive(Clone, Copy)]
pub struct CatalogRefresh(pub Callback<()>);

/// Root component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let catalog = RwSignal::new(CatalogState::default());
    let filters = RwSignal::new(FilterState::default());
    let notice = RwSignal::new(NoticeState::default());
    provide_context(catalog);
    provide_context(filters);
    provide_context(notice);
    provide_context(CatalogRefresh(Callback::new(move |()| {
        spawn_catalog_fetch(catalog);
    })));

    view! {
        <Title text="Activity Board" />
        <ActivityBoardPage />
    }
}

/// Kick off a catalog fetch. The response lands through the sequenced
/// `apply_fetch` transition, so a reply that loses the race against a newer
/// fetch is dropped instead of overwriting fresher state.
pub fn spawn_catalog_fetch(catalog: RwSignal<CatalogState>) {
    #[cfg(feature = "csr")]
    {
        let seq = catalog.try_update(|state| state.begin_fetch()).unwrap_or_default();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_activities().await;
            if let Err(message) = &result {
                log::error!("catalog fetch failed: {message}");
            }
            catalog.update(|state| {
                state.apply_fetch(seq, result);
            });
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = catalog;
    }
}
