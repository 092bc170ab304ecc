//! Category/sort/search toolbar above the activity list.
//!
//! DESIGN
//! ======
//! Controls write straight into the shared `FilterState`; the filtered view
//! is derived reactively from it, so every keystroke and selection
//! re-filters without an explicit render call. Category options rebuild
//! from the current snapshot, so stale categories never survive a refetch.

use leptos::prelude::*;

use crate::state::catalog::CatalogState;
use crate::state::filters::{FilterState, SortKey};

/// Filter toolbar with a category selector, sort selector, and search box.
#[component]
pub fn FiltersToolbar() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let filters = expect_context::<RwSignal<FilterState>>();

    view! {
        <div id="filters-toolbar">
            <label for="filter-category">"Category:"</label>
            <select
                id="filter-category"
                prop:value=move || filters.get().category
                on:change=move |ev| {
                    filters.update(|f| f.category = event_target_value(&ev));
                }
            >
                <option value="">"All"</option>
                {move || {
                    catalog
                        .get()
                        .categories()
                        .into_iter()
                        .map(|category| {
                            view! { <option value=category.clone()>{category.clone()}</option> }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
            <label for="filter-sort">"Sort by:"</label>
            <select
                id="filter-sort"
                prop:value=move || filters.get().sort.as_control()
                on:change=move |ev| {
                    filters.update(|f| f.sort = SortKey::from_control(&event_target_value(&ev)));
                }
            >
                <option value="name">"Name"</option>
                <option value="time">"Time"</option>
            </select>
            <label for="filter-search">"Search:"</label>
            <input
                id="filter-search"
                type="text"
                placeholder="Search activities..."
                prop:value=move || filters.get().search
                on:input=move |ev| {
                    filters.update(|f| f.search = event_target_value(&ev));
                }
            />
        </div>
    }
}
