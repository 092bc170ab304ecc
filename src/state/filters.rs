//! Filter controls and the pure filtered-view derivation.
//!
//! DESIGN
//! ======
//! Control values live in one value object and the view derivation is a
//! pure function of (catalog entries, filter state), so the filter rules
//! are testable without reading ambient UI state.

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

use std::cmp::Ordering;

use crate::net::types::Activity;

/// Sort order for the activity list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Order by activity name.
    #[default]
    Name,
    /// Order by the optional `time` field; entries without one keep their
    /// relative position.
    Time,
}

impl SortKey {
    /// Parse a sort-control value; unknown values fall back to name order.
    #[must_use]
    pub fn from_control(value: &str) -> Self {
        match value {
            "time" => Self::Time,
            _ => Self::Name,
        }
    }

    /// The sort-control value for this key.
    #[must_use]
    pub fn as_control(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Time => "time",
        }
    }
}

/// Current values of the category, sort, and search controls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterState {
    /// Exact category to keep; empty means no category filter.
    pub category: String,
    /// Active sort order.
    pub sort: SortKey,
    /// Raw search box text; trimmed and lower-cased before matching.
    pub search: String,
}

/// Derive the filtered view from the catalog snapshot.
///
/// Category matches exactly and case-sensitively; search matches
/// case-insensitively against name or description. Name sort is stable;
/// time sort reorders only the entries that carry a `time`, so time-less
/// entries keep their encounter order.
#[must_use]
pub fn apply_filters(entries: &[(String, Activity)], filters: &FilterState) -> Vec<(String, Activity)> {
    let search = filters.search.trim().to_lowercase();
    let mut view: Vec<(String, Activity)> = entries
        .iter()
        .filter(|(name, activity)| {
            let category_ok = filters.category.is_empty()
                || activity.category.as_deref() == Some(filters.category.as_str());
            let search_ok = search.is_empty()
                || name.to_lowercase().contains(&search)
                || activity.description.to_lowercase().contains(&search);
            category_ok && search_ok
        })
        .cloned()
        .collect();
    match filters.sort {
        SortKey::Name => view.sort_by(|(a, _), (b, _)| compare_display(a, b)),
        SortKey::Time => sort_timed_in_place(&mut view),
    }
    view
}

/// Reorder only the entries that carry a `time`, leaving the rest at their
/// positions. A comparator that skips missing times induces no total order,
/// so the permutation is restricted to the timed subset.
fn sort_timed_in_place(view: &mut [(String, Activity)]) {
    let slots: Vec<usize> = view
        .iter()
        .enumerate()
        .filter_map(|(idx, (_, activity))| activity.time.is_some().then_some(idx))
        .collect();
    let mut timed: Vec<(String, Activity)> = slots.iter().map(|&idx| view[idx].clone()).collect();
    timed.sort_by(|(_, a), (_, b)| match (&a.time, &b.time) {
        (Some(a), Some(b)) => compare_display(a, b),
        _ => Ordering::Equal,
    });
    for (&idx, entry) in slots.iter().zip(timed) {
        view[idx] = entry;
    }
}

/// Case-insensitive ordering with a raw-string tiebreak, so mixed-case names
/// group predictably.
fn compare_display(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}
