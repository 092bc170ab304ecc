//! Catalog snapshot state and fetch sequencing.
//!
//! DESIGN
//! ======
//! Every fetch claims a monotonic sequence number and a response only lands
//! if it is newer than the last applied one, so overlapping refreshes cannot
//! clobber fresher data with a stale snapshot.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashSet;

use crate::net::types::{Activity, Catalog};

/// Activity catalog snapshot plus load bookkeeping.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    /// Entries in backend order; replaced wholesale on every applied fetch.
    pub entries: Vec<(String, Activity)>,
    /// True while a fetch newer than the applied snapshot is in flight.
    pub loading: bool,
    /// Set when the most recently applied fetch failed.
    pub error: Option<String>,
    issued_seq: u64,
    applied_seq: u64,
}

impl CatalogState {
    /// Claim a sequence number for a fetch that is about to start.
    pub fn begin_fetch(&mut self) -> u64 {
        self.issued_seq += 1;
        self.loading = true;
        self.issued_seq
    }

    /// Apply a finished fetch. Responses older than the last applied one are
    /// dropped; returns whether the snapshot changed.
    ///
    /// A failed fetch keeps the previous entries in memory — only the error
    /// display changes.
    pub fn apply_fetch(&mut self, seq: u64, result: Result<Catalog, String>) -> bool {
        if seq <= self.applied_seq {
            return false;
        }
        self.applied_seq = seq;
        if self.issued_seq == seq {
            self.loading = false;
        }
        match result {
            Ok(catalog) => {
                self.entries = catalog.0;
                self.error = None;
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
        true
    }

    /// Distinct non-empty categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for (_, activity) in &self.entries {
            if let Some(category) = &activity.category
                && !category.is_empty()
                && seen.insert(category.clone())
            {
                out.push(category.clone());
            }
        }
        out
    }

    /// Activity names in backend order, for the signup selector.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }
}
