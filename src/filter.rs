//! Filter controller.
//!
//! Derives the visible subset of the loaded collection from the current
//! [`FilterState`] and hands it to a [`Renderer`]. Filtering is a pure
//! function of the collection, the active source set, and the query, so it
//! can be exercised without any rendering at all.
//!
//! # Algorithm
//!
//! 1. An empty active set means "all sources".
//! 2. The query is lowercased but not trimmed.
//! 3. A non-empty active set keeps items whose `source` is an exact member.
//! 4. A non-empty query keeps items whose [`NewsItem::search_text`] contains it.
//! 5. Relative feed order is preserved throughout.

use crate::loader::distinct_sources;
use crate::models::NewsItem;
use crate::render::Renderer;
use crate::state::{AppState, FilterState};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Compute the ordered subsequence of `items` matching `sources` and `query`.
pub fn apply_filters<'a>(
    items: &'a [NewsItem],
    sources: &BTreeSet<String>,
    query: &str,
) -> Vec<&'a NewsItem> {
    let q = query.to_lowercase();
    items
        .iter()
        .filter(|item| sources.is_empty() || sources.contains(&item.source))
        .filter(|item| q.is_empty() || item.search_text().contains(&q))
        .collect()
}

/// Owns the loaded collection and the filter state, and reacts to UI events.
#[derive(Debug)]
pub struct FilterController {
    app: AppState,
    filters: FilterState,
    sources: Vec<String>,
}

impl FilterController {
    pub fn new(app: AppState) -> Self {
        let sources = distinct_sources(app.news());
        Self {
            app,
            filters: FilterState::default(),
            sources,
        }
    }

    pub fn app(&self) -> &AppState {
        &self.app
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Distinct sources of the loaded collection; one toggle each.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Handle a click on the toggle for `source`.
    ///
    /// Returns the new active state, or `None` when no toggle exists for
    /// that source and nothing changed.
    pub fn on_toggle(&mut self, source: &str) -> Option<bool> {
        if !self.sources.iter().any(|s| s == source) {
            warn!(%source, "No filter button for source; ignoring toggle");
            return None;
        }
        let active = self.filters.toggle(source);
        debug!(%source, active, "Toggled source filter");
        Some(active)
    }

    /// Handle a change of the search box contents.
    pub fn on_query_input(&mut self, text: &str) {
        self.filters.set_query(text);
        debug!(query = %text, "Updated search query");
    }

    pub fn on_clear(&mut self) {
        self.filters.clear();
        debug!("Cleared all filters");
    }

    /// The items currently visible under the active filters.
    pub fn visible(&self) -> Vec<&NewsItem> {
        apply_filters(
            self.app.news(),
            self.filters.active_sources(),
            self.filters.query(),
        )
    }

    /// Recompute the visible set and hand it to `renderer`.
    ///
    /// Returns the number of rendered items.
    pub fn refresh<R: Renderer>(&self, renderer: &mut R) -> usize {
        let visible = self.visible();
        debug!(
            visible = visible.len(),
            total = self.app.news().len(),
            "Applying filters"
        );
        renderer.render(&visible);
        visible.len()
    }
}
