//! Application and filter state.
//!
//! [`AppState`] owns the collection produced by the loader. It is written
//! once at construction and only read afterwards.
//!
//! [`FilterState`] is the UI-facing state: which source toggles are on and
//! what the search box currently contains. Button markup is derived from it,
//! never the other way round.

use crate::models::NewsItem;
use std::collections::BTreeSet;

/// The loaded news collection for the lifetime of a session.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    news: Vec<NewsItem>,
}

impl AppState {
    pub fn new(news: Vec<NewsItem>) -> Self {
        Self { news }
    }

    /// Read accessor for the full collection, in feed order.
    pub fn news(&self) -> &[NewsItem] {
        &self.news
    }
}

/// Active source toggles plus the raw search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    active_sources: BTreeSet<String>,
    query: String,
}

impl FilterState {
    /// Flip the toggle for `source`. Returns `true` if it is now active.
    pub fn toggle(&mut self, source: &str) -> bool {
        if self.active_sources.remove(source) {
            false
        } else {
            self.active_sources.insert(source.to_string());
            true
        }
    }

    pub fn is_active(&self, source: &str) -> bool {
        self.active_sources.contains(source)
    }

    pub fn active_sources(&self) -> &BTreeSet<String> {
        &self.active_sources
    }

    /// Replace the query with the current contents of the search box.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Turn every toggle off and empty the search box.
    pub fn clear(&mut self) {
        self.active_sources.clear();
        self.query.clear();
    }

    /// True when neither a source filter nor a query is in effect.
    pub fn is_empty(&self) -> bool {
        self.active_sources.is_empty() && self.query.is_empty()
    }
}
