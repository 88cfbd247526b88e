//! Filter buttons and the surrounding HTML document.
//!
//! The written page is a snapshot of one filter state. Its buttons and
//! search input are rendered `disabled`; state changes go through the
//! session, which rewrites the file.

use super::{Card, CardGrid};
use crate::state::FilterState;
use askama::Template;
use chrono::{DateTime, Local};

/// One toggle control in the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub source: String,
    pub active: bool,
}

/// The `source-filters` container: one toggle per distinct source.
#[derive(Debug, Clone, Default, Template)]
#[template(path = "filters.html")]
pub struct FilterBar {
    buttons: Vec<FilterButton>,
}

impl FilterBar {
    /// Build the bar for `sources`, marking each button from `filters`.
    pub fn new(sources: &[String], filters: &FilterState) -> Self {
        Self {
            buttons: sources
                .iter()
                .map(|s| FilterButton {
                    source: s.clone(),
                    active: filters.is_active(s),
                })
                .collect(),
        }
    }

    pub fn buttons(&self) -> &[FilterButton] {
        &self.buttons
    }

    pub fn to_html(&self) -> askama::Result<String> {
        self.render()
    }
}

/// A complete HTML document: filter bar, search input, and card grid.
#[derive(Debug, Template)]
#[template(path = "page.html")]
pub struct Page<'a> {
    pub title: &'a str,
    pub buttons: &'a [FilterButton],
    pub query: &'a str,
    pub cards: &'a [Card],
    pub generated_at: DateTime<Local>,
}

impl<'a> Page<'a> {
    pub fn new(title: &'a str, filters: &'a FilterBar, query: &'a str, grid: &'a CardGrid) -> Self {
        Self {
            title,
            buttons: filters.buttons(),
            query,
            cards: grid.cards(),
            generated_at: Local::now(),
        }
    }

    pub fn to_html(&self) -> askama::Result<String> {
        self.render()
    }
}
