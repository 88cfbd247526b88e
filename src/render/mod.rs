//! Rendering of the visible news set into HTML.
//!
//! The page has three fixed attachment points, identified by element id:
//!
//! | Id | Content | Template |
//! |----|---------|----------|
//! | `grid` | One card per visible item | `grid.html`, `card.html` |
//! | `source-filters` | One toggle button per distinct source | `filters.html` |
//! | `q` | Search input holding the current query | `page.html` |
//!
//! # Trust Boundary
//!
//! Markup is produced with `askama`, which escapes every interpolated
//! value. The one exception is the item `summary`, written with `|safe` in
//! `card.html`: it is caller-trusted HTML and sanitizing it is the job of
//! whatever produces the feed.

pub mod grid;
pub mod page;

pub use grid::{Card, CardGrid};
pub use page::{FilterBar, Page};

use crate::models::NewsItem;

/// A display region that shows an ordered sequence of news items.
///
/// Implementations must fully replace what they showed before on every
/// call, so rendering the same input twice yields the same output.
pub trait Renderer {
    fn render(&mut self, items: &[&NewsItem]);
}
