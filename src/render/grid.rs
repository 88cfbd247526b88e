//! Card grid display region.

use super::Renderer;
use crate::models::NewsItem;
use askama::Template;

/// The rendered visual unit for one [`NewsItem`].
///
/// `meta`, `title` and `url` are escaped by the template; `summary_html`
/// is emitted with `|safe`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// `source`, plus ` • published` when present.
    pub meta: String,
    pub title: String,
    pub url: String,
    /// Raw summary markup; empty when the item has none.
    pub summary_html: String,
}

impl From<&NewsItem> for Card {
    fn from(item: &NewsItem) -> Self {
        Self {
            meta: item.meta_line(),
            title: item.title.clone(),
            url: item.url.clone(),
            summary_html: item.summary_text().unwrap_or_default().to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "grid.html")]
struct GridTemplate<'a> {
    cards: &'a [Card],
}

/// The `grid` container. Holds exactly the cards of the last render.
#[derive(Debug, Clone, Default)]
pub struct CardGrid {
    cards: Vec<Card>,
}

impl CardGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Markup of the whole container, including the wrapping element.
    pub fn to_html(&self) -> askama::Result<String> {
        GridTemplate { cards: &self.cards }.render()
    }
}

impl Renderer for CardGrid {
    fn render(&mut self, items: &[&NewsItem]) {
        self.cards.clear();
        self.cards.extend(items.iter().map(|item| Card::from(*item)));
    }
}
