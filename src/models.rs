//! Data model for feed entries.
//!
//! This module defines [`NewsItem`], the single entity served by the news
//! endpoint. Items arrive as a flat JSON array in the order the feed
//! produced them and are never reordered, deduplicated, or mutated here.
//!
//! The optional text fields follow "falsy" semantics: an absent field, a
//! JSON `null`, and an empty string are all treated the same way by the
//! display and search helpers.

use serde::{Deserialize, Serialize};

/// Separator placed between the source and the published text in a card's meta line.
pub const META_SEPARATOR: &str = " • ";

/// One entry of the news feed.
///
/// Unknown fields in the JSON payload (for example `feed_source`) are ignored.
///
/// # Fields
///
/// * `source` - Publisher name, used as the exact-match filter tag
/// * `title` - Headline text
/// * `url` - Absolute link to the article
/// * `summary` - Optional caller-trusted HTML, rendered without escaping
/// * `published` - Optional display-only timestamp text, never parsed
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewsItem {
    /// Publisher name.
    pub source: String,
    /// Headline.
    pub title: String,
    /// Absolute article link.
    pub url: String,
    /// Caller-trusted markup shown in the card body.
    #[serde(default)]
    pub summary: Option<String>,
    /// Timestamp text exactly as supplied by the feed.
    #[serde(default)]
    pub published: Option<String>,
}

impl NewsItem {
    /// The summary markup, or `None` when absent, null, or empty.
    pub fn summary_text(&self) -> Option<&str> {
        non_empty(self.summary.as_deref())
    }

    /// The published text, or `None` when absent, null, or empty.
    pub fn published_text(&self) -> Option<&str> {
        non_empty(self.published.as_deref())
    }

    /// Build the card meta line: `source`, plus ` • published` when present.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // source = "BBC", published = Some("Mon, 06 May 2025")
    /// assert_eq!(item.meta_line(), "BBC • Mon, 06 May 2025");
    /// ```
    pub fn meta_line(&self) -> String {
        match self.published_text() {
            Some(published) => format!("{}{}{}", self.source, META_SEPARATOR, published),
            None => self.source.clone(),
        }
    }

    /// Lowercased `title + " " + summary` used for free-text matching.
    ///
    /// A missing summary contributes an empty string, so the text always
    /// ends with the separating space in that case.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.title, self.summary_text().unwrap_or_default()).to_lowercase()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(source: &str, title: &str) -> NewsItem {
        NewsItem {
            source: source.to_string(),
            title: title.to_string(),
            url: "https://example.com/a".to_string(),
            summary: None,
            published: None,
        }
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let json = r#"{
            "source": "BBC",
            "title": "Election results",
            "url": "https://bbc.co.uk/news/1",
            "summary": "<p>Votes counted</p>",
            "published": "Tue, 06 May 2025 10:00:00 GMT",
            "feed_source": "Google News"
        }"#;

        let parsed: NewsItem = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.source, "BBC");
        assert_eq!(parsed.summary.as_deref(), Some("<p>Votes counted</p>"));
        assert_eq!(
            parsed.published.as_deref(),
            Some("Tue, 06 May 2025 10:00:00 GMT")
        );
    }

    #[test]
    fn test_deserialize_missing_and_null_optionals() {
        let json = r#"{"source": "AP", "title": "Storm hits coast", "url": "https://apnews.com/x", "summary": null}"#;
        let parsed: NewsItem = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.summary, None);
        assert_eq!(parsed.published, None);
    }

    #[test]
    fn test_meta_line_with_published() {
        let mut it = item("BBC", "Title");
        it.published = Some("Mon, 05 May 2025".to_string());
        assert_eq!(it.meta_line(), "BBC • Mon, 05 May 2025");
    }

    #[test]
    fn test_meta_line_treats_empty_published_as_absent() {
        let mut it = item("BBC", "Title");
        assert_eq!(it.meta_line(), "BBC");
        it.published = Some(String::new());
        assert_eq!(it.meta_line(), "BBC");
    }

    #[test]
    fn test_search_text_lowercases_title_and_summary() {
        let mut it = item("AP", "Storm Hits Coast");
        it.summary = Some("Winds UP to 100mph".to_string());
        assert_eq!(it.search_text(), "storm hits coast winds up to 100mph");
    }

    #[test]
    fn test_search_text_without_summary() {
        let it = item("AP", "Storm");
        assert_eq!(it.search_text(), "storm ");
        assert_eq!(it.summary_text(), None);
    }
}
