//! Loader for the news collection.
//!
//! The collection is fetched exactly once per run with a single HTTP GET
//! against the fixed [`NEWS_ENDPOINT_PATH`] of the configured base URL.
//! There is no retry, no fallback content, and no timeout override: a
//! network error, a non-success status, or a body that is not a JSON array
//! of items propagates to the caller unchanged.

use crate::models::NewsItem;
use crate::utils::truncate_for_log;
use itertools::Itertools;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use url::Url;

/// Path of the news endpoint, relative to the base URL.
pub const NEWS_ENDPOINT_PATH: &str = "/api/news";

/// Resolve the news endpoint against a base URL.
///
/// # Examples
///
/// ```ignore
/// let url = endpoint_url("http://127.0.0.1:5000")?;
/// assert_eq!(url.as_str(), "http://127.0.0.1:5000/api/news");
/// ```
pub fn endpoint_url(base_url: &str) -> Result<Url, Box<dyn Error>> {
    let base = Url::parse(base_url)?;
    Ok(base.join(NEWS_ENDPOINT_PATH)?)
}

/// Fetch and decode the news collection.
///
/// # Returns
///
/// The items in feed order, or the first error encountered while
/// requesting or decoding.
#[instrument(level = "info", skip_all, fields(url = %url))]
pub async fn load_news(url: &Url) -> Result<Vec<NewsItem>, Box<dyn Error>> {
    let body = reqwest::get(url.clone())
        .await?
        .error_for_status()?
        .text()
        .await?;
    debug!(bytes = body.len(), "Received news payload");

    let items = parse_news(&body).inspect_err(|e| {
        error!(
            error = %e,
            body_preview = %truncate_for_log(&body, 300),
            "News payload is not a JSON array of items"
        )
    })?;
    info!(count = items.len(), "Loaded news collection");
    Ok(items)
}

/// Decode a JSON array of [`NewsItem`].
pub fn parse_news(body: &str) -> Result<Vec<NewsItem>, serde_json::Error> {
    serde_json::from_str(body)
}

/// Distinct `source` values, sorted lexicographically ascending.
///
/// One filter button is rendered per returned value.
pub fn distinct_sources(items: &[NewsItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.source.as_str())
        .unique()
        .sorted()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn item(source: &str) -> NewsItem {
        NewsItem {
            source: source.to_string(),
            title: "t".to_string(),
            url: "https://example.com".to_string(),
            summary: None,
            published: None,
        }
    }

    /// Serve one canned HTTP response on an ephemeral port and return the base URL.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn test_endpoint_url_joins_fixed_path() {
        let url = endpoint_url("http://127.0.0.1:5000").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/api/news");

        let url = endpoint_url("https://news.example.com/dashboard/").unwrap();
        assert_eq!(url.as_str(), "https://news.example.com/api/news");
    }

    #[test]
    fn test_endpoint_url_rejects_garbage() {
        assert!(endpoint_url("not a url").is_err());
    }

    #[test]
    fn test_distinct_sources_dedupes_and_sorts() {
        let items = vec![item("BBC"), item("AP"), item("BBC"), item("Reuters")];
        assert_eq!(distinct_sources(&items), vec!["AP", "BBC", "Reuters"]);
    }

    #[test]
    fn test_distinct_sources_empty() {
        assert!(distinct_sources(&[]).is_empty());
    }

    #[test]
    fn test_parse_news_preserves_order_and_duplicates() {
        let body = r#"[
            {"source": "AP", "title": "Storm hits coast", "url": "https://apnews.com/1"},
            {"source": "BBC", "title": "Election results", "url": "https://bbc.co.uk/2"},
            {"source": "AP", "title": "Storm hits coast", "url": "https://apnews.com/1"}
        ]"#;
        let items = parse_news(body).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].title, "Storm hits coast");
        assert_eq!(items[1].source, "BBC");
        assert_eq!(items[0], items[2]);
    }

    #[test]
    fn test_parse_news_rejects_non_json() {
        assert!(parse_news("<html>oops</html>").is_err());
        assert!(parse_news(r#"{"source": "AP"}"#).is_err());
    }

    #[tokio::test]
    async fn test_load_news_over_http() {
        let base = serve_once(
            "200 OK",
            r#"[{"source":"AP","title":"Storm hits coast","url":"https://apnews.com/1","published":"today"}]"#,
        )
        .await;
        let url = endpoint_url(&base).unwrap();

        let items = load_news(&url).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].source, "AP");
        assert_eq!(items[0].published.as_deref(), Some("today"));
    }

    #[tokio::test]
    async fn test_load_news_propagates_bad_body() {
        let base = serve_once("200 OK", "not json").await;
        let url = endpoint_url(&base).unwrap();
        assert!(load_news(&url).await.is_err());
    }

    #[tokio::test]
    async fn test_load_news_propagates_error_status() {
        let base = serve_once("500 Internal Server Error", "[]").await;
        let url = endpoint_url(&base).unwrap();
        assert!(load_news(&url).await.is_err());
    }
}
