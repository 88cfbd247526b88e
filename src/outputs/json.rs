//! JSON output of the visible item set.
//!
//! The file holds a JSON array in the same shape the news endpoint serves,
//! so it can be fed back through the loader's decoder.

use crate::models::NewsItem;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Serialize `items` (in order) to `path` as a pretty-printed JSON array.
#[instrument(level = "info", skip_all, fields(path = %path.display(), count = items.len()))]
pub async fn write_visible(items: &[&NewsItem], path: &Path) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(items)?;

    if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(dir).await {
            error!(dir = %dir.display(), error = %e, "Failed to create JSON dir");
            return Err(e.into());
        }
    }

    fs::write(path, json).await?;
    info!("Wrote visible items JSON");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_news;

    #[tokio::test]
    async fn test_write_visible_is_readable_by_loader() {
        let items = vec![
            NewsItem {
                source: "AP".to_string(),
                title: "Storm hits coast".to_string(),
                url: "https://apnews.com/storm".to_string(),
                summary: Some("<p>Wind</p>".to_string()),
                published: None,
            },
            NewsItem {
                source: "BBC".to_string(),
                title: "Election results".to_string(),
                url: "https://bbc.co.uk/vote".to_string(),
                summary: None,
                published: Some("today".to_string()),
            },
        ];
        let visible: Vec<&NewsItem> = items.iter().rev().collect();

        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("visible.json");
        write_visible(&visible, &path).await.unwrap();

        let body = std::fs::read_to_string(&path).unwrap();
        let back = parse_news(&body).unwrap();
        assert_eq!(back, vec![items[1].clone(), items[0].clone()]);
    }
}
