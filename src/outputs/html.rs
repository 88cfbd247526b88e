//! HTML page output.

use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{debug, error, instrument};

/// Write a rendered page to `path`, replacing any previous contents.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub async fn write_page(page_html: &str, path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(dir).await {
            error!(dir = %dir.display(), error = %e, "Failed to create page dir");
            return Err(e.into());
        }
    }

    fs::write(path, page_html).await?;
    debug!(bytes = page_html.len(), "Wrote page");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_page_overwrites() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("out/index.html");

        write_page("<p>first</p>", &path).await.unwrap();
        write_page("<p>second</p>", &path).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "<p>second</p>");
    }
}
