//! Runtime configuration.
//!
//! Settings come from an optional YAML file and are overridden field by
//! field by whatever was passed on the command line (or via environment
//! variables, see [`crate::cli::Cli`]).
//!
//! # Example `config.yaml`
//!
//! ```yaml
//! base_url: http://127.0.0.1:5000
//! output: ./out/news.html
//! json_output: ./out/visible.json
//! title: China News
//! sources: [BBC]
//! query: trade
//! ```

use crate::cli::Cli;
use serde::Deserialize;
use std::error::Error;
use std::path::PathBuf;
use tracing::{info, instrument};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_OUTPUT: &str = "newsbridge.html";
pub const DEFAULT_TITLE: &str = "NewsBridge";

/// Contents of the YAML config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub base_url: Option<String>,
    pub output: Option<String>,
    pub json_output: Option<String>,
    pub title: Option<String>,
    pub sources: Vec<String>,
    pub query: Option<String>,
}

impl FileConfig {
    pub fn from_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(contents)
    }

    #[instrument(level = "info")]
    pub async fn load(path: &str) -> Result<Self, Box<dyn Error>> {
        let contents = tokio::fs::read_to_string(path).await?;
        let config = Self::from_yaml(&contents)?;
        info!(path, "Loaded configuration");
        Ok(config)
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub output: PathBuf,
    pub json_output: Option<PathBuf>,
    pub title: String,
    /// Sources toggled on before the first filtered render.
    pub initial_sources: Vec<String>,
    pub initial_query: String,
    pub interactive: bool,
}

impl Settings {
    /// Merge CLI arguments over file configuration, then over defaults.
    ///
    /// Initial sources from the CLI replace those from the file rather
    /// than adding to them.
    pub fn resolve(cli: Cli, file: FileConfig) -> Self {
        let initial_sources = if cli.sources.is_empty() {
            file.sources
        } else {
            cli.sources
        };

        Self {
            base_url: cli
                .base_url
                .or(file.base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            output: PathBuf::from(
                cli.output
                    .or(file.output)
                    .unwrap_or_else(|| DEFAULT_OUTPUT.to_string()),
            ),
            json_output: cli.json_output.or(file.json_output).map(PathBuf::from),
            title: file.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            initial_sources,
            initial_query: cli.query.or(file.query).unwrap_or_default(),
            interactive: cli.interactive,
        }
    }
}
