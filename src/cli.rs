//! Command-line interface definitions for NewsBridge.
//!
//! All arguments can be provided via command-line flags, and the connection
//! and output settings also via environment variables. Values given here
//! take precedence over the optional YAML config file.

use clap::Parser;

/// Command-line arguments for the NewsBridge renderer.
///
/// # Examples
///
/// ```sh
/// # Render everything the endpoint serves
/// newsbridge --base-url http://127.0.0.1:5000 -o ./out/news.html
///
/// # Start with BBC and AP toggled on and a query
/// newsbridge -s BBC -s AP -q china
///
/// # Drive toggles and queries from stdin, re-rendering after each event
/// newsbridge -i
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Base URL of the news service; the feed is read from `<base>/api/news`
    #[arg(short, long, env = "NEWSBRIDGE_BASE_URL")]
    pub base_url: Option<String>,

    /// Path of the rendered HTML page
    #[arg(short, long, env = "NEWSBRIDGE_OUTPUT")]
    pub output: Option<String>,

    /// Optional path to also write the visible items as JSON
    #[arg(short, long)]
    pub json_output: Option<String>,

    /// Source to toggle on at startup (repeatable)
    #[arg(short, long = "source")]
    pub sources: Vec<String>,

    /// Initial search query
    #[arg(short, long)]
    pub query: Option<String>,

    /// Read toggle/query events from stdin after the first render
    #[arg(short, long)]
    pub interactive: bool,

    /// Optional path to config.yaml file
    #[arg(short, long)]
    pub config: Option<String>,
}
