//! # NewsBridge
//!
//! Renders a news feed into a card grid page and lets the reader narrow the
//! visible set by toggling per-source filter buttons and typing a free-text
//! query.
//!
//! ## Usage
//!
//! ```sh
//! newsbridge --base-url http://127.0.0.1:5000 -o ./out/news.html -s BBC -q china
//! ```
//!
//! ## Architecture
//!
//! 1. **Loader**: one GET of `<base>/api/news`, decoded into [`models::NewsItem`]s
//! 2. **Filter controller**: active sources + query applied to the loaded collection
//! 3. **Renderer**: the visible subset is written out as a card grid page
//!
//! Everything runs on a single-threaded runtime. The fetch is the only
//! suspend point that matters; every UI event afterwards is handled to
//! completion before the next one is read.

use clap::Parser;
use std::error::Error;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod filter;
mod loader;
mod models;
mod outputs;
mod render;
mod session;
mod state;
mod utils;

use cli::Cli;
use config::{FileConfig, Settings};
use filter::FilterController;
use session::{OutputTargets, Session};
use state::AppState;
use utils::ensure_writable_parent;

#[tokio::main(flavor = "current_thread")]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("newsbridge starting up");

    // ---- Configuration ----
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");
    let file_config = match args.config.as_deref() {
        Some(path) => FileConfig::load(path).await?,
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(args, file_config);
    debug!(?settings, "Resolved settings");

    ensure_writable_parent(&settings.output).await?;
    if let Some(json_path) = &settings.json_output {
        ensure_writable_parent(json_path).await?;
    }

    // ---- Load ----
    let url = loader::endpoint_url(&settings.base_url)?;
    let news = loader::load_news(&url).await?;

    let controller = FilterController::new(AppState::new(news));
    info!(sources = ?controller.sources(), "Derived filter buttons");

    let mut session = Session::new(
        controller,
        OutputTargets {
            title: settings.title.clone(),
            page: settings.output.clone(),
            json: settings.json_output.clone(),
        },
    );

    // ---- Initial unfiltered render ----
    session.publish().await?;

    // ---- Startup filters ----
    session
        .apply_startup_filters(&settings.initial_sources, &settings.initial_query)
        .await?;

    if settings.interactive {
        info!("Reading events from stdin (toggle <source> | query <text> | clear | sources | show | quit)");
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        session.run(stdin, &mut stdout).await?;
    }

    let elapsed = start_time.elapsed();
    info!(
        visible = session.grid().cards().len(),
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );
    Ok(())
}
