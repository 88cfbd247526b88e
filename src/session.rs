//! Interactive session: UI events in, re-rendered page out.
//!
//! Each line of input is one UI event. Events are handled strictly one at a
//! time; every event that changes the filter state triggers a full
//! re-render of the grid and a rewrite of the output files.
//!
//! # Commands
//!
//! | Line | Effect |
//! |------|--------|
//! | `toggle <source>` | Flip the filter button for `<source>` (kept verbatim, may contain spaces) |
//! | `query <text>` | Replace the search box contents with `<text>` (kept verbatim) |
//! | `query` | Empty the search box |
//! | `clear` | Turn off every toggle and empty the search box |
//! | `sources` | List filter buttons with their state |
//! | `show` | List the titles currently rendered |
//! | `quit` / `exit` | End the session |

use crate::filter::FilterController;
use crate::outputs::{html, json};
use crate::render::{CardGrid, FilterBar, Page};
use crate::utils::truncate_for_log;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument, warn};

/// One user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Toggle(String),
    Query(String),
    Clear,
    Sources,
    Show,
    Quit,
}

/// A line that is not a recognised command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEventError(pub String);

impl fmt::Display for ParseEventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognised command: {}", self.0)
    }
}

impl Error for ParseEventError {}

impl FromStr for UiEvent {
    type Err = ParseEventError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (cmd, rest) = match line.split_once(' ') {
            Some((cmd, rest)) => (cmd, Some(rest)),
            None => (line, None),
        };

        match (cmd, rest) {
            ("toggle", Some(source)) if !source.trim().is_empty() => {
                Ok(UiEvent::Toggle(source.to_string()))
            }
            ("query", text) => Ok(UiEvent::Query(text.unwrap_or_default().to_string())),
            ("clear", None) => Ok(UiEvent::Clear),
            ("sources", None) => Ok(UiEvent::Sources),
            ("show", None) => Ok(UiEvent::Show),
            ("quit" | "exit", None) => Ok(UiEvent::Quit),
            _ => Err(ParseEventError(line.to_string())),
        }
    }
}

/// Where and how a session publishes its rendered state.
#[derive(Debug, Clone)]
pub struct OutputTargets {
    pub title: String,
    pub page: PathBuf,
    pub json: Option<PathBuf>,
}

/// Controller, display region, and output targets for one run.
#[derive(Debug)]
pub struct Session {
    controller: FilterController,
    grid: CardGrid,
    targets: OutputTargets,
}

impl Session {
    pub fn new(controller: FilterController, targets: OutputTargets) -> Self {
        Self {
            controller,
            grid: CardGrid::new(),
            targets,
        }
    }

    pub fn controller(&self) -> &FilterController {
        &self.controller
    }

    pub fn grid(&self) -> &CardGrid {
        &self.grid
    }

    /// Re-render the grid from the current filters and rewrite the outputs.
    ///
    /// Returns the number of visible items.
    #[instrument(level = "debug", skip_all)]
    pub async fn publish(&mut self) -> Result<usize, Box<dyn Error>> {
        let count = self.controller.refresh(&mut self.grid);

        let filters = FilterBar::new(self.controller.sources(), self.controller.filters());
        let page = Page::new(
            &self.targets.title,
            &filters,
            self.controller.filters().query(),
            &self.grid,
        );
        html::write_page(&page.to_html()?, &self.targets.page).await?;

        if let Some(path) = &self.targets.json {
            json::write_visible(&self.controller.visible(), path).await?;
        }

        info!(
            visible = count,
            total = self.controller.app().news().len(),
            filtered = !self.controller.filters().is_empty(),
            path = %self.targets.page.display(),
            "Rendered page"
        );
        Ok(count)
    }

    /// Apply one event. Returns `false` when the session should end.
    pub async fn handle<W>(&mut self, event: UiEvent, out: &mut W) -> Result<bool, Box<dyn Error>>
    where
        W: AsyncWrite + Unpin,
    {
        match event {
            UiEvent::Toggle(source) => {
                if self.controller.on_toggle(&source).is_some() {
                    let count = self.publish().await?;
                    out.write_all(format!("{} item(s) visible\n", count).as_bytes())
                        .await?;
                } else {
                    out.write_all(format!("no filter button for {:?}\n", source).as_bytes())
                        .await?;
                }
            }
            UiEvent::Query(text) => {
                self.controller.on_query_input(&text);
                let count = self.publish().await?;
                out.write_all(format!("{} item(s) visible\n", count).as_bytes())
                    .await?;
            }
            UiEvent::Clear => {
                self.controller.on_clear();
                let count = self.publish().await?;
                out.write_all(format!("{} item(s) visible\n", count).as_bytes())
                    .await?;
            }
            UiEvent::Sources => {
                let mut listing = String::new();
                for source in self.controller.sources() {
                    let mark = if self.controller.filters().is_active(source) {
                        "x"
                    } else {
                        " "
                    };
                    listing.push_str(&format!("[{}] {}\n", mark, source));
                }
                out.write_all(listing.as_bytes()).await?;
            }
            UiEvent::Show => {
                let mut listing = String::new();
                for card in self.grid.cards() {
                    listing.push_str(&format!("{} | {}\n", card.meta, card.title));
                }
                out.write_all(listing.as_bytes()).await?;
            }
            UiEvent::Quit => return Ok(false),
        }
        out.flush().await?;
        Ok(true)
    }

    /// Replay startup toggles and an optional query as UI events.
    ///
    /// A source listed more than once stays active instead of being
    /// toggled back off. Sources without a button are skipped.
    #[instrument(level = "info", skip_all, fields(sources = sources.len()))]
    pub async fn apply_startup_filters(
        &mut self,
        sources: &[String],
        query: &str,
    ) -> Result<(), Box<dyn Error>> {
        if sources.is_empty() && query.is_empty() {
            debug!("No startup filters");
            return Ok(());
        }

        let mut discard = tokio::io::sink();
        for source in sources {
            if self.controller.filters().is_active(source) {
                warn!(%source, "Source listed twice; keeping it active");
                continue;
            }
            self.handle(UiEvent::Toggle(source.clone()), &mut discard)
                .await?;
        }
        if !query.is_empty() {
            self.handle(UiEvent::Query(query.to_string()), &mut discard)
                .await?;
        }
        Ok(())
    }

    /// Process events line by line until `quit` or end of input.
    #[instrument(level = "info", skip_all)]
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<(), Box<dyn Error>>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<UiEvent>() {
                Ok(event) => {
                    if !self.handle(event, out).await? {
                        break;
                    }
                }
                Err(e) => {
                    warn!(line = %truncate_for_log(&line, 80), "Skipping unknown command");
                    out.write_all(format!("{}\n", e).as_bytes()).await?;
                }
            }
        }
        info!("Session ended");
        Ok(())
    }
}
