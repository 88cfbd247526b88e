//! Output writers for the rendered page and the visible item set.
//!
//! # Submodules
//!
//! - [`html`]: Writes the full HTML page (filters, search box, card grid)
//! - [`json`]: Writes the currently visible items as a JSON array
//!
//! Both writers create missing parent directories and overwrite the target
//! file on every call, so re-rendering after a filter change always leaves
//! the latest state on disk.

pub mod html;
pub mod json;
