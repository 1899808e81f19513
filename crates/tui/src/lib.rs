//! # Navfilter TUI
//!
//! Terminal rendition of a filterable navigation sidebar. The sidebar shows the
//! groups and entries of a navigation definition, narrows them down while the
//! user types into the search box, reports how many entries remain, and jumps
//! into the search box when `/` is pressed outside a text field.
//!
//! ## Architecture
//!
//! `App` owns all state; components (`NavFilterComponent`, `ContentComponent`)
//! handle keys for the focused widget and render themselves, reporting side
//! effects back to the runtime as `Effect`s.

mod app;
mod ui;

use anyhow::Result;

pub use app::TuiConfig;
pub use ui::components::nav_filter::{NavFilterState, NavGroupNode, NavItemNode, NavRow, SearchField};
pub use ui::hotkey::{FocusKind, HotkeyOutcome, slash_hotkey};

/// Runs the TUI until the user quits.
///
/// # Errors
///
/// Fails when the terminal cannot be switched into or out of raw mode and
/// the alternate screen, or when drawing fails.
pub async fn run(config: TuiConfig) -> Result<()> {
    ui::runtime::run_app(config).await
}
