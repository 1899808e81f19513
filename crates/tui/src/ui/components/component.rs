//! Component system for the navfilter TUI.
//!
//! Components are self-contained UI elements: they read and mutate the state
//! they are responsible for on `App`, render themselves into a provided `Rect`,
//! and report side effects (route switches, quitting) back to the runtime as
//! `Effect`s instead of performing them directly.

use crossterm::event::KeyEvent;
use navfilter_types::Effect;
use ratatui::{Frame, layout::Rect, text::Span};

use crate::app::App;

/// A UI element with its own event handling and rendering.
///
/// # Component Lifecycle
///
/// 1. **Event Handling**: keys and bracketed pastes arrive through
///    `handle_key_events()` / `handle_paste()` while the component has focus.
/// 2. **Rendering**: `render()` draws the component into the provided area.
/// 3. **Hints**: `get_hint_spans()` contributes key hints to the hint bar.
pub(crate) trait Component {
    /// Handle key events when this component has focus.
    ///
    /// Components should only react to keys that are meaningful to them and
    /// leave global bindings to `MainView`.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle pasted text when this component has focus.
    fn handle_paste(&mut self, _app: &mut App, _text: &str) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Implementations should limit side effects to drawing, cursor placement
    /// and remembering the area they were drawn in.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the hint bar while this component is focused.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }

    /// Splits `area` into the sub-areas this component renders into.
    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        vec![area]
    }
}
