//! The `/` shortcut that jumps into the navigation search box.
//!
//! The decision is kept free of `App` so it can be exercised directly: callers
//! describe what currently holds focus and whether a search box exists, and
//! get back whether the key should move focus or continue down the normal
//! routing path.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::trace;

/// Kind of element that currently holds focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusKind {
    /// Single-line text entry.
    TextInput,
    /// Multi-line text entry.
    TextArea,
    /// Free-form editable content.
    ContentEditable,
    /// Anything that does not take typed text.
    Other,
}

impl FocusKind {
    /// Whether typing into this element inserts text.
    pub fn accepts_text(self) -> bool {
        matches!(self, FocusKind::TextInput | FocusKind::TextArea | FocusKind::ContentEditable)
    }
}

/// Result of offering a key to the `/` shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyOutcome {
    /// Consume the key and focus the search box.
    FocusSearch,
    /// Not ours; route the key as usual.
    PassThrough,
}

/// Decides whether `key` triggers the search shortcut.
///
/// The key must be a plain `/` press (Shift tolerated, since some layouts
/// need it to produce the character; Alt, Ctrl, Meta and Super are not).
/// A text-accepting element that already has focus keeps the character. With
/// no search box the shortcut does nothing and the key is left alone.
pub fn slash_hotkey(key: &KeyEvent, focused: Option<FocusKind>, search_available: bool) -> HotkeyOutcome {
    if key.kind != KeyEventKind::Press || key.code != KeyCode::Char('/') {
        return HotkeyOutcome::PassThrough;
    }
    let blocking = KeyModifiers::ALT | KeyModifiers::CONTROL | KeyModifiers::META | KeyModifiers::SUPER;
    if key.modifiers.intersects(blocking) {
        trace!(modifiers = ?key.modifiers, "slash with modifiers ignored");
        return HotkeyOutcome::PassThrough;
    }
    if focused.is_some_and(FocusKind::accepts_text) {
        return HotkeyOutcome::PassThrough;
    }
    if !search_available {
        trace!("slash pressed without a search box");
        return HotkeyOutcome::PassThrough;
    }
    trace!("slash focuses navigation search");
    HotkeyOutcome::FocusSearch
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slash(modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(KeyCode::Char('/'), modifiers)
    }

    #[test]
    fn plain_slash_outside_text_focuses_search() {
        for focused in [None, Some(FocusKind::Other)] {
            assert_eq!(slash_hotkey(&slash(KeyModifiers::NONE), focused, true), HotkeyOutcome::FocusSearch);
        }
    }

    #[test]
    fn shift_is_tolerated() {
        assert_eq!(slash_hotkey(&slash(KeyModifiers::SHIFT), None, true), HotkeyOutcome::FocusSearch);
    }

    #[test]
    fn other_modifiers_pass_through() {
        for modifiers in [KeyModifiers::ALT, KeyModifiers::CONTROL, KeyModifiers::META, KeyModifiers::SUPER, KeyModifiers::SHIFT | KeyModifiers::CONTROL] {
            assert_eq!(slash_hotkey(&slash(modifiers), None, true), HotkeyOutcome::PassThrough, "{modifiers:?}");
        }
    }

    #[test]
    fn text_targets_keep_the_character() {
        for focused in [FocusKind::TextInput, FocusKind::TextArea, FocusKind::ContentEditable] {
            assert_eq!(slash_hotkey(&slash(KeyModifiers::NONE), Some(focused), true), HotkeyOutcome::PassThrough);
        }
    }

    #[test]
    fn missing_search_box_is_a_no_op() {
        assert_eq!(slash_hotkey(&slash(KeyModifiers::NONE), None, false), HotkeyOutcome::PassThrough);
    }

    #[test]
    fn other_keys_and_releases_pass_through() {
        let question = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE);
        assert_eq!(slash_hotkey(&question, None, true), HotkeyOutcome::PassThrough);

        let mut release = slash(KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(slash_hotkey(&release, None, true), HotkeyOutcome::PassThrough);
    }
}
