//! Reusable UTF-8 safe text input state with cursor management.
//!
//! Shared by the navigation search box and the go-to path field. Every
//! editing primitive reports whether the text changed so callers can react
//! only to real input changes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

/// Character a key press types into a text field, if any.
///
/// Shift is allowed, and so is Ctrl+Alt, which some terminals report for AltGr.
pub fn typed_char(key: &KeyEvent) -> Option<char> {
    let KeyCode::Char(character) = key.code else {
        return None;
    };
    let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
    let modifiers = key.modifiers.difference(KeyModifiers::SHIFT);
    if !(modifiers.is_empty() || modifiers == altgr) || character.is_control() {
        return None;
    }
    Some(character)
}

#[derive(Clone, Debug, Default)]
pub struct TextInputState {
    /// The underlying text buffer
    input: String,
    /// Cursor byte index into `input` (always on a UTF-8 boundary)
    cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Terminal columns between the start of the input and the cursor.
    pub fn cursor_columns(&self) -> u16 {
        u16::try_from(self.input[..self.cursor].width()).unwrap_or(u16::MAX)
    }

    /// Replaces the text and moves the cursor to the end.
    pub fn set_input<S: Into<String>>(&mut self, s: S) -> bool {
        let next = s.into();
        let changed = next != self.input;
        self.input = next;
        self.cursor = self.input.len();
        changed
    }

    pub fn clear(&mut self) -> bool {
        self.set_input(String::new())
    }

    /// Move cursor one Unicode scalar to the left.
    pub fn move_left(&mut self) {
        if let Some(prev) = self.input[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    /// Move cursor one Unicode scalar to the right.
    pub fn move_right(&mut self) {
        if let Some(next) = self.input[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.input.len();
    }

    /// Insert a char at the cursor.
    pub fn insert_char(&mut self, c: char) -> bool {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        true
    }

    /// Insert a string at the cursor; line breaks are dropped.
    pub fn insert_str(&mut self, text: &str) -> bool {
        let cleaned: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        if cleaned.is_empty() {
            return false;
        }
        self.input.insert_str(self.cursor, &cleaned);
        self.cursor += cleaned.len();
        true
    }

    /// Backspace the char immediately before the cursor.
    pub fn backspace(&mut self) -> bool {
        let Some(prev) = self.input[..self.cursor].chars().next_back() else {
            return false;
        };
        let start = self.cursor - prev.len_utf8();
        self.input.drain(start..self.cursor);
        self.cursor = start;
        true
    }

    /// Delete the char under the cursor.
    pub fn delete(&mut self) -> bool {
        let Some(next) = self.input[self.cursor..].chars().next() else {
            return false;
        };
        let end = self.cursor + next.len_utf8();
        self.input.drain(self.cursor..end);
        true
    }
}
