use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders},
};

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.text_secondary_style().add_modifier(Modifier::BOLD)));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Style for a text input; bold while focused.
pub fn input_style<T: Theme + ?Sized>(theme: &T, focused: bool) -> Style {
    let style = panel_style(theme);
    if focused { style.add_modifier(Modifier::BOLD) } else { style }
}

/// Style for a highlighted list row.
pub fn list_highlight_style<T: Theme + ?Sized>(theme: &T, focused: bool) -> Style {
    if focused {
        theme.selection_style().add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(theme.roles().surface_muted)
    }
}

/// Builds `key description` span pairs for the hint bar.
pub fn build_hint_spans<'a, T: Theme + ?Sized>(theme: &T, hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, theme.accent_emphasis_style()));
        spans.push(Span::styled(*description, theme.text_muted_style()));
    }
    spans
}

/// Darken an RGB color by a multiplicative factor (0.0..=1.0).
/// If the color is not RGB, returns it unchanged.
pub fn darken_rgb(color: Color, factor: f32) -> Color {
    scale_rgb(color, |channel| channel * factor.clamp(0.0, 1.0))
}

/// Move an RGB color toward white by `amount` (0.0..=1.0).
pub fn lighten_rgb(color: Color, amount: f32) -> Color {
    let amount = amount.clamp(0.0, 1.0);
    scale_rgb(color, |channel| channel + (255.0 - channel) * amount)
}

fn scale_rgb(color: Color, map: impl Fn(f32) -> f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let channel = |value: u8| map(value as f32).round().clamp(0.0, 255.0) as u8;
            Color::Rgb(channel(r), channel(g), channel(b))
        }
        other => other,
    }
}
