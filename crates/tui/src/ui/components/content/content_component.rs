//! Content pane showing the current route, its navigation entry and a go-to
//! path field.

use crossterm::event::{KeyCode, KeyEvent};
use navfilter_types::Effect;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::ui::components::common::typed_char;
use crate::ui::components::component::Component;
use crate::ui::theme::theme_helpers as th;

#[derive(Debug, Default)]
pub struct ContentComponent;

impl Component for ContentComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if !app.content.f_goto.get() {
            return Vec::new();
        }
        if key.code == KeyCode::Enter {
            return app.content.take_goto_route().map(Effect::SwitchTo).into_iter().collect();
        }
        let goto = &mut app.content.goto;
        match key.code {
            KeyCode::Esc => {
                goto.clear();
            }
            KeyCode::Char(_) => {
                if let Some(character) = typed_char(&key) {
                    goto.insert_char(character);
                }
            }
            KeyCode::Backspace => {
                goto.backspace();
            }
            KeyCode::Delete => {
                goto.delete();
            }
            KeyCode::Left => goto.move_left(),
            KeyCode::Right => goto.move_right(),
            KeyCode::Home => goto.move_home(),
            KeyCode::End => goto.move_end(),
            _ => {}
        }
        Vec::new()
    }

    fn handle_paste(&mut self, app: &mut App, text: &str) -> Vec<Effect> {
        if app.content.f_goto.get() {
            app.content.goto.insert_str(text);
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        app.content.last_area = rect;
        let areas = self.get_preferred_layout(app, rect);
        let theme = &*app.ctx.theme;

        let mut lines = vec![Line::from(vec![
            Span::styled("Panel: ", theme.text_muted_style()),
            Span::styled(app.ctx.panel.to_string(), theme.text_primary_style()),
        ])];
        let route = app.content.route().map(|route| route.to_string()).unwrap_or_else(|| "—".to_string());
        lines.push(Line::from(vec![
            Span::styled("Route: ", theme.text_muted_style()),
            Span::styled(route, theme.accent_emphasis_style()),
        ]));
        let section = match app.nav.active_item() {
            Some((group, item)) => Line::from(vec![
                Span::styled("Section: ", theme.text_muted_style()),
                Span::styled(format!("{} › {}", group.title, item.label.trim()), theme.active_item_style()),
            ]),
            None => Line::from(Span::styled("No navigation entry matches this route", theme.text_muted_style())),
        };
        lines.push(section);

        let details = Paragraph::new(lines).block(th::block(theme, Some("Content"), false));
        frame.render_widget(details, areas[0]);

        let is_focused = app.content.f_goto.get();
        let goto_block = th::block(theme, Some("Go to path"), is_focused);
        let inner_area = goto_block.inner(areas[1]);
        let goto = Paragraph::new(app.content.goto.input().to_string())
            .style(th::input_style(theme, is_focused))
            .block(goto_block);
        frame.render_widget(goto, areas[1]);
        if is_focused {
            let cursor_x = inner_area.x.saturating_add(app.content.goto.cursor_columns());
            frame.set_cursor_position((cursor_x, inner_area.y));
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, &[("Enter", " Go  "), ("Esc", " Clear  ")])
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        Layout::vertical([
            Constraint::Min(5),    // Route details
            Constraint::Length(3), // Go-to field
        ])
        .split(area)
        .to_vec()
    }
}
