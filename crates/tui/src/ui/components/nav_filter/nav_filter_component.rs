//! Navigation sidebar: search box, result status and the collapsible tree.
//!
//! Key handling is split by the focused child (search box or tree), the same
//! way the rest of the UI routes keys inside a container. Every text change in
//! the search box re-runs the filter through `NavFilterState`.

use crossterm::event::{KeyCode, KeyEvent};
use navfilter_types::Effect;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use super::state::{NavFilterState, NavRow};
use crate::app::App;
use crate::ui::components::common::{TextInputState, typed_char};
use crate::ui::components::component::Component;
use crate::ui::theme::{Theme, theme_helpers as th};

const GROUP_OPEN: &str = "▾ ";
const GROUP_CLOSED: &str = "▸ ";
const ACTIVE_MARKER: &str = "● ";
const ITEM_INDENT: &str = "  ";

#[derive(Debug, Default)]
pub struct NavFilterComponent;

impl Component for NavFilterComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if app.nav.search().is_some_and(|search| search.focus.get()) {
            self.handle_search_keys(app, key);
            return Vec::new();
        }
        if app.nav.f_tree.get() {
            return self.handle_tree_keys(app, key);
        }
        Vec::new()
    }

    fn handle_paste(&mut self, app: &mut App, text: &str) -> Vec<Effect> {
        if app.nav.search().is_some_and(|search| search.focus.get()) {
            app.nav.search_insert_str(text);
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        app.nav.last_area = rect;
        let areas = self.get_preferred_layout(app, rect);
        self.render_search_panel(frame, app, areas[0]);
        self.render_status(frame, app, areas[1]);
        self.render_tree(frame, app, areas[2]);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let theme = &*app.ctx.theme;
        if app.nav.search().is_some_and(|search| search.focus.get()) {
            return th::build_hint_spans(theme, &[("Esc", " Clear  "), ("↓/Enter", " Results  ")]);
        }
        let mut hints = vec![("↑/↓", " Move  "), ("Enter", " Open  ")];
        if app.nav.has_search() {
            hints.push(("/", " Search  "));
        }
        th::build_hint_spans(theme, &hints)
    }

    fn get_preferred_layout(&self, app: &App, area: Rect) -> Vec<Rect> {
        let search_height = if app.nav.has_search() { 3 } else { 0 };
        Layout::vertical([
            Constraint::Length(search_height), // Search box
            Constraint::Length(1),             // Result status
            Constraint::Min(1),                // Tree
        ])
        .split(area)
        .to_vec()
    }
}

impl NavFilterComponent {
    fn handle_search_keys(&self, app: &mut App, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => app.nav.search_clear(),
            KeyCode::Char(_) => {
                if let Some(character) = typed_char(&key) {
                    app.nav.search_insert_char(character);
                }
            }
            KeyCode::Backspace => app.nav.search_backspace(),
            KeyCode::Delete => app.nav.search_delete(),
            KeyCode::Left => app.nav.search_cursor(TextInputState::move_left),
            KeyCode::Right => app.nav.search_cursor(TextInputState::move_right),
            KeyCode::Home => app.nav.search_cursor(TextInputState::move_home),
            KeyCode::End => app.nav.search_cursor(TextInputState::move_end),
            KeyCode::Down | KeyCode::Enter => {
                let tree = app.nav.f_tree.clone();
                app.focus.focus(&tree);
            }
            _ => {}
        }
    }

    fn handle_tree_keys(&self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Down => app.nav.move_selection(1),
            KeyCode::Up => app.nav.move_selection(-1),
            KeyCode::PageDown => app.nav.move_selection(10),
            KeyCode::PageUp => app.nav.move_selection(-10),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(route) = app.nav.activate_selected() {
                    return vec![Effect::SwitchTo(route)];
                }
            }
            KeyCode::Esc => {
                if app.nav.query().is_some_and(|query| !query.is_empty()) {
                    app.nav.search_clear();
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn render_search_panel(&self, frame: &mut Frame, app: &App, area: Rect) {
        let Some(search) = app.nav.search() else {
            return;
        };
        let theme = &*app.ctx.theme;
        let is_focused = search.focus.get();
        let block = th::block(theme, Some("Search"), is_focused);
        let inner_area = block.inner(area);
        let query = search.input.input();
        let content = if query.is_empty() && !is_focused {
            Line::from(Span::styled("Press / to filter", theme.text_muted_style()))
        } else {
            Line::from(Span::styled(query.to_string(), theme.text_primary_style()))
        };
        frame.render_widget(Paragraph::new(content).style(th::input_style(theme, is_focused)).block(block), area);

        if is_focused {
            let cursor_x = inner_area.x.saturating_add(search.input.cursor_columns());
            frame.set_cursor_position((cursor_x, inner_area.y));
        }
    }

    fn render_status(&self, frame: &mut Frame, app: &App, area: Rect) {
        let theme = &*app.ctx.theme;
        let status = Paragraph::new(Span::styled(app.nav.status().to_string(), theme.status_info())).style(th::panel_style(theme));
        frame.render_widget(status, area);
    }

    fn render_tree(&self, frame: &mut Frame, app: &mut App, area: Rect) {
        let theme = &*app.ctx.theme;
        let is_focused = app.nav.f_tree.get();
        let title = app.ctx.definition_name.as_str();
        let block = th::block(theme, (!title.is_empty()).then_some(title), is_focused);

        let items: Vec<ListItem> = app
            .nav
            .visible_rows()
            .into_iter()
            .map(|row| ListItem::new(row_line(theme, &app.nav, row)))
            .collect();
        let list = List::new(items)
            .block(block)
            .style(th::panel_style(theme))
            .highlight_style(th::list_highlight_style(theme, is_focused));
        frame.render_stateful_widget(list, area, &mut app.nav.list_state);
    }
}

fn row_line(theme: &dyn Theme, nav: &NavFilterState, row: NavRow) -> Line<'static> {
    match row {
        NavRow::Group(group_index) => {
            let group = &nav.groups()[group_index];
            let marker = if group.open { GROUP_OPEN } else { GROUP_CLOSED };
            Line::from(vec![
                Span::styled(marker, theme.text_muted_style()),
                Span::styled(group.title.clone(), theme.text_secondary_style().add_modifier(Modifier::BOLD)),
            ])
        }
        NavRow::Item(group_index, item_index) => {
            let item = &nav.groups()[group_index].items[item_index];
            let label = item.label.trim().to_string();
            if item.active {
                Line::from(vec![
                    Span::raw(ITEM_INDENT),
                    Span::styled(ACTIVE_MARKER, theme.active_item_style()),
                    Span::styled(label, theme.active_item_style()),
                ])
            } else {
                Line::from(vec![Span::raw(ITEM_INDENT), Span::raw(ITEM_INDENT), Span::styled(label, theme.text_primary_style())])
            }
        }
    }
}
