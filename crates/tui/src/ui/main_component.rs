use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use navfilter_types::Effect;
use ratatui::{
    prelude::*,
    style::Style,
    widgets::Paragraph,
};

use super::components::Component;
use super::components::content::ContentComponent;
use super::components::nav_filter::NavFilterComponent;
use super::hotkey::{HotkeyOutcome, slash_hotkey};
use super::theme::theme_helpers as th;
use crate::app::App;

/// Width of the navigation sidebar in columns.
const SIDEBAR_WIDTH: u16 = 36;

/// Root component: owns the sidebar and content pane and routes input between
/// them.
#[derive(Debug, Default)]
pub struct MainView {
    pub nav_view: NavFilterComponent,
    pub content_view: ContentComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts focus back on the tree when the focus tree lost track of it.
    pub fn restore_focus(&mut self, app: &mut App) {
        let tree = app.nav.f_tree.clone();
        app.focus.focus(&tree);
    }
}

impl Component for MainView {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.kind != KeyEventKind::Press {
            return Vec::new();
        }

        if key.code == KeyCode::Char('c')
            && key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::ALT)
        {
            return vec![Effect::Quit];
        }

        // The search shortcut runs before anything else sees the key.
        let focused = app.focused_kind();
        if slash_hotkey(&key, focused, app.nav.has_search()) == HotkeyOutcome::FocusSearch {
            app.focus_search();
            return Vec::new();
        }

        match key.code {
            KeyCode::Tab => {
                app.focus.next();
                return Vec::new();
            }
            KeyCode::BackTab => {
                app.focus.prev();
                return Vec::new();
            }
            KeyCode::Char('q') if key.modifiers.is_empty() && !focused.is_some_and(|kind| kind.accepts_text()) => {
                return vec![Effect::Quit];
            }
            _ => {}
        }

        if app.content.f_goto.get() {
            return self.content_view.handle_key_events(app, key);
        }
        self.nav_view.handle_key_events(app, key)
    }

    fn handle_paste(&mut self, app: &mut App, text: &str) -> Vec<Effect> {
        if app.content.f_goto.get() {
            return self.content_view.handle_paste(app, text);
        }
        self.nav_view.handle_paste(app, text)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let bg_fill = Paragraph::new("").style(Style::default().bg(app.ctx.theme.roles().background));
        frame.render_widget(bg_fill, area);

        let layout = self.get_preferred_layout(app, area);
        self.nav_view.render(frame, layout[0], app);
        self.content_view.render(frame, layout[1], app);

        let hint_spans = self.get_hint_spans(app);
        let hints_widget = Paragraph::new(Line::from(hint_spans)).style(app.ctx.theme.text_muted_style());
        frame.render_widget(hints_widget, layout[2]);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let mut hint_spans: Vec<Span> = vec![Span::styled("Hints: ", app.ctx.theme.text_muted_style())];
        if app.content.f_goto.get() {
            hint_spans.extend(self.content_view.get_hint_spans(app));
        } else {
            hint_spans.extend(self.nav_view.get_hint_spans(app));
        }
        hint_spans.extend(th::build_hint_spans(&*app.ctx.theme, &[("Tab", " Focus  "), ("Ctrl+C", " Quit ")]));
        hint_spans
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        let rows = Layout::vertical([
            Constraint::Min(1),    // Panes
            Constraint::Length(1), // Hints bar
        ])
        .split(area);
        let columns = Layout::horizontal([
            Constraint::Length(SIDEBAR_WIDTH), // Navigation sidebar
            Constraint::Min(1),                // Content
        ])
        .split(rows[0]);

        vec![columns[0], columns[1], rows[1]]
    }
}

#[cfg(test)]
mod tests {
    use navfilter_types::{NavDefinition, NavGroupDef, NavItemDef, Panel, Route};
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::app::TuiConfig;

    fn config() -> TuiConfig {
        let definition = NavDefinition {
            name: "Demo".into(),
            groups: vec![
                NavGroupDef {
                    title: "Access".into(),
                    items: vec![
                        NavItemDef::new("users", "Users", "/users"),
                        NavItemDef::new("roles", "Roles", "/roles"),
                    ],
                },
                NavGroupDef {
                    title: "System".into(),
                    items: vec![NavItemDef::new("settings", "Settings", "/settings")],
                },
            ],
        };
        TuiConfig::new(definition, Panel::Admin)
    }

    fn press(view: &mut MainView, app: &mut App, code: KeyCode) -> Vec<Effect> {
        view.handle_key_events(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(view: &mut MainView, app: &mut App, text: &str) {
        for character in text.chars() {
            press(view, app, KeyCode::Char(character));
        }
    }

    fn render_to_string(view: &mut MainView, app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).expect("terminal");
        terminal.draw(|frame| view.render(frame, frame.area(), app)).expect("draw");
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn slash_then_typing_filters_the_tree() {
        let mut app = App::new(&config());
        let mut view = MainView::new();

        assert!(press(&mut view, &mut app, KeyCode::Char('/')).is_empty());
        assert!(app.nav.search().is_some_and(|search| search.focus.get()));
        assert_eq!(app.nav.search().map(|search| search.input.input()), Some(""), "the slash itself is consumed");

        type_text(&mut view, &mut app, "ro");
        assert_eq!(app.nav.status(), "результатів: 1");
        assert!(app.nav.groups()[1].filtered_out);

        let screen = render_to_string(&mut view, &mut app);
        assert!(screen.contains("результатів: 1"));
        assert!(screen.contains("Roles"));
        assert!(!screen.contains("Settings"));
    }

    #[test]
    fn slash_inside_search_is_typed() {
        let mut app = App::new(&config());
        let mut view = MainView::new();
        app.focus_search();
        press(&mut view, &mut app, KeyCode::Char('/'));
        assert_eq!(app.nav.search().map(|search| search.input.input()), Some("/"));
    }

    #[test]
    fn slash_leaves_selection_alone() {
        let mut app = App::new(&config());
        let mut view = MainView::new();
        press(&mut view, &mut app, KeyCode::Down);
        let before = app.nav.selected_row();
        press(&mut view, &mut app, KeyCode::Char('/'));
        assert_eq!(app.nav.selected_row(), before);
    }

    #[test]
    fn slash_in_goto_field_is_text() {
        let mut app = App::new(&config());
        let mut view = MainView::new();
        let goto = app.content.f_goto.clone();
        app.focus.focus(&goto);
        type_text(&mut view, &mut app, "/roles");
        assert_eq!(app.content.goto.input(), "/roles");
        let effects = press(&mut view, &mut app, KeyCode::Enter);
        assert_eq!(effects, vec![Effect::SwitchTo(Route::new("/roles"))]);
    }

    #[test]
    fn slash_without_search_box_does_nothing() {
        let mut config = config();
        config.search_enabled = false;
        let mut app = App::new(&config);
        let mut view = MainView::new();
        assert!(press(&mut view, &mut app, KeyCode::Char('/')).is_empty());
        assert!(app.nav.f_tree.get());
        assert!(!render_to_string(&mut view, &mut app).contains("Search"));
    }

    #[test]
    fn escape_clears_query_and_status() {
        let mut app = App::new(&config());
        let mut view = MainView::new();
        press(&mut view, &mut app, KeyCode::Char('/'));
        type_text(&mut view, &mut app, "zzz");
        assert_eq!(app.nav.status(), "результатів: 0");
        press(&mut view, &mut app, KeyCode::Esc);
        assert_eq!(app.nav.status(), "");
        assert!(app.nav.groups().iter().all(|group| !group.filtered_out));
    }

    #[test]
    fn enter_on_entry_switches_route() {
        let mut app = App::new(&config());
        let mut view = MainView::new();
        press(&mut view, &mut app, KeyCode::Enter);
        press(&mut view, &mut app, KeyCode::Down);
        let effects = press(&mut view, &mut app, KeyCode::Enter);
        assert_eq!(effects, vec![Effect::SwitchTo(Route::new("/users"))]);
    }

    #[test]
    fn paste_into_search_filters_the_tree() {
        let mut app = App::new(&config());
        let mut view = MainView::new();
        press(&mut view, &mut app, KeyCode::Char('/'));
        assert!(view.handle_paste(&mut app, "SETT").is_empty());
        assert_eq!(app.nav.status(), "результатів: 1");
        assert!(app.nav.groups()[0].filtered_out);
        assert!(!app.nav.groups()[1].filtered_out);
        assert!(app.nav.groups()[1].open);
    }

    #[test]
    fn paste_outside_text_fields_is_ignored() {
        let mut app = App::new(&config());
        let mut view = MainView::new();
        view.handle_paste(&mut app, "ro");
        assert_eq!(app.nav.search().map(|search| search.input.input()), Some(""));
        assert_eq!(app.nav.status(), "");
    }

    #[test]
    fn altgr_characters_reach_text_fields() {
        let mut app = App::new(&config());
        let mut view = MainView::new();
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        app.focus_search();
        view.handle_key_events(&mut app, KeyEvent::new(KeyCode::Char('/'), altgr));
        view.handle_key_events(&mut app, KeyEvent::new(KeyCode::Char('c'), altgr));
        assert_eq!(app.nav.search().map(|search| search.input.input()), Some("/c"));

        let goto = app.content.f_goto.clone();
        app.focus.focus(&goto);
        view.handle_key_events(&mut app, KeyEvent::new(KeyCode::Char('/'), altgr));
        assert_eq!(app.content.goto.input(), "/");
    }

    #[test]
    fn q_quits_only_outside_text() {
        let mut app = App::new(&config());
        let mut view = MainView::new();
        assert_eq!(press(&mut view, &mut app, KeyCode::Char('q')), vec![Effect::Quit]);
        app.focus_search();
        assert!(press(&mut view, &mut app, KeyCode::Char('q')).is_empty());
        assert_eq!(app.nav.search().map(|search| search.input.input()), Some("q"));
    }
}
