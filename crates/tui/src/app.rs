//! Application state for the navfilter TUI.
//!
//! `App` owns the navigation sidebar state, the content pane state, the shared
//! context (theme, catalog metadata) and the rat-focus tree that decides which
//! widget receives keys.

use std::rc::Rc;

use navfilter_types::{NavDefinition, Panel, Route};
use navfilter_util::StatusTemplate;
use rat_focus::{Focus, FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use tracing::{debug, info};

use crate::ui::components::content::ContentState;
use crate::ui::components::nav_filter::{NavFilterState, SearchField};
use crate::ui::hotkey::FocusKind;
use crate::ui::theme::{self, Theme};

/// Everything the TUI needs to start.
#[derive(Debug, Clone)]
pub struct TuiConfig {
    /// Navigation tree shown in the sidebar.
    pub definition: NavDefinition,
    /// Panel the definition belongs to; informational only.
    pub panel: Panel,
    /// Route to start on; resolves the initially active entry.
    pub initial_path: Option<String>,
    /// Template for the result count line.
    pub status_template: StatusTemplate,
    /// Render the search box. Without it the filter and the `/` shortcut are inert.
    pub search_enabled: bool,
    /// Theme id from preferences or the command line.
    pub preferred_theme: Option<String>,
}

impl TuiConfig {
    pub fn new(definition: NavDefinition, panel: Panel) -> Self {
        Self {
            definition,
            panel,
            initial_path: None,
            status_template: StatusTemplate::default(),
            search_enabled: true,
            preferred_theme: None,
        }
    }
}

/// Cross-cutting context shared by all components.
pub struct SharedCtx {
    /// Active UI theme
    pub theme: Box<dyn Theme>,
    /// Identifier of the active theme
    pub active_theme_id: &'static str,
    /// Name of the loaded navigation definition
    pub definition_name: String,
    pub panel: Panel,
}

impl SharedCtx {
    fn new(config: &TuiConfig) -> Self {
        let loaded = theme::load(config.preferred_theme.as_deref());
        Self {
            theme: loaded.theme,
            active_theme_id: loaded.definition.id,
            definition_name: config.definition.name.clone(),
            panel: config.panel,
        }
    }
}

pub struct App {
    pub ctx: SharedCtx,
    /// Navigation sidebar: search box, status and tree
    pub nav: NavFilterState,
    /// Route details and go-to field
    pub content: ContentState,
    /// Focus tree rebuilt before each render
    pub focus: Rc<Focus>,
    container_focus: FocusFlag,
}

impl App {
    pub fn new(config: &TuiConfig) -> Self {
        let search = config.search_enabled.then(SearchField::default);
        let nav = NavFilterState::new(
            &config.definition,
            config.initial_path.as_deref(),
            search,
            config.status_template.clone(),
        );
        let content = ContentState::new(config.initial_path.clone().map(Route::new));
        let mut app = Self {
            ctx: SharedCtx::new(config),
            nav,
            content,
            focus: Rc::default(),
            container_focus: FocusFlag::named("app"),
        };
        app.focus = Rc::new(FocusBuilder::build_for(&app));
        let tree = app.nav.f_tree.clone();
        app.focus.focus(&tree);
        debug!(
            groups = app.nav.groups().len(),
            search = app.nav.has_search(),
            theme = app.ctx.active_theme_id,
            "initialized app"
        );
        app
    }

    /// Shows `route` in the content pane and marks the matching entry active.
    pub fn switch_to(&mut self, route: &Route) {
        let active_key = self.nav.set_active_route(route);
        info!(route = %route, active = ?active_key, "switched route");
        self.content.set_route(route.clone());
    }

    /// Describes the focused widget for the `/` shortcut.
    ///
    /// Only single-line inputs exist here, so this never reports
    /// `TextArea` or `ContentEditable`.
    pub fn focused_kind(&self) -> Option<FocusKind> {
        if self.nav.search().is_some_and(|search| search.focus.get()) || self.content.f_goto.get() {
            return Some(FocusKind::TextInput);
        }
        if self.nav.f_tree.get() {
            return Some(FocusKind::Other);
        }
        None
    }

    /// Moves focus into the search box; does nothing without one.
    pub fn focus_search(&mut self) {
        if let Some(search) = self.nav.search() {
            let flag = search.focus.clone();
            self.focus.focus(&flag);
        }
    }
}

impl HasFocus for App {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.widget(&self.nav);
        builder.widget(&self.content);
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}

#[cfg(test)]
mod tests {
    use navfilter_types::{NavGroupDef, NavItemDef};

    use super::*;

    fn demo_config() -> TuiConfig {
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

    #[test]
    fn starts_with_tree_focused() {
        let app = App::new(&demo_config());
        assert_eq!(app.focused_kind(), Some(FocusKind::Other));
        assert!(app.nav.f_tree.get());
    }

    #[test]
    fn focus_search_targets_the_search_box() {
        let mut app = App::new(&demo_config());
        app.focus_search();
        assert_eq!(app.focused_kind(), Some(FocusKind::TextInput));
        assert!(app.nav.search().is_some_and(|search| search.focus.get()));
    }

    #[test]
    fn focus_search_without_search_box_keeps_focus() {
        let mut config = demo_config();
        config.search_enabled = false;
        let mut app = App::new(&config);
        app.focus_search();
        assert!(app.nav.f_tree.get());
    }

    #[test]
    fn switch_to_updates_content_and_active_entry() {
        let mut app = App::new(&demo_config());
        app.switch_to(&Route::new("/settings/general"));
        assert_eq!(app.content.route(), Some(&Route::new("/settings/general")));
        let (_, item) = app.nav.active_item().expect("active entry");
        assert_eq!(item.key, "settings");
    }
}
