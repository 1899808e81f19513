use navfilter_types::Route;
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

use crate::ui::components::common::TextInputState;

/// State behind the content pane: the current route and the go-to field.
#[derive(Debug, Clone)]
pub struct ContentState {
    route: Option<Route>,
    pub goto: TextInputState,
    pub f_goto: FocusFlag,
    container_focus: FocusFlag,
    pub last_area: Rect,
}

impl Default for ContentState {
    fn default() -> Self {
        Self {
            route: None,
            goto: TextInputState::new(),
            f_goto: FocusFlag::named("content.goto"),
            container_focus: FocusFlag::named("content"),
            last_area: Rect::default(),
        }
    }
}

impl ContentState {
    pub fn new(route: Option<Route>) -> Self {
        Self { route, ..Self::default() }
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    pub fn set_route(&mut self, route: Route) {
        self.route = Some(route);
    }

    /// Takes the typed path, leaving the field empty. Blank input yields `None`.
    pub fn take_goto_route(&mut self) -> Option<Route> {
        let path = self.goto.input().trim().to_string();
        self.goto.clear();
        (!path.is_empty()).then(|| Route::new(path))
    }
}

impl HasFocus for ContentState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.leaf_widget(&self.f_goto);
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}
