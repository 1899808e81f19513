use navfilter_registry::{NavGroupState, best_active_key, build_nav_state};
use navfilter_types::{NavDefinition, NavGroupDef, Route};
use navfilter_util::{StatusTemplate, matches_query, normalize_query};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::{layout::Rect, widgets::ListState};
use tracing::debug;

use crate::ui::components::common::TextInputState;

/// A navigation entry as rendered in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItemNode {
    pub key: String,
    pub label: String,
    pub href: String,
    /// Entry matches the current route.
    pub active: bool,
    /// Hidden by the current query; recomputed on every filter pass.
    pub filtered_out: bool,
}

/// A collapsible group of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavGroupNode {
    pub title: String,
    pub open: bool,
    /// Hidden because none of its entries survive the query.
    pub filtered_out: bool,
    pub items: Vec<NavItemNode>,
}

impl NavGroupNode {
    fn from_state(state: NavGroupState) -> Self {
        Self {
            title: state.title,
            open: state.open,
            filtered_out: false,
            items: state
                .items
                .into_iter()
                .map(|item| NavItemNode {
                    key: item.item.key,
                    label: item.item.label,
                    href: item.item.href,
                    active: item.active,
                    filtered_out: false,
                })
                .collect(),
        }
    }

    fn has_visible_item(&self) -> bool {
        self.items.iter().any(|item| !item.filtered_out)
    }
}

/// The search box of the sidebar.
#[derive(Debug, Clone)]
pub struct SearchField {
    pub input: TextInputState,
    pub focus: FocusFlag,
}

impl Default for SearchField {
    fn default() -> Self {
        Self {
            input: TextInputState::new(),
            focus: FocusFlag::named("nav.search"),
        }
    }
}

/// One line of the rendered tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRow {
    Group(usize),
    Item(usize, usize),
}

/// State behind the navigation sidebar.
///
/// The groups and entries are built once from the navigation definition; the
/// filter and active-route logic only ever flip flags on them.
#[derive(Debug, Clone)]
pub struct NavFilterState {
    definitions: Vec<NavGroupDef>,
    groups: Vec<NavGroupNode>,
    search: Option<SearchField>,
    status: String,
    status_template: StatusTemplate,

    selected: usize,
    pub list_state: ListState,

    container_focus: FocusFlag,
    pub f_tree: FocusFlag,
    pub last_area: Rect,
}

impl NavFilterState {
    /// Captures the navigation tree, resolving the active entry for
    /// `initial_path` when one is given.
    pub fn new(definition: &NavDefinition, initial_path: Option<&str>, search: Option<SearchField>, status_template: StatusTemplate) -> Self {
        let groups = build_nav_state(initial_path.unwrap_or_default(), &definition.groups)
            .into_iter()
            .map(NavGroupNode::from_state)
            .collect();
        let mut state = Self {
            definitions: definition.groups.clone(),
            groups,
            search,
            status: String::new(),
            status_template,
            selected: 0,
            list_state: ListState::default(),
            container_focus: FocusFlag::named("nav"),
            f_tree: FocusFlag::named("nav.tree"),
            last_area: Rect::default(),
        };
        state.select_active_row();
        state
    }

    pub fn groups(&self) -> &[NavGroupNode] {
        &self.groups
    }

    /// Text of the status line; empty while no query is active.
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn search(&self) -> Option<&SearchField> {
        self.search.as_ref()
    }

    pub fn has_search(&self) -> bool {
        self.search.is_some()
    }

    /// Normalised query, or `None` without a search box.
    pub fn query(&self) -> Option<String> {
        self.search.as_ref().map(|search| normalize_query(search.input.input()))
    }

    /// Brings entry/group visibility and the status line in line with the
    /// search text.
    ///
    /// - Empty query: every flag is cleared and the status emptied. Groups keep
    ///   whatever open state they had.
    /// - Otherwise an entry stays visible when its trimmed, lowercased label
    ///   contains the query; a group stays visible when any of its entries do,
    ///   and such a group is forced open (never closed).
    ///
    /// Without a search box this does nothing.
    pub fn apply_filter(&mut self) {
        let Some(query) = self.query() else {
            return;
        };

        if query.is_empty() {
            for group in &mut self.groups {
                group.filtered_out = false;
                for item in &mut group.items {
                    item.filtered_out = false;
                }
            }
            self.status.clear();
            self.clamp_selection();
            return;
        }

        let mut shown = 0;
        for item in self.groups.iter_mut().flat_map(|group| group.items.iter_mut()) {
            let ok = matches_query(&item.label, &query);
            item.filtered_out = !ok;
            if ok {
                shown += 1;
            }
        }

        for group in &mut self.groups {
            let any_visible = group.has_visible_item();
            group.filtered_out = !any_visible;
            if any_visible {
                group.open = true;
            }
        }

        self.status = self.status_template.render(shown);
        debug!(query = %query, shown, "applied navigation filter");
        self.clamp_selection();
    }

    // ========================
    // Search input
    // ========================

    pub fn search_insert_char(&mut self, character: char) {
        self.edit_search(|input| input.insert_char(character));
    }

    pub fn search_insert_str(&mut self, text: &str) {
        self.edit_search(|input| input.insert_str(text));
    }

    pub fn search_backspace(&mut self) {
        self.edit_search(TextInputState::backspace);
    }

    pub fn search_delete(&mut self) {
        self.edit_search(TextInputState::delete);
    }

    pub fn search_clear(&mut self) {
        self.edit_search(TextInputState::clear);
    }

    /// Cursor-only moves; these never trigger a filter pass.
    pub fn search_cursor(&mut self, mv: impl FnOnce(&mut TextInputState)) {
        if let Some(search) = self.search.as_mut() {
            mv(&mut search.input);
        }
    }

    /// Runs `edit` on the search text and re-filters when the text changed.
    fn edit_search(&mut self, edit: impl FnOnce(&mut TextInputState) -> bool) {
        let Some(search) = self.search.as_mut() else {
            return;
        };
        if edit(&mut search.input) {
            self.apply_filter();
        }
    }

    // ========================
    // Active route
    // ========================

    /// Marks the entry matching `route` as active and opens only its group.
    /// Any active query is re-applied afterwards so matching groups stay
    /// expanded.
    pub fn set_active_route(&mut self, route: &Route) -> Option<String> {
        let active_key = best_active_key(route.as_str(), &self.definitions);
        for group in &mut self.groups {
            for item in &mut group.items {
                item.active = active_key.as_deref() == Some(item.key.as_str());
            }
            group.open = group.items.iter().any(|item| item.active);
        }
        if self.query().is_some_and(|query| !query.is_empty()) {
            self.apply_filter();
        }
        self.select_active_row();
        active_key
    }

    pub fn active_item(&self) -> Option<(&NavGroupNode, &NavItemNode)> {
        self.groups
            .iter()
            .find_map(|group| group.items.iter().find(|item| item.active).map(|item| (group, item)))
    }

    // ========================
    // Tree rows & selection
    // ========================

    /// Rows currently on screen: visible groups and, for open groups, their
    /// visible entries.
    pub fn visible_rows(&self) -> Vec<NavRow> {
        let mut rows = Vec::new();
        for (group_index, group) in self.groups.iter().enumerate() {
            if group.filtered_out {
                continue;
            }
            rows.push(NavRow::Group(group_index));
            if !group.open {
                continue;
            }
            rows.extend(
                group
                    .items
                    .iter()
                    .enumerate()
                    .filter(|(_, item)| !item.filtered_out)
                    .map(|(item_index, _)| NavRow::Item(group_index, item_index)),
            );
        }
        rows
    }

    pub fn selected_row(&self) -> Option<NavRow> {
        self.visible_rows().get(self.selected).copied()
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.visible_rows().len();
        if len == 0 {
            return;
        }
        let next = self.selected.saturating_add_signed(delta).min(len - 1);
        self.selected = next;
        self.list_state.select(Some(next));
    }

    /// Toggles a group header or returns the route of the selected entry.
    pub fn activate_selected(&mut self) -> Option<Route> {
        match self.selected_row()? {
            NavRow::Group(group_index) => {
                let group = &mut self.groups[group_index];
                group.open = !group.open;
                self.clamp_selection();
                None
            }
            NavRow::Item(group_index, item_index) => Some(Route::new(self.groups[group_index].items[item_index].href.clone())),
        }
    }

    fn select_active_row(&mut self) {
        let rows = self.visible_rows();
        let active_row = rows.iter().position(|row| match row {
            NavRow::Item(group_index, item_index) => self.groups[*group_index].items[*item_index].active,
            NavRow::Group(_) => false,
        });
        if let Some(index) = active_row {
            self.selected = index;
        }
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_rows().len();
        self.selected = self.selected.min(len.saturating_sub(1));
        self.list_state.select((len > 0).then_some(self.selected));
    }
}

impl HasFocus for NavFilterState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        if let Some(search) = &self.search {
            builder.leaf_widget(&search.focus);
        }
        builder.leaf_widget(&self.f_tree);
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}
