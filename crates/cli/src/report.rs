//! Plain-text rendering of the navigation tree for non-interactive use.

use std::fmt::Write;

use navfilter_tui::NavFilterState;

/// Renders the groups and entries that survive the current filter, followed
/// by the status line when a query is active.
pub fn render(state: &NavFilterState) -> String {
    let mut out = String::new();
    for group in state.groups().iter().filter(|group| !group.filtered_out) {
        let marker = if group.open { '▾' } else { '▸' };
        let _ = writeln!(out, "{marker} {}", group.title);
        if !group.open {
            continue;
        }
        for item in group.items.iter().filter(|item| !item.filtered_out) {
            let active = if item.active { '●' } else { ' ' };
            let _ = writeln!(out, "  {active} {}  {}", item.label.trim(), item.href);
        }
    }
    if !state.status().is_empty() {
        let _ = writeln!(out, "{}", state.status());
    }
    out
}

#[cfg(test)]
mod tests {
    use navfilter_tui::SearchField;
    use navfilter_types::{NavDefinition, NavGroupDef, NavItemDef};
    use navfilter_util::StatusTemplate;

    use super::*;

    fn state(path: Option<&str>) -> NavFilterState {
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
        NavFilterState::new(&definition, path, Some(SearchField::default()), StatusTemplate::default())
    }

    #[test]
    fn filtered_report_lists_matches_and_status() {
        let mut state = state(None);
        state.search_insert_str("ro");
        assert_eq!(render(&state), "▾ Access\n    Roles  /roles\nрезультатів: 1\n");
    }

    #[test]
    fn unfiltered_report_expands_only_the_active_group() {
        let state = state(Some("/settings"));
        assert_eq!(render(&state), "▸ Access\n▾ System\n  ● Settings  /settings\n");
    }
}
