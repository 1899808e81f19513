//! Active-entry resolution.
//!
//! Given the current route path, the entry with the longest href that is the
//! path itself or one of its ancestors becomes active, and only its group
//! starts expanded.

use navfilter_types::{NavGroupDef, NavItemDef};

/// Item plus its derived active flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItemState {
    pub item: NavItemDef,
    pub active: bool,
}

/// Group plus its derived open flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavGroupState {
    pub title: String,
    pub open: bool,
    pub items: Vec<NavItemState>,
}

/// Strips trailing slashes; the empty result collapses to `/`.
pub fn normalize_route_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Returns the key of the item whose href best matches `path`.
///
/// An href matches when it equals the normalised path or is a `/`-delimited
/// prefix of it. The longest matching href wins; on equal length the first
/// declared item is kept.
pub fn best_active_key(path: &str, groups: &[NavGroupDef]) -> Option<String> {
    let normalized = normalize_route_path(path);
    let mut best_key: Option<String> = None;
    let mut best_len: Option<usize> = None;
    for item in groups.iter().flat_map(|group| group.items.iter()) {
        let href = normalize_route_path(&item.href);
        let is_match = normalized == href
            || normalized
                .strip_prefix(href)
                .is_some_and(|rest| rest.starts_with('/'));
        if is_match && best_len.is_none_or(|len| href.len() > len) {
            best_len = Some(href.len());
            best_key = (!item.key.is_empty()).then(|| item.key.clone());
        }
    }
    best_key
}

/// Marks the active item for `path` and opens only the group that holds it.
pub fn build_nav_state(path: &str, groups: &[NavGroupDef]) -> Vec<NavGroupState> {
    let active_key = best_active_key(path, groups);
    groups
        .iter()
        .map(|group| {
            let items: Vec<NavItemState> = group
                .items
                .iter()
                .map(|item| NavItemState {
                    active: active_key.as_deref() == Some(item.key.as_str()),
                    item: item.clone(),
                })
                .collect();
            NavGroupState {
                title: group.title.clone(),
                open: items.iter().any(|item| item.active),
                items,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups() -> Vec<NavGroupDef> {
        vec![
            NavGroupDef {
                title: "Start".into(),
                items: vec![NavItemDef::new("overview", "Overview", "/admin2")],
            },
            NavGroupDef {
                title: "Fleet".into(),
                items: vec![
                    NavItemDef::new("fleet", "Fleet", "/admin2/fleet"),
                    NavItemDef::new("alerts", "Alerts", "/admin2/fleet/alerts/"),
                ],
            },
        ]
    }

    #[test]
    fn normalizes_trailing_slashes() {
        assert_eq!(normalize_route_path("/admin2/"), "/admin2");
        assert_eq!(normalize_route_path("///"), "/");
        assert_eq!(normalize_route_path(""), "/");
    }

    #[test]
    fn longest_prefix_wins() {
        let groups = groups();
        assert_eq!(best_active_key("/admin2/fleet/alerts/42", &groups).as_deref(), Some("alerts"));
        assert_eq!(best_active_key("/admin2/fleet/", &groups).as_deref(), Some("fleet"));
        assert_eq!(best_active_key("/admin2/kpi", &groups).as_deref(), Some("overview"));
    }

    #[test]
    fn prefix_must_end_on_segment_boundary() {
        let groups = groups();
        assert_eq!(best_active_key("/admin2/fleetwood", &groups).as_deref(), Some("overview"));
        assert_eq!(best_active_key("/admin22", &groups), None);
        assert_eq!(best_active_key("/client2", &groups), None);
    }

    #[test]
    fn equal_length_keeps_first_declared() {
        let groups = vec![NavGroupDef {
            title: "Dup".into(),
            items: vec![NavItemDef::new("first", "A", "/x"), NavItemDef::new("second", "B", "/x/")],
        }];
        assert_eq!(best_active_key("/x", &groups).as_deref(), Some("first"));
    }

    #[test]
    fn state_opens_only_the_active_group() {
        let state = build_nav_state("/admin2/fleet/alerts", &groups());
        assert!(!state[0].open);
        assert!(state[1].open);
        let active: Vec<_> = state
            .iter()
            .flat_map(|group| group.items.iter())
            .filter(|item| item.active)
            .map(|item| item.item.key.as_str())
            .collect();
        assert_eq!(active, vec!["alerts"]);
    }

    #[test]
    fn unmatched_path_leaves_everything_closed() {
        let state = build_nav_state("/elsewhere", &groups());
        assert!(state.iter().all(|group| !group.open));
        assert!(state.iter().flat_map(|group| &group.items).all(|item| !item.active));
    }
}
