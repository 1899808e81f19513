use std::{error::Error, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A single navigation entry as declared in a navigation definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItemDef {
    /// Stable identifier used to resolve the active entry (e.g., "alerts").
    pub key: String,
    /// Text shown in the sidebar and matched by the filter.
    pub label: String,
    /// Route the entry points at (e.g., "/admin2/fleet/alerts").
    pub href: String,
}

impl NavItemDef {
    pub fn new(key: impl Into<String>, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            href: href.into(),
        }
    }
}

/// A collapsible group of navigation entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavGroupDef {
    pub title: String,
    #[serde(default)]
    pub items: Vec<NavItemDef>,
}

/// A complete two-level navigation tree (`group -> items`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavDefinition {
    /// Display name of the panel this navigation belongs to.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub groups: Vec<NavGroupDef>,
}

impl NavDefinition {
    /// Iterates over every item in declaration order.
    pub fn items(&self) -> impl Iterator<Item = &NavItemDef> {
        self.groups.iter().flat_map(|group| group.items.iter())
    }

    /// Finds the item registered under `key`.
    pub fn find_item(&self, key: &str) -> Option<&NavItemDef> {
        self.items().find(|item| item.key == key)
    }
}

/// Built-in navigation catalogs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    #[default]
    Admin,
    Client,
}

impl Panel {
    pub const ALL: [Panel; 2] = [Panel::Admin, Panel::Client];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Panel::Admin => "admin",
            Panel::Client => "client",
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Panel {
    type Err = ParsePanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "client" => Ok(Self::Client),
            other => Err(ParsePanelError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePanelError(String);

impl fmt::Display for ParsePanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown panel '{}' (expected one of: admin, client)", self.0)
    }
}

impl Error for ParsePanelError {}

/// Route the content pane currently shows; wraps the href of a nav item or a
/// path typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route(pub String);

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Side effects requested by components and executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Activate the navigation entry that best matches the route.
    SwitchTo(Route),
    /// Leave the application.
    Quit,
}
