//! Registry crate for navigation definitions.
//!
//! This crate owns the built-in navigation catalogs (admin and client panels),
//! loads custom definitions from JSON or YAML files, validates them, and
//! resolves which entry is active for a given route path.

pub mod loader;
pub mod models;
pub mod state;

pub use loader::{DefinitionFormat, load_definition_file, parse_definition};
pub use models::NavRegistry;
pub use navfilter_types::{NavDefinition, NavGroupDef, NavItemDef, Panel};
pub use state::{NavGroupState, NavItemState, best_active_key, build_nav_state, normalize_route_path};

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating navigation definitions.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read navigation file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported navigation file extension for {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),
    #[error("invalid JSON navigation definition: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML navigation definition: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("navigation key '{0}' is declared more than once")]
    DuplicateKey(String),
    #[error("navigation item '{0}' has an empty {1}")]
    EmptyField(String, &'static str),
    #[error("no navigation catalog registered for panel '{0}'")]
    UnknownPanel(Panel),
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    /// The embedded catalogs must load and keep keys unique per panel, since
    /// active resolution identifies entries by key.
    #[test]
    fn embedded_catalogs_are_valid() {
        let registry = NavRegistry::from_embedded().expect("load embedded catalogs");
        for panel in Panel::ALL {
            let definition = registry.definition(panel).expect("catalog registered");
            assert!(!definition.groups.is_empty(), "{panel} catalog should not be empty");
            let mut seen = HashSet::new();
            for item in definition.items() {
                assert!(seen.insert(item.key.clone()), "duplicate key {} in {panel}", item.key);
                assert!(item.href.starts_with('/'), "href should be absolute: {}", item.href);
            }
        }
    }
}
