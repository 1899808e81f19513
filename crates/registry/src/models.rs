use indexmap::IndexMap;
use navfilter_types::{NavDefinition, Panel};
use tracing::debug;

use crate::{
    RegistryError,
    loader::{DefinitionFormat, parse_definition},
};

const ADMIN_CATALOG: &str = include_str!("../catalogs/admin.yaml");
const CLIENT_CATALOG: &str = include_str!("../catalogs/client.yaml");

/// Navigation definitions keyed by panel.
#[derive(Debug, Clone, Default)]
pub struct NavRegistry {
    definitions: IndexMap<Panel, NavDefinition>,
}

impl NavRegistry {
    /// Creates a registry holding the catalogs embedded at compile time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navfilter_registry::{NavRegistry, Panel};
    ///
    /// let registry = NavRegistry::from_embedded().expect("embedded catalogs");
    /// let admin = registry.definition(Panel::Admin).expect("admin catalog");
    /// assert!(admin.find_item("alerts").is_some());
    /// ```
    pub fn from_embedded() -> Result<Self, RegistryError> {
        let mut registry = Self::default();
        for (panel, source) in [(Panel::Admin, ADMIN_CATALOG), (Panel::Client, CLIENT_CATALOG)] {
            let definition = parse_definition(source, DefinitionFormat::Yaml)?;
            debug!(%panel, groups = definition.groups.len(), "loaded embedded navigation catalog");
            registry.insert(panel, definition);
        }
        Ok(registry)
    }

    /// Registers (or replaces) the definition for `panel`.
    pub fn insert(&mut self, panel: Panel, definition: NavDefinition) {
        self.definitions.insert(panel, definition);
    }

    pub fn definition(&self, panel: Panel) -> Result<&NavDefinition, RegistryError> {
        self.definitions.get(&panel).ok_or(RegistryError::UnknownPanel(panel))
    }

    pub fn panels(&self) -> impl Iterator<Item = Panel> + '_ {
        self.definitions.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_registry_reports_unknown_panel() {
        let registry = NavRegistry::default();
        assert!(matches!(
            registry.definition(Panel::Client),
            Err(RegistryError::UnknownPanel(Panel::Client))
        ));
    }

    #[test]
    fn embedded_panels_keep_declaration_order() {
        let registry = NavRegistry::from_embedded().expect("embedded");
        let panels: Vec<_> = registry.panels().collect();
        assert_eq!(panels, vec![Panel::Admin, Panel::Client]);
    }

    #[test]
    fn client_catalog_matches_expected_shape() {
        let registry = NavRegistry::from_embedded().expect("embedded");
        let client = registry.definition(Panel::Client).expect("client");
        let titles: Vec<_> = client.groups.iter().map(|group| group.title.as_str()).collect();
        assert_eq!(titles, vec!["Огляд", "Транспорт і статуси", "Акаунт"]);
        assert_eq!(client.items().count(), 6);
    }
}
