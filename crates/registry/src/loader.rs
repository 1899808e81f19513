//! Loading and validation of navigation definition files.

use std::{collections::HashSet, fs, path::Path};

use navfilter_types::NavDefinition;
use tracing::info;

use crate::RegistryError;

/// Serialization format of a navigation definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    Json,
    Yaml,
}

impl DefinitionFormat {
    /// Picks the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Reads, parses and validates the definition stored at `path`.
pub fn load_definition_file(path: &Path) -> Result<NavDefinition, RegistryError> {
    let format = DefinitionFormat::from_path(path).ok_or_else(|| RegistryError::UnsupportedFormat(path.to_path_buf()))?;
    let content = fs::read_to_string(path).map_err(|source| RegistryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let definition = parse_definition(&content, format)?;
    info!(
        path = %path.display(),
        groups = definition.groups.len(),
        items = definition.items().count(),
        "loaded navigation definition"
    );
    Ok(definition)
}

/// Parses `content` in the given format and validates the result.
pub fn parse_definition(content: &str, format: DefinitionFormat) -> Result<NavDefinition, RegistryError> {
    let definition: NavDefinition = match format {
        DefinitionFormat::Json => serde_json::from_str(content)?,
        DefinitionFormat::Yaml => serde_yaml::from_str(content)?,
    };
    validate(&definition)?;
    Ok(definition)
}

/// Keys identify the active entry, so they must be unique and non-empty.
fn validate(definition: &NavDefinition) -> Result<(), RegistryError> {
    let mut seen = HashSet::new();
    for item in definition.items() {
        if item.key.trim().is_empty() {
            return Err(RegistryError::EmptyField(item.label.clone(), "key"));
        }
        if item.href.trim().is_empty() {
            return Err(RegistryError::EmptyField(item.key.clone(), "href"));
        }
        if !seen.insert(item.key.as_str()) {
            return Err(RegistryError::DuplicateKey(item.key.clone()));
        }
    }
    Ok(())
}
