//! Status line template for the navigation filter.
//!
//! The status line reports how many entries survived the current query. The
//! default wording is Ukrainian and matches the panels the built-in catalogs
//! describe; other deployments can supply their own template as long as it
//! keeps the `{shown}` placeholder.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder replaced with the visible item count.
pub const SHOWN_PLACEHOLDER: &str = "{shown}";

/// Template used when nothing else is configured.
pub const DEFAULT_STATUS_TEMPLATE: &str = "результатів: {shown}";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusTemplateError {
    #[error("status template is empty")]
    Empty,
    #[error("status template '{0}' does not contain the {{shown}} placeholder")]
    MissingPlaceholder(String),
}

/// Validated status template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StatusTemplate(String);

impl StatusTemplate {
    /// Validates `template`; it must be non-blank and mention `{shown}`.
    pub fn parse(template: impl Into<String>) -> Result<Self, StatusTemplateError> {
        let template = template.into();
        if template.trim().is_empty() {
            return Err(StatusTemplateError::Empty);
        }
        if !template.contains(SHOWN_PLACEHOLDER) {
            return Err(StatusTemplateError::MissingPlaceholder(template));
        }
        Ok(Self(template))
    }

    /// Renders the template for `shown` visible entries.
    pub fn render(&self, shown: usize) -> String {
        self.0.replace(SHOWN_PLACEHOLDER, &shown.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StatusTemplate {
    fn default() -> Self {
        Self(DEFAULT_STATUS_TEMPLATE.to_string())
    }
}

impl fmt::Display for StatusTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for StatusTemplate {
    type Error = StatusTemplateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<StatusTemplate> for String {
    fn from(value: StatusTemplate) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_renders_ukrainian_count() {
        assert_eq!(StatusTemplate::default().render(1), "результатів: 1");
        assert_eq!(StatusTemplate::default().render(0), "результатів: 0");
    }

    #[test]
    fn custom_template_replaces_every_placeholder() {
        let template = StatusTemplate::parse("{shown} shown ({shown})").expect("valid template");
        assert_eq!(template.render(3), "3 shown (3)");
    }

    #[test]
    fn rejects_blank_and_placeholderless_templates() {
        assert_eq!(StatusTemplate::parse("   "), Err(StatusTemplateError::Empty));
        assert!(matches!(
            StatusTemplate::parse("results"),
            Err(StatusTemplateError::MissingPlaceholder(_))
        ));
    }

    #[test]
    fn deserialization_validates() {
        let ok: StatusTemplate = serde_json::from_str("\"matches: {shown}\"").expect("valid");
        assert_eq!(ok.render(2), "matches: 2");
        assert!(serde_json::from_str::<StatusTemplate>("\"matches\"").is_err());
    }
}
