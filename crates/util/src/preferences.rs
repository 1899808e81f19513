//! User preference persistence for the navfilter CLI/TUI.
//!
//! A tiny JSON-backed store for the few knobs worth remembering between runs:
//! the preferred theme and a custom status line template. The file lives in the
//! standard configuration directory (`~/.config/navfilter/preferences.json` on
//! most platforms). Filter state itself is never persisted.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::{app_config_dir, expand_tilde};

/// Environment variable allowing callers to override the preferences file path.
pub const PREFERENCES_PATH_ENV: &str = "NAVFILTER_PREFERENCES_PATH";

/// Default filename for the JSON payload.
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Error surfaced when reading or writing preferences fails.
#[derive(Debug, Error)]
pub enum PreferencesError {
    /// I/O failure (for example, permissions or missing directory).
    #[error("preferences I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization or deserialization failure.
    #[error("preferences serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persisted preference values.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesPayload {
    /// Canonical identifier of the preferred theme.
    #[serde(default)]
    pub preferred_theme: Option<String>,
    /// Raw status template; validated by the caller.
    #[serde(default)]
    pub status_template: Option<String>,
}

/// Thread-safe preferences store backed by a JSON file.
#[derive(Debug, Default)]
pub struct UserPreferences {
    path: PathBuf,
    payload: Mutex<PreferencesPayload>,
    persist_to_disk: bool,
}

impl UserPreferences {
    /// Opens the store at the default location (or `NAVFILTER_PREFERENCES_PATH`).
    pub fn new() -> Result<Self, PreferencesError> {
        Self::open(default_preferences_path())
    }

    /// Opens the store at an explicit path. A missing file yields defaults; a
    /// malformed one is logged and ignored.
    pub fn open(path: PathBuf) -> Result<Self, PreferencesError> {
        let payload = load_payload(&path)?;
        Ok(Self {
            path,
            payload: Mutex::new(payload),
            persist_to_disk: true,
        })
    }

    /// In-memory store used when the config directory cannot be accessed.
    pub fn ephemeral() -> Self {
        Self {
            path: PathBuf::new(),
            payload: Mutex::new(PreferencesPayload::default()),
            persist_to_disk: false,
        }
    }

    /// Path to the underlying JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn preferred_theme(&self) -> Option<String> {
        self.payload.lock().expect("preferences lock poisoned").preferred_theme.clone()
    }

    pub fn status_template(&self) -> Option<String> {
        self.payload.lock().expect("preferences lock poisoned").status_template.clone()
    }

    /// Persist a new preferred theme identifier.
    pub fn set_preferred_theme(&self, theme_id: Option<String>) -> Result<(), PreferencesError> {
        self.update(|payload| payload.preferred_theme = theme_id)
    }

    /// Persist a new status template (unvalidated).
    pub fn set_status_template(&self, template: Option<String>) -> Result<(), PreferencesError> {
        self.update(|payload| payload.status_template = template)
    }

    fn update(&self, apply: impl FnOnce(&mut PreferencesPayload)) -> Result<(), PreferencesError> {
        let mut payload = self.payload.lock().expect("preferences lock poisoned");
        apply(&mut payload);
        if self.persist_to_disk {
            self.save_locked(&payload)?;
        }
        Ok(())
    }

    fn save_locked(&self, payload: &PreferencesPayload) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(payload)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

/// Resolves the preferences file path, honouring `NAVFILTER_PREFERENCES_PATH`.
pub fn default_preferences_path() -> PathBuf {
    if let Ok(path) = env::var(PREFERENCES_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return expand_tilde(trimmed);
        }
    }
    app_config_dir().join(PREFERENCES_FILE_NAME)
}

fn load_payload(path: &Path) -> Result<PreferencesPayload, PreferencesError> {
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(payload) => Ok(payload),
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to parse preferences file; using defaults"
                );
                Ok(PreferencesPayload::default())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(PreferencesPayload::default()),
        Err(error) => Err(PreferencesError::Io(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let prefs = UserPreferences::open(dir.path().join("nope.json")).expect("open");
        assert_eq!(prefs.preferred_theme(), None);
        assert_eq!(prefs.status_template(), None);
    }

    #[test]
    fn values_round_trip_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join(PREFERENCES_FILE_NAME);
        let prefs = UserPreferences::open(path.clone()).expect("open");
        prefs.set_preferred_theme(Some("nord".into())).expect("save theme");
        prefs.set_status_template(Some("found {shown}".into())).expect("save template");

        let reopened = UserPreferences::open(path).expect("reopen");
        assert_eq!(reopened.preferred_theme().as_deref(), Some("nord"));
        assert_eq!(reopened.status_template().as_deref(), Some("found {shown}"));
    }

    #[test]
    fn malformed_file_is_ignored() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(PREFERENCES_FILE_NAME);
        fs::write(&path, "{ not json").expect("write");
        let prefs = UserPreferences::open(path).expect("open");
        assert_eq!(prefs.preferred_theme(), None);
    }

    #[test]
    fn ephemeral_store_never_touches_disk() {
        let prefs = UserPreferences::ephemeral();
        prefs.set_preferred_theme(Some("dracula".into())).expect("in-memory update");
        assert_eq!(prefs.preferred_theme().as_deref(), Some("dracula"));
        assert_eq!(prefs.path(), Path::new(""));
    }

    #[test]
    fn env_override_selects_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let custom = dir.path().join("custom.json");
        let custom_str = custom.to_string_lossy().to_string();
        temp_env::with_var(PREFERENCES_PATH_ENV, Some(custom_str.as_str()), || {
            assert_eq!(default_preferences_path(), custom);
        });
    }
}
