//! Filesystem path helpers shared by the CLI and the TUI.

use std::path::PathBuf;

use dirs_next::{cache_dir, config_dir, home_dir};

/// Directory name used under the platform config/cache roots.
pub const APP_DIR_NAME: &str = "navfilter";

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde are returned trimmed but otherwise untouched.
pub fn expand_tilde(path: &str) -> PathBuf {
    let trimmed = path.trim();
    let rest = match trimmed {
        "~" => Some(""),
        _ => trimmed.strip_prefix("~/").or_else(|| trimmed.strip_prefix("~\\")),
    };
    match rest {
        Some(rest) => {
            let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
            if rest.is_empty() { home } else { home.join(rest) }
        }
        None => PathBuf::from(trimmed),
    }
}

/// `<config dir>/navfilter`, falling back to the working directory.
pub fn app_config_dir() -> PathBuf {
    config_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR_NAME)
}

/// `<cache dir>/navfilter`, falling back to the working directory.
pub fn app_cache_dir() -> PathBuf {
    cache_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR_NAME)
}
