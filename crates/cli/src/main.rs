mod report;

use std::{fs, path::PathBuf, sync::Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use navfilter_registry::{NavRegistry, load_definition_file};
use navfilter_tui::{NavFilterState, SearchField, TuiConfig};
use navfilter_types::{NavDefinition, Panel};
use navfilter_util::{StatusTemplate, UserPreferences, app_cache_dir, expand_tilde};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log file location.
const LOG_PATH_ENV: &str = "NAVFILTER_LOG_PATH";
const LOG_FILE_NAME: &str = "navfilter.log";

#[derive(Debug, Parser)]
#[command(name = "navfilter")]
#[command(about = "Filterable navigation sidebar for the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Built-in navigation catalog to show
    #[arg(long, default_value_t = Panel::Admin)]
    panel: Panel,

    /// Load the navigation tree from a JSON or YAML file instead
    #[arg(long, value_name = "FILE")]
    nav_file: Option<PathBuf>,

    /// Route to start on; selects the active entry
    #[arg(long, value_name = "ROUTE")]
    path: Option<String>,

    /// Result count template, must contain `{shown}`
    #[arg(long, value_name = "TEMPLATE")]
    status_template: Option<String>,

    /// Theme id (dracula, nord, nord_hc, ansi256)
    #[arg(long)]
    theme: Option<String>,

    /// Hide the search box
    #[arg(long)]
    no_search: bool,

    /// Print the tree filtered by QUERY and exit instead of starting the TUI
    #[arg(long, value_name = "QUERY")]
    query: Option<String>,

    /// Store --theme and --status-template in the preferences file
    #[arg(long)]
    remember: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let interactive = cli.query.is_none();
    init_tracing(interactive)?;

    let preferences = load_preferences();
    let definition = load_definition(&cli)?;
    let status_template = resolve_status_template(cli.status_template.as_deref(), &preferences)?;
    let preferred_theme = cli.theme.clone().or_else(|| preferences.preferred_theme());

    if cli.remember {
        remember(&cli, &preferences)?;
    }

    if let Some(query) = cli.query.as_deref() {
        let search = (!cli.no_search).then(SearchField::default);
        let mut state = NavFilterState::new(&definition, cli.path.as_deref(), search, status_template);
        state.search_insert_str(query);
        print!("{}", report::render(&state));
        return Ok(());
    }

    let config = TuiConfig {
        definition,
        panel: cli.panel,
        initial_path: cli.path,
        status_template,
        search_enabled: !cli.no_search,
        preferred_theme,
    };
    navfilter_tui::run(config).await
}

/// Logs go to a file while the TUI owns the terminal, otherwise to stderr.
fn init_tracing(to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if !to_file {
        let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
        return Ok(());
    }

    let path = std::env::var(LOG_PATH_ENV)
        .map(|value| expand_tilde(&value))
        .unwrap_or_else(|_| app_cache_dir().join(LOG_FILE_NAME));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

fn load_preferences() -> UserPreferences {
    match UserPreferences::new() {
        Ok(preferences) => preferences,
        Err(error) => {
            warn!(%error, "could not open preferences; continuing without persistence");
            UserPreferences::ephemeral()
        }
    }
}

fn load_definition(cli: &Cli) -> Result<NavDefinition> {
    if let Some(path) = cli.nav_file.as_deref() {
        let definition = load_definition_file(path)?;
        info!(path = %path.display(), groups = definition.groups.len(), "loaded navigation file");
        return Ok(definition);
    }
    let registry = NavRegistry::from_embedded().context("built-in navigation catalogs are invalid")?;
    Ok(registry.definition(cli.panel)?.clone())
}

/// Command line beats preferences; a broken stored template falls back to the
/// default instead of failing startup.
fn resolve_status_template(from_cli: Option<&str>, preferences: &UserPreferences) -> Result<StatusTemplate> {
    if let Some(template) = from_cli {
        return StatusTemplate::parse(template).context("invalid --status-template");
    }
    let Some(stored) = preferences.status_template() else {
        return Ok(StatusTemplate::default());
    };
    Ok(StatusTemplate::parse(stored).unwrap_or_else(|error| {
        warn!(%error, "ignoring stored status template");
        StatusTemplate::default()
    }))
}

fn remember(cli: &Cli, preferences: &UserPreferences) -> Result<()> {
    if let Some(theme) = cli.theme.as_ref() {
        preferences.set_preferred_theme(Some(theme.clone()))?;
    }
    if let Some(template) = cli.status_template.as_ref() {
        preferences.set_status_template(Some(template.clone()))?;
    }
    info!(path = %preferences.path().display(), "saved preferences");
    Ok(())
}

#[cfg(test)]
mod tests {
    use navfilter_util::DEFAULT_STATUS_TEMPLATE;

    use super::*;

    fn preferences_with_template(template: &str) -> (tempfile::TempDir, UserPreferences) {
        let dir = tempfile::tempdir().expect("tempdir");
        let preferences = UserPreferences::open(dir.path().join("preferences.json")).expect("preferences");
        preferences.set_status_template(Some(template.to_string())).expect("save");
        (dir, preferences)
    }

    #[test]
    fn cli_template_wins_over_preferences() {
        let (_dir, preferences) = preferences_with_template("{shown} stored");
        let template = resolve_status_template(Some("{shown} flag"), &preferences).expect("template");
        assert_eq!(template.render(2), "2 flag");
    }

    #[test]
    fn invalid_cli_template_is_an_error() {
        let preferences = UserPreferences::ephemeral();
        assert!(resolve_status_template(Some("no placeholder"), &preferences).is_err());
    }

    #[test]
    fn broken_stored_template_falls_back_to_default() {
        let (_dir, preferences) = preferences_with_template("missing");
        let template = resolve_status_template(None, &preferences).expect("template");
        assert_eq!(template.as_str(), DEFAULT_STATUS_TEMPLATE);
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from(["navfilter", "--panel", "client", "--query", "ro", "--no-search"]).expect("args");
        assert_eq!(cli.panel, Panel::Client);
        assert_eq!(cli.query.as_deref(), Some("ro"));
        assert!(cli.no_search);
    }

    #[test]
    fn embedded_panels_load() {
        let cli = Cli::try_parse_from(["navfilter", "--panel", "client"]).expect("args");
        let definition = load_definition(&cli).expect("definition");
        assert!(!definition.groups.is_empty());
    }
}
