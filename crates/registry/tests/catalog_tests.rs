use std::path::Path;

use navfilter_registry::{NavRegistry, Panel, RegistryError, best_active_key, build_nav_state, load_definition_file};

fn fixture_path() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("data").join("custom_nav.json")
}

#[test]
fn loads_json_fixture() {
    let definition = load_definition_file(&fixture_path()).expect("load fixture");
    assert_eq!(definition.name, "Demo");
    let labels: Vec<_> = definition.items().map(|item| item.label.as_str()).collect();
    assert_eq!(labels, vec!["Users", "Roles", "Settings"]);
}

#[test]
fn yaml_file_with_yml_extension_loads() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nav.yml");
    std::fs::write(&path, "groups:\n  - title: Only\n    items:\n      - { key: a, label: Alpha, href: /a }\n").expect("write");
    let definition = load_definition_file(&path).expect("load yaml");
    assert_eq!(definition.find_item("a").map(|item| item.label.as_str()), Some("Alpha"));
}

#[test]
fn missing_file_reports_path() {
    let err = load_definition_file(Path::new("/definitely/not/here.yaml")).unwrap_err();
    match err {
        RegistryError::Io { path, .. } => assert!(path.ends_with("here.yaml")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unsupported_extension_is_rejected_before_reading() {
    let err = load_definition_file(Path::new("nav.toml")).unwrap_err();
    assert!(matches!(err, RegistryError::UnsupportedFormat(_)));
}

#[test]
fn admin_catalog_resolves_nested_routes() {
    let registry = NavRegistry::from_embedded().expect("embedded");
    let admin = registry.definition(Panel::Admin).expect("admin");
    assert_eq!(best_active_key("/admin2/fleet/incidents/17", &admin.groups).as_deref(), Some("incidents"));
    assert_eq!(best_active_key("/admin2/", &admin.groups).as_deref(), Some("overview"));

    let state = build_nav_state("/admin2/kpi/history", &admin.groups);
    let open: Vec<_> = state.iter().filter(|group| group.open).map(|group| group.title.as_str()).collect();
    assert_eq!(open, vec!["Контроль і KPI"]);
}
