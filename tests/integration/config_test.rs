//! Integration tests for building an engine from a configuration file.

use std::io::Write;

use grc_policy_engine::{AppConfig, Engine, Principal, RbacMode};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("tempfile");
    file.write_all(contents.as_bytes()).expect("write");
    file
}

#[test]
fn test_engine_from_toml() {
    let file = write_config(
        r#"
[rbac]
mode = "persist"
roles = ["Admin", "Auditor", "Compliance Lead", 42]

[rbac.policies]
"core.audit.view" = ["compliance  lead"]
"core.reports.view" = "Admin"
"custom.vendor.review" = []

[rbac.role_capabilities]
"Compliance Lead" = ["core.audit.export"]

[rbac.capabilities]
"core.audit.export" = true
"core.evidence.upload" = "true"
"#,
    );
    let config = AppConfig::load(file.path().to_str().expect("utf-8 path")).expect("load");
    let engine = Engine::from_config(config);
    assert_eq!(engine.evaluator().mode(), RbacMode::PersistEnforced);

    let lead = Principal::new(["Compliance Lead"]);
    let auditor = Principal::new(["Auditor"]);
    assert!(engine.allows(Some(&lead), "core.audit.view"));
    assert!(!engine.allows(Some(&auditor), "core.audit.view"));
    assert!(engine.allows(Some(&auditor), "core.reports.view"));
    assert_eq!(engine.roles_for_policy("custom.vendor.review"), Some(vec![]));

    assert!(engine.has_capability(Some(&lead), "core.audit.export"));
    assert!(!engine.has_capability(Some(&lead), "core.evidence.upload"));

    let snapshot = engine.effective_snapshot();
    assert_eq!(snapshot.catalog, vec!["Admin", "Auditor", "Compliance Lead"]);
    assert_eq!(snapshot.unknown_roles["core.evidence.view"], vec!["Risk Manager"]);
}

#[test]
fn test_missing_file_uses_defaults() {
    let config = AppConfig::load("tests/fixtures/absent.toml").expect("defaults");
    let engine = Engine::from_config(config);
    assert_eq!(engine.evaluator().mode(), RbacMode::StubPermissive);
    assert!(AppConfig::load_strict("tests/fixtures/absent.toml").is_err());
}

#[test]
fn test_shipped_default_config_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/default.toml");
    let config = AppConfig::load_strict(path).expect("shipped config");
    assert_eq!(config.rbac.mode, "stub");
    assert!(config.audit.enabled);
    assert_eq!(config.rbac.capabilities.len(), 4);
}
