//! Integration tests for policy, capability, and role checks.

mod helpers;

use std::sync::Arc;

use serde_json::json;

use grc_policy_engine::{AppConfig, DecisionReason, Engine, Principal, RbacMode};
use grc_rbac::UNKNOWN_ROLE_ACTION;

use helpers::{OfflineAuditStore, TestEngine, persist_config, stub_config};

const CATALOG: &[&str] = &["Admin", "Auditor", "Risk Manager", "User"];

fn unknown_role_audits(app: &TestEngine, policy: &str) -> usize {
    app.audit
        .events_with_action(UNKNOWN_ROLE_ACTION)
        .iter()
        .filter(|e| e.entity_id == policy)
        .count()
}

#[test]
fn test_stub_mode_allows_anonymous() {
    let app = TestEngine::new(stub_config(), CATALOG);
    for policy in ["core.settings.manage", "no.such.policy", ""] {
        assert!(app.engine.allows(None, policy));
    }
    assert!(app.engine.has_any_role(None, ["Admin"]));
}

#[test]
fn test_disabled_rbac_allows_anonymous() {
    let mut config = persist_config(json!({}));
    config.rbac.enabled = false;
    let app = TestEngine::new(config, CATALOG);
    assert_eq!(app.engine.evaluator().mode(), RbacMode::Disabled);
    assert!(app.engine.allows(None, "core.settings.manage"));
    assert!(app.engine.has_any_role(None, ["Admin"]));
}

#[test]
fn test_unknown_policy_denied_for_every_role() {
    let app = TestEngine::new(persist_config(json!({})), CATALOG);
    let everyone = Principal::new(CATALOG.iter().copied());
    let decision = app.engine.decide(Some(&everyone), "no.such.policy");
    assert!(!decision.allowed);
    assert_eq!(decision.reason, DecisionReason::UnknownPolicy);
}

#[test]
fn test_persist_mode_uses_store_display_names() {
    let config = persist_config(json!({"core.evidence.manage": ["risk manager", "ADMIN"]}));
    let app = TestEngine::new(config, &["admin", "Risk   Manager"]);

    assert_eq!(
        app.engine.roles_for_policy("core.evidence.manage"),
        Some(vec!["Risk Manager".to_string(), "admin".to_string()])
    );
    let manager = Principal::new(["Risk Manager"]);
    assert!(app.engine.allows(Some(&manager), "core.evidence.manage"));

    let configured_case = Principal::new(["Admin"]);
    assert!(!app.engine.allows(Some(&configured_case), "core.evidence.manage"));
}

#[test]
fn test_case_and_spacing_variants_resolve_alike() {
    let variants = ["risk manager", "RISK   MANAGER", "  Risk\tManager "];
    let resolved: Vec<_> = variants
        .iter()
        .map(|token| {
            let app = TestEngine::new(persist_config(json!({"core.x": [token]})), CATALOG);
            app.engine.roles_for_policy("core.x")
        })
        .collect();
    assert!(resolved.iter().all(|r| r == &Some(vec!["Risk Manager".to_string()])));
}

#[test]
fn test_empty_policy_distinct_from_missing() {
    let app = TestEngine::new(persist_config(json!({"core.locked": []})), CATALOG);
    let admin = Principal::new(["Admin"]);

    assert_eq!(app.engine.roles_for_policy("core.locked"), Some(vec![]));
    assert_eq!(app.engine.roles_for_policy("core.missing"), None);
    assert_eq!(
        app.engine.decide(Some(&admin), "core.locked").reason,
        DecisionReason::EmptyPolicy
    );
    assert_eq!(
        app.engine.decide(Some(&admin), "core.missing").reason,
        DecisionReason::UnknownPolicy
    );
}

#[test]
fn test_unknown_role_audited_once() {
    let app = TestEngine::new(persist_config(json!({"core.x": ["Admin", "Ghost"]})), CATALOG);
    for _ in 0..3 {
        assert_eq!(app.engine.roles_for_policy("core.x"), Some(vec!["Admin".to_string()]));
    }

    let events = app.audit.events_with_action(UNKNOWN_ROLE_ACTION);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].category, "RBAC");
    assert_eq!(events[0].entity_type, "rbac.policy");
    assert_eq!(events[0].entity_id, "core.x");
    assert_eq!(events[0].meta_value("unknown_roles"), Some(&json!(["Ghost"])));
}

#[test]
fn test_catalog_change_starts_new_audit_generation() {
    let app = TestEngine::new(persist_config(json!({"core.x": ["Ghost"]})), CATALOG);
    app.engine.roles_for_policy("core.x");
    app.engine.roles_for_policy("core.x");

    app.roles.set_names(&["Admin", "Auditor", "Risk Manager", "User", "Vendor"]);
    app.engine.roles_for_policy("core.x");
    assert_eq!(unknown_role_audits(&app, "core.x"), 2);

    app.roles.set_names(&["Admin", "Ghost"]);
    let ghost = Principal::new(["Ghost"]);
    assert!(app.engine.allows(Some(&ghost), "core.x"));
    assert_eq!(unknown_role_audits(&app, "core.x"), 2);
    assert!(unknown_role_audits(&app, "core.audit.view") >= 1);
}

#[test]
fn test_unavailable_store_falls_back_to_configured_roles() {
    let app = TestEngine::new(persist_config(json!({})), &["Vendor"]);
    app.roles.set_available(false);

    let snapshot = app.engine.effective_snapshot();
    assert_eq!(snapshot.catalog, CATALOG);
    assert_eq!(snapshot.policies["core.audit.view"], vec!["Admin", "Auditor"]);
}

#[test]
fn test_self_audit_respects_audit_switch() {
    let mut config = persist_config(json!({"core.x": ["Ghost"]}));
    config.audit.enabled = false;
    let app = TestEngine::new(config, CATALOG);

    assert_eq!(app.engine.roles_for_policy("core.x"), Some(vec![]));
    assert!(app.audit.is_empty());
    assert_eq!(app.engine.effective_snapshot().unknown_roles["core.x"], vec!["Ghost"]);
}

#[test]
fn test_offline_audit_store_does_not_break_checks() {
    let config = persist_config(json!({"core.x": ["Admin", "Ghost"]}));
    let engine = Engine::new(config, None, Arc::new(OfflineAuditStore));
    let admin = Principal::new(["Admin"]);
    assert!(engine.allows(Some(&admin), "core.x"));
}

#[test]
fn test_capability_gating() {
    let mut config = persist_config(json!({}));
    config.rbac.capabilities = serde_json::from_value(json!({
        "core.audit.export": true,
        "core.evidence.delete": false,
        "core.exports.generate": "yes",
    }))
    .expect("flags");
    config.rbac.role_capabilities =
        serde_json::from_value(json!({"Auditor": ["core.audit.export"]})).expect("grants");
    let app = TestEngine::new(config, CATALOG);

    let admin = Principal::new(["Admin"]);
    let auditor = Principal::new(["Auditor"]);
    let user = Principal::new(["User"]);

    assert!(app.engine.has_capability(Some(&admin), "core.audit.export"));
    assert!(app.engine.has_capability(Some(&auditor), "core.audit.export"));
    assert!(!app.engine.has_capability(Some(&user), "core.audit.export"));
    assert!(!app.engine.has_capability(None, "core.audit.export"));
    for key in ["core.evidence.delete", "core.exports.generate", "core.unlisted"] {
        assert!(!app.engine.has_capability(Some(&admin), key), "{key}");
    }
}

#[test]
fn test_has_any_role_in_persist_mode() {
    let app = TestEngine::new(persist_config(json!({})), CATALOG);
    let auditor = Principal::new(["Auditor"]);
    assert!(!app.engine.has_any_role(None, ["Auditor"]));
    assert!(app.engine.has_any_role(Some(&auditor), ["Admin", "Auditor"]));
    assert!(!app.engine.has_any_role(Some(&auditor), ["auditor"]));
}

#[test]
fn test_concurrent_readers_share_one_snapshot() {
    let app = TestEngine::new(persist_config(json!({"core.x": ["Ghost", "Auditor"]})), CATALOG);
    let auditor = Principal::new(["Auditor"]);

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..50 {
                    assert!(app.engine.allows(Some(&auditor), "core.x"));
                }
            });
        }
    });

    let fingerprints: std::collections::HashSet<_> =
        (0..3).map(|_| app.engine.effective_snapshot().fingerprint).collect();
    assert_eq!(fingerprints.len(), 1);
    let audits = unknown_role_audits(&app, "core.x");
    assert!((1..=8).contains(&audits), "audits: {audits}");
}

#[test]
fn test_clear_cache_rebuilds() {
    let app = TestEngine::new(persist_config(json!({"core.x": ["Ghost"]})), CATALOG);
    app.engine.roles_for_policy("core.x");
    app.engine.clear_cache();
    app.engine.roles_for_policy("core.x");
    assert_eq!(unknown_role_audits(&app, "core.x"), 2);
}

#[test]
fn test_engine_from_default_config() {
    let engine = Engine::from_config(AppConfig::default());
    assert_eq!(engine.evaluator().mode(), RbacMode::StubPermissive);
    assert_eq!(engine.effective_snapshot().policies.len(), 14);
}
