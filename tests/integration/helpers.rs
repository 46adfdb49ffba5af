//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use serde_json::Value;

use grc_policy_engine::{AppConfig, AppError, AppResult, AuditEvent, AuditStore, Engine, MemoryAuditStore, RoleStore};

/// Role store backed by a mutable list.
#[derive(Debug)]
pub struct StaticRoleStore {
    names: Mutex<Vec<String>>,
    available: AtomicBool,
}

impl StaticRoleStore {
    pub fn new(names: &[&str]) -> Self {
        Self {
            names: Mutex::new(names.iter().map(|n| (*n).to_string()).collect()),
            available: AtomicBool::new(true),
        }
    }

    pub fn set_names(&self, names: &[&str]) {
        *self.names.lock().expect("lock") = names.iter().map(|n| (*n).to_string()).collect();
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }
}

impl RoleStore for StaticRoleStore {
    fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    fn list_role_names(&self) -> AppResult<Vec<String>> {
        Ok(self.names.lock().expect("lock").clone())
    }
}

/// Audit store that rejects every write.
#[derive(Debug)]
pub struct OfflineAuditStore;

impl AuditStore for OfflineAuditStore {
    fn append(&self, _event: &AuditEvent) -> AppResult<()> {
        Err(AppError::unavailable("audit database offline"))
    }
}

/// Engine plus handles to its in-memory collaborators.
pub struct TestEngine {
    pub engine: Engine,
    pub audit: Arc<MemoryAuditStore>,
    pub roles: Arc<StaticRoleStore>,
}

impl TestEngine {
    /// Engine over `config`, a role store holding `catalog`, and a memory audit store.
    pub fn new(config: AppConfig, catalog: &[&str]) -> Self {
        let audit = Arc::new(MemoryAuditStore::new());
        let roles = Arc::new(StaticRoleStore::new(catalog));
        let engine = Engine::new(config, Some(roles.clone()), audit.clone());
        Self {
            engine,
            audit,
            roles,
        }
    }
}

/// Default configuration switched to persist mode with the given overrides.
pub fn persist_config(policies: Value) -> AppConfig {
    let mut config = AppConfig::default();
    config.rbac.mode = "persist".to_string();
    config.rbac.policies = serde_json::from_value(policies).expect("policy overrides");
    config
}

/// Default configuration in stub mode.
pub fn stub_config() -> AppConfig {
    AppConfig::default()
}
