//! The engine facade.

use std::sync::Arc;

use tracing::info;

use grc_audit::{AuditEvent, AuditLogger, AuditStore, EventInput, MemoryAuditStore};
use grc_core::config::AppConfig;
use grc_core::result::AppResult;
use grc_core::traits::{RoleHolder, RoleStore};
use grc_rbac::{PolicySnapshot, RbacDecision, RbacEvaluator, RbacMode};

/// RBAC evaluator and audit logger built from one configuration.
#[derive(Debug, Clone)]
pub struct Engine {
    /// Configuration the engine was built from.
    config: AppConfig,
    /// Policy, capability, and role checks.
    evaluator: RbacEvaluator,
    /// Audit pipeline shared with the evaluator's self-audit.
    audit: AuditLogger,
}

impl Engine {
    /// Build an engine over the host's role store and audit store.
    pub fn new(
        config: AppConfig,
        roles: Option<Arc<dyn RoleStore>>,
        audit_store: Arc<dyn AuditStore>,
    ) -> Self {
        let audit = AuditLogger::new(audit_store);
        let self_audit = config.audit.enabled.then(|| audit.clone());
        let evaluator = RbacEvaluator::from_config(&config.rbac, roles, self_audit);
        info!(
            mode = %evaluator.mode(),
            self_audit = config.audit.enabled,
            role_store = roles_label(evaluator.mode()),
            "RBAC engine initialized"
        );
        Self {
            config,
            evaluator,
            audit,
        }
    }

    /// Build an engine with no role store and an in-memory audit store.
    pub fn from_config(config: AppConfig) -> Self {
        Self::new(config, None, Arc::new(MemoryAuditStore::new()))
    }

    /// The configuration in effect.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The evaluator.
    pub fn evaluator(&self) -> &RbacEvaluator {
        &self.evaluator
    }

    /// The audit logger.
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Whether `subject` may act under `policy`.
    pub fn allows(&self, subject: Option<&dyn RoleHolder>, policy: &str) -> bool {
        self.evaluator.allows(subject, policy)
    }

    /// A policy check with its reason.
    pub fn decide(&self, subject: Option<&dyn RoleHolder>, policy: &str) -> RbacDecision {
        self.evaluator.decide(subject, policy)
    }

    /// Whether `subject` holds capability `key`.
    pub fn has_capability(&self, subject: Option<&dyn RoleHolder>, key: &str) -> bool {
        self.evaluator.has_capability(subject, key)
    }

    /// Whether `subject` holds any of `roles`.
    pub fn has_any_role<I, S>(&self, subject: Option<&dyn RoleHolder>, roles: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.evaluator.has_any_role(subject, roles)
    }

    /// Roles allowed for `policy`, or `None` if the policy is not configured.
    pub fn roles_for_policy(&self, policy: &str) -> Option<Vec<String>> {
        self.evaluator.policies().roles_for_policy(policy)
    }

    /// The effective policy map with its catalog and unknown roles.
    pub fn effective_snapshot(&self) -> PolicySnapshot {
        self.evaluator.policies().effective_snapshot()
    }

    /// Drop the memoized policy map.
    pub fn clear_cache(&self) {
        self.evaluator.policies().clear_cache();
    }

    /// Record an audit event. Store failures are returned.
    pub fn log(&self, input: EventInput) -> AppResult<AuditEvent> {
        self.audit.log(input)
    }

    /// Record an audit event on behalf of `subject`.
    ///
    /// The subject's id fills the actor when the input carries none.
    pub fn log_as(&self, subject: &dyn RoleHolder, mut input: EventInput) -> AppResult<AuditEvent> {
        if input.actor_id.is_none() {
            input.actor_id = subject.actor_id();
        }
        self.audit.log(input)
    }
}

fn roles_label(mode: RbacMode) -> &'static str {
    if mode.is_enforcing() { "consulted" } else { "ignored" }
}
