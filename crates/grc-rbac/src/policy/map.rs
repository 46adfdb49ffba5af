//! The policy map: policy key to allowed, catalog-normalized role names.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use serde::Serialize;
use serde_json::{Value, json};
use tracing::{debug, warn};

use grc_audit::{AuditLogger, EventInput};
use grc_core::config::rbac::RbacConfig;

use super::cache::{EffectivePolicies, PolicyCache};
use super::defaults::merged_policies;
use super::fingerprint::fingerprint;
use crate::mode::RbacMode;
use crate::role::{RoleCatalog, canonical_key, display_form};

/// Audit action recorded when a policy names roles missing from the catalog.
pub const UNKNOWN_ROLE_ACTION: &str = "rbac.policy.override.unknown_role";

/// Owned, serializable view of the effective policy map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicySnapshot {
    /// Enforcement mode the map was built under.
    pub mode: RbacMode,
    /// Fingerprint of the inputs.
    pub fingerprint: String,
    /// Role catalog the tokens were normalized against.
    pub catalog: Vec<String>,
    /// Policy key to allowed display-cased role names.
    pub policies: BTreeMap<String, Vec<String>>,
    /// Policy key to configured tokens absent from the catalog.
    pub unknown_roles: BTreeMap<String, Vec<String>>,
}

/// Resolves policy keys to role names, caching the normalized map.
#[derive(Debug, Clone)]
pub struct PolicyMap {
    /// Raw policy overrides as configured.
    overrides: BTreeMap<String, Value>,
    /// Built-in table merged with sanitized overrides.
    policies: BTreeMap<String, Vec<String>>,
    /// Enforcement mode.
    mode: RbacMode,
    /// Configured persistence flag.
    persistence: bool,
    /// Role catalog used for normalization.
    catalog: RoleCatalog,
    /// Snapshot cache, shareable between maps built from the same config.
    cache: Arc<PolicyCache>,
    /// Sink for unknown-role audits.
    audit: Option<AuditLogger>,
}

impl PolicyMap {
    /// Create a policy map from configuration with a private cache.
    pub fn new(config: &RbacConfig, catalog: RoleCatalog, audit: Option<AuditLogger>) -> Self {
        Self {
            overrides: config.policies.clone(),
            policies: merged_policies(&config.policies),
            mode: RbacMode::from_config(config),
            persistence: config.persistence,
            catalog,
            cache: Arc::new(PolicyCache::new()),
            audit,
        }
    }

    /// Use an externally owned cache.
    pub fn with_cache(mut self, cache: Arc<PolicyCache>) -> Self {
        self.cache = cache;
        self
    }

    /// The built-in table merged with sanitized overrides, before
    /// normalization against the catalog.
    pub fn defaults(&self) -> &BTreeMap<String, Vec<String>> {
        &self.policies
    }

    /// Every configured policy key.
    pub fn known_policies(&self) -> Vec<String> {
        self.policies.keys().cloned().collect()
    }

    /// The cache backing this map.
    pub fn cache(&self) -> &Arc<PolicyCache> {
        &self.cache
    }

    /// The effective, normalized policy map for the current inputs.
    ///
    /// Rebuilt whenever the fingerprint of overrides, mode, persistence, or
    /// role catalog changes.
    pub fn effective(&self) -> Arc<EffectivePolicies> {
        let catalog = self.catalog.role_names();
        let fp = fingerprint(&self.overrides, self.mode, self.persistence, &catalog);
        if let Some(snapshot) = self.cache.get(&fp) {
            return snapshot;
        }

        let snapshot = Arc::new(self.build(fp, catalog));
        self.cache.publish(Arc::clone(&snapshot));
        debug!(
            fingerprint = %snapshot.fingerprint,
            policies = snapshot.roles.len(),
            "Effective policy map rebuilt"
        );
        self.audit_unknown_roles(&snapshot);
        snapshot
    }

    /// The effective map together with the catalog and unknown roles.
    pub fn effective_snapshot(&self) -> PolicySnapshot {
        let effective = self.effective();
        PolicySnapshot {
            mode: self.mode,
            fingerprint: effective.fingerprint.clone(),
            catalog: effective.catalog.clone(),
            policies: effective.roles.clone(),
            unknown_roles: effective.unknown.clone(),
        }
    }

    /// Enforcement mode the map was configured with.
    pub fn mode(&self) -> RbacMode {
        self.mode
    }

    /// Roles allowed for `key`, or `None` if the policy is not configured.
    ///
    /// `Some(vec![])` means the policy exists but grants to nobody.
    pub fn roles_for_policy(&self, key: &str) -> Option<Vec<String>> {
        self.effective().roles.get(key).cloned()
    }

    /// Drop the cached snapshot.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    fn build(&self, fingerprint: String, catalog: Vec<String>) -> EffectivePolicies {
        let lookup: HashMap<String, String> = catalog
            .iter()
            .map(|name| (canonical_key(name), name.clone()))
            .collect();

        let mut roles = BTreeMap::new();
        let mut unknown = BTreeMap::new();
        for (policy, tokens) in &self.policies {
            let mut allowed: Vec<String> = Vec::new();
            let mut missing: Vec<String> = Vec::new();
            let mut seen = HashSet::new();
            for token in tokens {
                let Some(cleaned) = display_form(token) else {
                    continue;
                };
                let key = cleaned.to_lowercase();
                if !seen.insert(key.clone()) {
                    continue;
                }
                match lookup.get(&key) {
                    Some(display) => allowed.push(display.clone()),
                    None => missing.push(cleaned),
                }
            }
            if !missing.is_empty() {
                unknown.insert(policy.clone(), missing);
            }
            roles.insert(policy.clone(), allowed);
        }
        EffectivePolicies::new(fingerprint, catalog, roles, unknown)
    }

    /// Emit one audit event per policy with unknown roles per generation.
    /// Never fails.
    fn audit_unknown_roles(&self, snapshot: &EffectivePolicies) {
        if !self.mode.is_enforcing() {
            return;
        }
        for (policy, missing) in &snapshot.unknown {
            if !snapshot.mark_audited(policy) {
                continue;
            }
            warn!(policy = %policy, unknown_roles = ?missing, "Policy references unknown roles");
            if let Some(audit) = &self.audit {
                audit.log_quietly(
                    EventInput::new(UNKNOWN_ROLE_ACTION, "RBAC", "rbac.policy", policy.as_str())
                        .with_meta(json!({ "unknown_roles": missing })),
                );
            }
        }
    }
}
