//! RBAC evaluation: policy checks, capability checks, and raw role checks.
//!
//! None of the checks fail. Every path resolves to an allow or a deny, and
//! the caller decides how a deny is surfaced.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use grc_audit::AuditLogger;
use grc_core::config::rbac::RbacConfig;
use grc_core::traits::{RoleHolder, RoleStore};

use crate::capability::{CapabilityFlags, CapabilityGrants};
use crate::mode::RbacMode;
use crate::policy::{PolicyCache, PolicyMap};
use crate::role::RoleCatalog;

/// Why a check resolved the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionReason {
    /// RBAC is switched off.
    RbacDisabled,
    /// Stub mode allows everything.
    StubMode,
    /// No subject was supplied.
    NoSubject,
    /// The policy key is not configured.
    UnknownPolicy,
    /// The policy is configured with no resolvable roles.
    EmptyPolicy,
    /// The subject holds an allowed role.
    RoleMatched,
    /// The subject holds none of the allowed roles.
    NoMatchingRole,
    /// The global capability flag is absent or not `true`.
    FlagDisabled,
    /// A subject role grants the capability.
    CapabilityGranted,
    /// No subject role grants the capability.
    CapabilityNotGranted,
}

impl DecisionReason {
    /// Stable snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RbacDisabled => "rbac_disabled",
            Self::StubMode => "stub_mode",
            Self::NoSubject => "no_subject",
            Self::UnknownPolicy => "unknown_policy",
            Self::EmptyPolicy => "empty_policy",
            Self::RoleMatched => "role_matched",
            Self::NoMatchingRole => "no_matching_role",
            Self::FlagDisabled => "flag_disabled",
            Self::CapabilityGranted => "capability_granted",
            Self::CapabilityNotGranted => "capability_not_granted",
        }
    }
}

impl fmt::Display for DecisionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of a check with its reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RbacDecision {
    /// Whether the check passed.
    pub allowed: bool,
    /// Why.
    pub reason: DecisionReason,
}

impl RbacDecision {
    fn allow(reason: DecisionReason) -> Self {
        Self {
            allowed: true,
            reason,
        }
    }

    fn deny(reason: DecisionReason) -> Self {
        Self {
            allowed: false,
            reason,
        }
    }
}

/// Evaluates policy, capability, and role checks for a subject.
#[derive(Debug, Clone)]
pub struct RbacEvaluator {
    /// Enforcement mode.
    mode: RbacMode,
    /// Policy key to role resolution.
    policies: PolicyMap,
    /// Global capability flags.
    flags: CapabilityFlags,
    /// Role to capability grants.
    grants: CapabilityGrants,
}

impl RbacEvaluator {
    /// Build an evaluator from configuration and the host's collaborators.
    ///
    /// `roles` is consulted only in persist mode. `audit` receives the
    /// unknown-role self-audit events.
    pub fn from_config(
        config: &RbacConfig,
        roles: Option<Arc<dyn RoleStore>>,
        audit: Option<AuditLogger>,
    ) -> Self {
        let mode = RbacMode::from_config(config);
        let catalog = RoleCatalog::new(&config.roles, roles, mode);
        Self {
            mode,
            policies: PolicyMap::new(config, catalog, audit),
            flags: CapabilityFlags::from_config(&config.capabilities),
            grants: CapabilityGrants::from_config(&config.role_capabilities),
        }
    }

    /// Share a policy cache with other evaluators built from the same config.
    pub fn with_cache(mut self, cache: Arc<PolicyCache>) -> Self {
        self.policies = self.policies.with_cache(cache);
        self
    }

    /// The enforcement mode.
    pub fn mode(&self) -> RbacMode {
        self.mode
    }

    /// The underlying policy map.
    pub fn policies(&self) -> &PolicyMap {
        &self.policies
    }

    /// The configured capability flags.
    pub fn flags(&self) -> &CapabilityFlags {
        &self.flags
    }

    /// The configured capability grants.
    pub fn grants(&self) -> &CapabilityGrants {
        &self.grants
    }

    /// Whether `subject` may act under `policy`.
    pub fn allows(&self, subject: Option<&dyn RoleHolder>, policy: &str) -> bool {
        self.decide(subject, policy).allowed
    }

    /// Evaluate a policy check and report why.
    pub fn decide(&self, subject: Option<&dyn RoleHolder>, policy: &str) -> RbacDecision {
        let decision = match self.mode {
            RbacMode::Disabled => RbacDecision::allow(DecisionReason::RbacDisabled),
            RbacMode::StubPermissive => RbacDecision::allow(DecisionReason::StubMode),
            RbacMode::PersistEnforced => self.enforce(subject, policy),
        };
        if !decision.allowed {
            debug!(
                policy = %policy,
                mode = %self.mode,
                reason = %decision.reason,
                "RBAC policy check denied"
            );
        }
        decision
    }

    fn enforce(&self, subject: Option<&dyn RoleHolder>, policy: &str) -> RbacDecision {
        let Some(subject) = subject else {
            return RbacDecision::deny(DecisionReason::NoSubject);
        };
        let Some(allowed) = self.policies.roles_for_policy(policy) else {
            return RbacDecision::deny(DecisionReason::UnknownPolicy);
        };
        if allowed.is_empty() {
            return RbacDecision::deny(DecisionReason::EmptyPolicy);
        }
        let held = subject.roles();
        if allowed.iter().any(|role| held.contains(role)) {
            RbacDecision::allow(DecisionReason::RoleMatched)
        } else {
            RbacDecision::deny(DecisionReason::NoMatchingRole)
        }
    }

    /// Whether `subject` holds capability `key`.
    ///
    /// Requires the global flag to be exactly `true` and a subject role
    /// granting the key or the wildcard. The mode does not relax this check.
    pub fn has_capability(&self, subject: Option<&dyn RoleHolder>, key: &str) -> bool {
        self.decide_capability(subject, key).allowed
    }

    /// Evaluate a capability check and report why.
    pub fn decide_capability(&self, subject: Option<&dyn RoleHolder>, key: &str) -> RbacDecision {
        let decision = match subject {
            None => RbacDecision::deny(DecisionReason::NoSubject),
            Some(_) if !self.flags.is_enabled(key) => {
                RbacDecision::deny(DecisionReason::FlagDisabled)
            }
            Some(subject) => {
                if subject.roles().iter().any(|role| self.grants.grants(role, key)) {
                    RbacDecision::allow(DecisionReason::CapabilityGranted)
                } else {
                    RbacDecision::deny(DecisionReason::CapabilityNotGranted)
                }
            }
        };
        if !decision.allowed {
            debug!(
                capability = %key,
                mode = %self.mode,
                reason = %decision.reason,
                "RBAC capability check denied"
            );
        }
        decision
    }

    /// Whether `subject` holds any of `roles`. Always true outside persist mode.
    pub fn has_any_role<I, S>(&self, subject: Option<&dyn RoleHolder>, roles: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if !self.mode.is_enforcing() {
            return true;
        }
        let Some(subject) = subject else {
            return false;
        };
        let held = subject.roles();
        roles.into_iter().any(|role| held.contains(role.as_ref()))
    }
}
