//! Enforcement mode.

use std::fmt;

use serde::{Deserialize, Serialize};

use grc_core::config::rbac::RbacConfig;

/// How RBAC checks are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RbacMode {
    /// RBAC is switched off; every check allows.
    Disabled,
    /// Early rollout before role persistence is wired; every check allows.
    StubPermissive,
    /// Checks are evaluated against real role membership.
    PersistEnforced,
}

impl RbacMode {
    /// Derive the mode from the `enabled`, `mode`, and `persistence` settings.
    pub fn from_config(config: &RbacConfig) -> Self {
        if !config.enabled {
            Self::Disabled
        } else if config.is_persist() {
            Self::PersistEnforced
        } else {
            Self::StubPermissive
        }
    }

    /// Whether checks consult role membership.
    pub fn is_enforcing(&self) -> bool {
        matches!(self, Self::PersistEnforced)
    }

    /// Stable lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::StubPermissive => "stub",
            Self::PersistEnforced => "persist",
        }
    }
}

impl fmt::Display for RbacMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
