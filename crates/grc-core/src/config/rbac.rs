//! Role-based access control configuration.
//!
//! Values in the role, policy, and capability tables are kept loosely typed
//! (`serde_json::Value`) so that a malformed entry never fails the whole
//! configuration load. Consumers filter them at the point of use.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// RBAC settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Master switch. When `false` every check allows.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Enforcement mode: `"stub"` or `"persist"`.
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Whether role membership is persisted. `true` forces enforcement.
    #[serde(default)]
    pub persistence: bool,
    /// Static role catalog used when the role store is unavailable.
    #[serde(default = "default_roles")]
    pub roles: Vec<Value>,
    /// Policy key to role list overrides, merged over the built-in table.
    #[serde(default)]
    pub policies: BTreeMap<String, Value>,
    /// Role to granted capability list overrides.
    #[serde(default)]
    pub role_capabilities: BTreeMap<String, Value>,
    /// Global capability flags. Only a literal `true` enables a capability.
    #[serde(default = "default_capabilities")]
    pub capabilities: BTreeMap<String, Value>,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: default_mode(),
            persistence: false,
            roles: default_roles(),
            policies: BTreeMap::new(),
            role_capabilities: BTreeMap::new(),
            capabilities: default_capabilities(),
        }
    }
}

impl RbacConfig {
    /// The configured mode, trimmed and lowercased.
    pub fn normalized_mode(&self) -> String {
        self.mode.trim().to_lowercase()
    }

    /// Whether role membership is enforced against persisted data.
    pub fn is_persist(&self) -> bool {
        self.persistence || self.normalized_mode() == "persist"
    }
}

fn default_true() -> bool {
    true
}

fn default_mode() -> String {
    "stub".to_string()
}

fn default_roles() -> Vec<Value> {
    ["Admin", "Auditor", "Risk Manager", "User"]
        .into_iter()
        .map(|r| Value::String(r.to_string()))
        .collect()
}

fn default_capabilities() -> BTreeMap<String, Value> {
    [
        ("core.audit.export", true),
        ("core.evidence.upload", true),
        ("core.evidence.delete", true),
        ("core.exports.generate", true),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), Value::Bool(v)))
    .collect()
}
