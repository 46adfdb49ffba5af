//! Role to capability grants.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde_json::Value;

use crate::role::{canonical_key, display_form};

/// Capability granting every key.
pub const WILDCARD: &str = "*";

/// Built-in grants, before configuration overrides.
const DEFAULT_GRANTS: &[(&str, &[&str])] = &[("Admin", &[WILDCARD]), ("Auditor", &[]), ("User", &[])];

/// Capabilities granted to each role.
///
/// Role names are matched by canonical key, so `"ADMIN"` and `" admin "`
/// both resolve to the built-in `Admin` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityGrants {
    /// Canonical role key to granted capability keys.
    grants: HashMap<String, BTreeSet<String>>,
}

impl CapabilityGrants {
    /// The built-in table.
    pub fn new() -> Self {
        let grants = DEFAULT_GRANTS
            .iter()
            .map(|(role, caps)| {
                (
                    canonical_key(role),
                    caps.iter().map(|c| (*c).to_string()).collect(),
                )
            })
            .collect();
        Self { grants }
    }

    /// The built-in table with configured overrides applied per role.
    ///
    /// An override replaces the role's whole set. Non-list values and
    /// non-string entries are ignored.
    pub fn from_config(raw: &BTreeMap<String, Value>) -> Self {
        let mut grants = Self::new();
        for (role, value) in raw {
            let (Some(role), Some(items)) = (display_form(role), value.as_array()) else {
                continue;
            };
            let caps = items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect();
            grants.grants.insert(role.to_lowercase(), caps);
        }
        grants
    }

    /// Capabilities granted to `role`, if the role has an entry.
    pub fn for_role(&self, role: &str) -> Option<&BTreeSet<String>> {
        self.grants.get(&canonical_key(role))
    }

    /// Whether `role` is granted `capability` directly or by wildcard.
    pub fn grants(&self, role: &str, capability: &str) -> bool {
        self.for_role(role)
            .is_some_and(|caps| caps.contains(WILDCARD) || caps.contains(capability))
    }
}

impl Default for CapabilityGrants {
    fn default() -> Self {
        Self::new()
    }
}
