//! Global capability flags.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

/// The set of capability keys switched on by configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilityFlags {
    /// Keys whose flag is a literal `true`.
    enabled: BTreeSet<String>,
}

impl CapabilityFlags {
    /// Build from the raw configured flag table.
    ///
    /// Only a JSON boolean `true` enables a key. Strings such as `"true"`,
    /// numbers, and nulls are treated as disabled.
    pub fn from_config(raw: &BTreeMap<String, Value>) -> Self {
        let enabled = raw
            .iter()
            .filter(|(_, v)| matches!(v, Value::Bool(true)))
            .map(|(k, _)| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();
        Self { enabled }
    }

    /// Whether the flag for `key` is explicitly on.
    pub fn is_enabled(&self, key: &str) -> bool {
        self.enabled.contains(key)
    }

    /// Every enabled key, sorted.
    pub fn enabled(&self) -> impl Iterator<Item = &str> {
        self.enabled.iter().map(String::as_str)
    }
}
