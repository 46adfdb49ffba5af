//! Built-in policy table and override sanitization.

use std::collections::BTreeMap;

use serde_json::Value;

/// Policy key to allowed role names, before configuration overrides.
const DEFAULT_POLICIES: &[(&str, &[&str])] = &[
    ("core.settings.manage", &["Admin"]),
    ("core.audit.view", &["Admin", "Auditor"]),
    ("core.audit.export", &["Admin", "Auditor"]),
    ("core.evidence.view", &["Admin", "Auditor", "Risk Manager"]),
    ("core.evidence.manage", &["Admin", "Risk Manager"]),
    ("core.users.view", &["Admin"]),
    ("core.users.manage", &["Admin"]),
    ("core.rbac.view", &["Admin"]),
    ("core.metrics.view", &["Admin", "Auditor"]),
    ("core.reports.view", &["Admin", "Auditor", "Risk Manager"]),
    ("core.exports.generate", &["Admin"]),
    ("ui.theme.manage", &["Admin"]),
    ("ui.theme.pack.manage", &["Admin"]),
    ("ui.nav.sidebar.manage", &["Admin"]),
];

/// The built-in policy table.
pub fn default_policies() -> BTreeMap<String, Vec<String>> {
    DEFAULT_POLICIES
        .iter()
        .map(|(key, roles)| {
            (
                (*key).to_string(),
                roles.iter().map(|r| (*r).to_string()).collect(),
            )
        })
        .collect()
}

/// Keep only list-valued overrides, and within them only non-empty strings.
///
/// A list that is empty after filtering stays as an empty entry: the policy
/// is known but grants to nobody.
pub fn sanitize_overrides(raw: &BTreeMap<String, Value>) -> BTreeMap<String, Vec<String>> {
    raw.iter()
        .filter(|(key, _)| !key.trim().is_empty())
        .filter_map(|(key, value)| {
            let items = value.as_array()?;
            let roles = items
                .iter()
                .filter_map(Value::as_str)
                .filter(|r| !r.trim().is_empty())
                .map(str::to_string)
                .collect();
            Some((key.clone(), roles))
        })
        .collect()
}

/// Built-in table with sanitized overrides applied key by key.
pub fn merged_policies(raw: &BTreeMap<String, Value>) -> BTreeMap<String, Vec<String>> {
    let mut policies = default_policies();
    policies.extend(sanitize_overrides(raw));
    policies
}
