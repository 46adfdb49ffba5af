//! Role catalog resolver.
//!
//! Supplies the canonical, correctly-cased list of role names. In enforced
//! mode the persisted role store is authoritative; otherwise, or when the
//! store is unreachable or empty, the static configured list is used. The
//! resolver never fails.

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::Value;
use tracing::warn;

use grc_core::traits::RoleStore;

use super::name::{canonical_key, display_form};
use crate::mode::RbacMode;

/// Resolves the current role catalog.
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    /// Sanitized static role list from configuration.
    configured: Vec<String>,
    /// Persisted role store, when the host has one.
    store: Option<Arc<dyn RoleStore>>,
    /// Whether the store should be consulted.
    mode: RbacMode,
}

impl RoleCatalog {
    /// Create a resolver from the raw configured role list.
    pub fn new(configured: &[Value], store: Option<Arc<dyn RoleStore>>, mode: RbacMode) -> Self {
        let names = configured
            .iter()
            .filter_map(Value::as_str)
            .filter_map(display_form);
        Self {
            configured: dedupe(names),
            store,
            mode,
        }
    }

    /// The configured static role list, sanitized.
    pub fn configured(&self) -> &[String] {
        &self.configured
    }

    /// The current role catalog, duplicates removed.
    ///
    /// Store results are sorted alphabetically, ignoring case; the
    /// configured list keeps its order.
    pub fn role_names(&self) -> Vec<String> {
        if self.mode.is_enforcing() {
            if let Some(names) = self.from_store() {
                return names;
            }
        }
        self.configured.clone()
    }

    fn from_store(&self) -> Option<Vec<String>> {
        let store = self.store.as_ref()?;
        if !store.is_available() {
            warn!("Role store unavailable; using configured role catalog");
            return None;
        }
        let mut names: Vec<String> = match store.list_role_names() {
            Ok(names) => names.iter().filter_map(|n| display_form(n)).collect(),
            Err(e) => {
                warn!(error = %e, "Role store query failed; using configured role catalog");
                return None;
            }
        };
        names.sort_by_cached_key(|n| canonical_key(n));
        let names = dedupe(names);
        if names.is_empty() {
            warn!("Role store returned no roles; using configured role catalog");
            return None;
        }
        Some(names)
    }
}

/// Remove names whose canonical key was already seen, keeping the first.
fn dedupe(names: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|n| seen.insert(canonical_key(n)))
        .collect()
}
