//! Subject abstraction consumed by the RBAC evaluator.

use std::collections::BTreeSet;

/// A principal that holds a set of role names.
///
/// The engine only reads roles; it never mutates or persists the subject.
pub trait RoleHolder {
    /// The display-cased role names held by this subject.
    fn roles(&self) -> BTreeSet<String>;

    /// Numeric identifier recorded as the audit actor, if any.
    fn actor_id(&self) -> Option<i64> {
        None
    }
}
