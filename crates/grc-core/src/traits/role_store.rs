//! Persisted role catalog trait.

use crate::result::AppResult;

/// A persisted source of role names (typically the `roles` table).
///
/// No ordering or uniqueness is required of implementations; callers
/// sanitize the result.
pub trait RoleStore: Send + Sync + std::fmt::Debug {
    /// Whether the store can be queried at all (table exists, connection up).
    fn is_available(&self) -> bool;

    /// List every role name in the store.
    fn list_role_names(&self) -> AppResult<Vec<String>>;
}
