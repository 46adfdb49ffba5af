//! Messages for role assignment, role catalog, and user lifecycle actions.

use crate::model::AuditEvent;

use super::subject::{actor_label, first_meta, meta_list, target_label};

const ROLE_KEYS: &[&str] = &["role", "role_name"];
const NEW_ROLE_KEYS: &[&str] = &["role_new", "new_name", "role", "role_name", "name"];
const PREVIOUS_ROLE_KEYS: &[&str] = &["role_old", "old_name", "previous_name", "from"];

fn role_label(event: &AuditEvent, keys: &[&str]) -> String {
    first_meta(event, keys).unwrap_or_else(|| "Unknown".to_string())
}

/// `rbac.user_role.attached`
pub fn user_role_attached(event: &AuditEvent) -> String {
    format!(
        "{} role applied to {} by {}",
        role_label(event, ROLE_KEYS),
        target_label(event),
        actor_label(event)
    )
}

/// `rbac.user_role.detached`
pub fn user_role_detached(event: &AuditEvent) -> String {
    format!(
        "{} role removed from {} by {}",
        role_label(event, ROLE_KEYS),
        target_label(event),
        actor_label(event)
    )
}

/// `rbac.user_role.replaced`
pub fn user_role_replaced(event: &AuditEvent) -> String {
    let added = meta_list(event, &["added", "roles_added"]);
    let removed = meta_list(event, &["removed", "roles_removed"]);
    let target = target_label(event);
    let actor = actor_label(event);

    let delta = match (added.is_empty(), removed.is_empty()) {
        (false, false) => format!(
            " (added {} and removed {})",
            added.join(", "),
            removed.join(", ")
        ),
        (false, true) => format!(" (added {})", added.join(", ")),
        (true, false) => format!(" (removed {})", removed.join(", ")),
        (true, true) => String::new(),
    };
    format!("Roles updated for {target}{delta} by {actor}")
}

/// `rbac.role.created`
pub fn role_created(event: &AuditEvent) -> String {
    format!(
        "{} created by {}",
        role_label(event, &["role", "role_name", "name"]),
        actor_label(event)
    )
}

/// `rbac.role.updated`
pub fn role_updated(event: &AuditEvent) -> String {
    let role = role_label(event, NEW_ROLE_KEYS);
    let actor = actor_label(event);
    match first_meta(event, PREVIOUS_ROLE_KEYS) {
        Some(previous) if previous != role => {
            format!("{role} renamed from {previous} by {actor}")
        }
        _ => format!("{role} updated by {actor}"),
    }
}

/// `rbac.role.deleted`
pub fn role_deleted(event: &AuditEvent) -> String {
    format!(
        "{} deleted by {}",
        role_label(event, &["role", "role_name", "name"]),
        actor_label(event)
    )
}

/// `rbac.user.created`
pub fn user_created(event: &AuditEvent) -> String {
    let roles = meta_list(event, &["roles"]);
    let base = format!("{} created by {}", target_label(event), actor_label(event));
    if roles.is_empty() {
        base
    } else {
        format!("{base} with roles: {}", roles.join(", "))
    }
}

/// `rbac.user.deleted`
pub fn user_deleted(event: &AuditEvent) -> String {
    format!("{} deleted by {}", target_label(event), actor_label(event))
}

/// `rbac.policy.override.unknown_role`
pub fn unknown_policy_roles(event: &AuditEvent) -> String {
    let roles = meta_list(event, &["unknown_roles"]);
    format!(
        "Unknown roles in policy {}: {}",
        event.entity_id.trim(),
        roles.join(", ")
    )
}
