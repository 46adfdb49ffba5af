//! Human-readable one-line audit messages.
//!
//! The message for each canonical action follows a fixed template. Callers
//! string-match these messages, so the exact phrasing is part of the
//! contract. Formatting is pure: it never mutates the event and never fails;
//! actions without a template yield an empty string.

pub mod evidence;
pub mod rbac;
pub mod settings;
pub mod size;
pub mod subject;

use crate::model::AuditEvent;

/// Render the message for an event, or `""` if the action has no template.
pub fn format_message(event: &AuditEvent) -> String {
    match event.action.as_str() {
        "rbac.user_role.attached" => rbac::user_role_attached(event),
        "rbac.user_role.detached" => rbac::user_role_detached(event),
        "rbac.user_role.replaced" => rbac::user_role_replaced(event),
        "rbac.role.created" => rbac::role_created(event),
        "rbac.role.updated" => rbac::role_updated(event),
        "rbac.role.deleted" => rbac::role_deleted(event),
        "rbac.user.created" => rbac::user_created(event),
        "rbac.user.deleted" => rbac::user_deleted(event),
        "rbac.policy.override.unknown_role" => rbac::unknown_policy_roles(event),
        action if settings::is_settings_action(action) => settings::setting_changed(event),
        "evidence.uploaded" => evidence::uploaded(event),
        "evidence.downloaded" => evidence::downloaded(event),
        "evidence.deleted" => evidence::deleted(event),
        "evidence.purged" => evidence::purged(event),
        "auth.login" => format!("{} signed in", subject::actor_label(event)),
        "auth.logout" => format!("{} signed out", subject::actor_label(event)),
        _ => String::new(),
    }
}
