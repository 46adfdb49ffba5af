//! Messages for settings and UI customization changes.

use serde_json::Value;

use crate::model::AuditEvent;
use crate::sanitize::stringify;

use super::subject::{actor_label, first_meta};

/// Actions rendered with the `"{actor} {verb} {label}; Old: .. - New: .."` template.
const SETTINGS_ACTIONS: &[&str] = &[
    "setting.modified",
    "ui.brand.updated",
    "ui.theme.updated",
    "ui.theme.overrides.updated",
    "ui.nav.sidebar.saved",
    "ui.theme.pack.updated",
    "ui.theme.pack.deleted",
];

const LABEL_KEYS: &[&str] = &["setting_label", "setting_key", "key", "label"];

/// Whether `action` uses the settings template.
pub fn is_settings_action(action: &str) -> bool {
    SETTINGS_ACTIONS.contains(&action)
}

/// Past-tense verb for the change.
///
/// Actions ending in `.deleted` or `.saved` fix the verb; otherwise it
/// derives from `change_type`.
fn verb(event: &AuditEvent) -> &'static str {
    if event.action.ends_with(".deleted") {
        return "deleted";
    }
    if event.action.ends_with(".saved") {
        return "saved";
    }
    let change_type = event
        .meta_str("change_type")
        .map(|c| c.to_lowercase())
        .unwrap_or_default();
    match change_type.as_str() {
        "set" | "create" | "created" => "set",
        "delete" | "deleted" | "unset" | "clear" | "cleared" | "remove" | "removed" | "reset" => {
            "cleared"
        }
        _ => "updated",
    }
}

fn rendered(event: &AuditEvent, key: &str) -> String {
    stringify(event.meta_value(key).unwrap_or(&Value::Null))
}

/// `setting.modified` and the `ui.*` customization actions.
pub fn setting_changed(event: &AuditEvent) -> String {
    let label = first_meta(event, LABEL_KEYS).unwrap_or_else(|| {
        let id = event.entity_id.trim();
        if id.is_empty() {
            "setting".to_string()
        } else {
            id.to_string()
        }
    });
    format!(
        "{} {} {}; Old: {} - New: {}",
        actor_label(event),
        verb(event),
        label,
        rendered(event, "old_value"),
        rendered(event, "new_value"),
    )
}
