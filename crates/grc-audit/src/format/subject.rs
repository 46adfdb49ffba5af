//! Actor and target label resolution from event metadata.

use serde_json::Value;

use crate::model::AuditEvent;

const ACTOR_KEYS: &[&str] = &["actor_username", "actor_name", "actor_email", "actor"];
const TARGET_KEYS: &[&str] = &["target_username", "target_name", "target_email", "target"];

/// Label used when no actor is recorded.
pub const SYSTEM_ACTOR: &str = "System";

/// First non-empty metadata string among `keys`.
pub fn first_meta(event: &AuditEvent, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| event.meta_str(k))
}

/// A metadata list as display strings. A lone string counts as a one-item list.
pub fn meta_list(event: &AuditEvent, keys: &[&str]) -> Vec<String> {
    let Some(value) = keys.iter().find_map(|k| event.meta_value(k)) else {
        return Vec::new();
    };
    let items: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };
    items
        .into_iter()
        .filter_map(|v| match v {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .collect()
}

/// Who performed the action.
pub fn actor_label(event: &AuditEvent) -> String {
    first_meta(event, ACTOR_KEYS).unwrap_or_else(|| SYSTEM_ACTOR.to_string())
}

/// What the action was performed on.
pub fn target_label(event: &AuditEvent) -> String {
    if let Some(target) = first_meta(event, TARGET_KEYS) {
        return target;
    }
    let entity_type = event.entity_type.trim();
    let entity_id = event.entity_id.trim();
    match (entity_type.is_empty(), entity_id.is_empty()) {
        (false, false) => format!("{entity_type} {entity_id}"),
        (false, true) => entity_type.to_string(),
        (true, false) => entity_id.to_string(),
        (true, true) => "target".to_string(),
    }
}
