//! Messages for evidence file actions.

use serde_json::Value;

use crate::model::AuditEvent;

use super::size::human_bytes;
use super::subject::{actor_label, first_meta};

const FILENAME_KEYS: &[&str] = &["filename", "file_name", "name"];

fn filename(event: &AuditEvent) -> String {
    first_meta(event, FILENAME_KEYS).unwrap_or_else(|| {
        let id = event.entity_id.trim();
        if id.is_empty() {
            "Evidence".to_string()
        } else {
            format!("Evidence {id}")
        }
    })
}

/// Non-negative integer metadata, accepting numeric strings.
fn meta_count(event: &AuditEvent, keys: &[&str]) -> Option<u64> {
    keys.iter().find_map(|k| match event.meta_value(k)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn size_suffix(event: &AuditEvent) -> String {
    meta_count(event, &["size_bytes", "size"])
        .map(|bytes| format!(" ({})", human_bytes(bytes)))
        .unwrap_or_default()
}

/// `evidence.uploaded`
pub fn uploaded(event: &AuditEvent) -> String {
    format!(
        "{} uploaded by {}{}",
        filename(event),
        actor_label(event),
        size_suffix(event)
    )
}

/// `evidence.downloaded`
pub fn downloaded(event: &AuditEvent) -> String {
    format!(
        "{} downloaded by {}{}",
        filename(event),
        actor_label(event),
        size_suffix(event)
    )
}

/// `evidence.deleted`
pub fn deleted(event: &AuditEvent) -> String {
    format!("{} deleted by {}", filename(event), actor_label(event))
}

/// `evidence.purged`
pub fn purged(event: &AuditEvent) -> String {
    let actor = actor_label(event);
    match meta_count(event, &["deleted_count", "count"]) {
        Some(1) => format!("1 evidence record purged by {actor}"),
        Some(n) => format!("{n} evidence records purged by {actor}"),
        None => format!("Evidence purged by {actor}"),
    }
}
