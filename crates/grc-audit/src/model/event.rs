//! Audit event entity model.

use chrono::{DateTime, Utc};
use grc_core::types::AuditEventId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An immutable audit record. Built by the audit logger and persisted once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Time-sortable unique identifier.
    pub id: AuditEventId,
    /// When the audited action happened (UTC, may be backdated by the caller).
    pub occurred_at: DateTime<Utc>,
    /// The acting user, if known.
    pub actor_id: Option<i64>,
    /// Canonical action name (e.g., `"rbac.user_role.attached"`).
    pub action: String,
    /// Free-form grouping (e.g., `"RBAC"`, `"AUDIT"`, `"EVIDENCE"`).
    pub category: String,
    /// Kind of entity acted upon (e.g., `"user"`, `"rbac.policy"`).
    pub entity_type: String,
    /// Identifier of the entity acted upon.
    pub entity_id: String,
    /// Client IP address.
    pub ip: Option<String>,
    /// Client User-Agent.
    pub ua: Option<String>,
    /// Sanitized metadata, with a derived `message` when one could be rendered.
    pub meta: Option<Map<String, Value>>,
    /// When this record was constructed (UTC).
    pub created_at: DateTime<Utc>,
}

impl AuditEvent {
    /// Look up a metadata value.
    pub fn meta_value(&self, key: &str) -> Option<&Value> {
        self.meta.as_ref().and_then(|m| m.get(key))
    }

    /// Look up a metadata value as a trimmed, non-empty string.
    ///
    /// Numbers are rendered as decimal text so that ids stored as integers
    /// still resolve.
    pub fn meta_str(&self, key: &str) -> Option<String> {
        match self.meta_value(key)? {
            Value::String(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// The rendered message, if the formatter produced one.
    pub fn message(&self) -> Option<&str> {
        self.meta_value("message").and_then(Value::as_str)
    }
}
