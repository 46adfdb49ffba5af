//! Loosely-typed input accepted by the audit logger.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Naive datetime layouts accepted in addition to RFC 3339. Interpreted as UTC.
const NAIVE_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Caller-supplied occurrence time: a typed instant or an ISO-8601 string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OccurredAt {
    /// A resolved instant.
    Timestamp(DateTime<Utc>),
    /// Free text to be parsed; unparsable text falls back to "now".
    Text(String),
}

impl OccurredAt {
    /// Resolve to a UTC instant, or `None` if the text cannot be parsed.
    pub fn resolve(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Timestamp(ts) => Some(*ts),
            Self::Text(raw) => parse_timestamp(raw),
        }
    }
}

impl From<DateTime<Utc>> for OccurredAt {
    fn from(ts: DateTime<Utc>) -> Self {
        Self::Timestamp(ts)
    }
}

impl From<&str> for OccurredAt {
    fn from(raw: &str) -> Self {
        Self::Text(raw.to_string())
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    for layout in NAIVE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, layout) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// The fields a caller supplies when recording an auditable action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventInput {
    /// Action name; may be a historical alias.
    pub action: String,
    /// Event category.
    pub category: String,
    /// Entity type acted upon.
    pub entity_type: String,
    /// Entity identifier acted upon.
    pub entity_id: String,
    /// The acting user, if known.
    #[serde(default)]
    pub actor_id: Option<i64>,
    /// Client IP address.
    #[serde(default)]
    pub ip: Option<String>,
    /// Client User-Agent.
    #[serde(default)]
    pub ua: Option<String>,
    /// Arbitrary metadata.
    #[serde(default)]
    pub meta: Option<Map<String, Value>>,
    /// When the action happened; defaults to now.
    #[serde(default)]
    pub occurred_at: Option<OccurredAt>,
}

impl EventInput {
    /// Create an input with the four required fields.
    pub fn new(
        action: impl Into<String>,
        category: impl Into<String>,
        entity_type: impl Into<String>,
        entity_id: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            category: category.into(),
            entity_type: entity_type.into(),
            entity_id: entity_id.into(),
            ..Self::default()
        }
    }

    /// Set the acting user.
    pub fn with_actor(mut self, actor_id: i64) -> Self {
        self.actor_id = Some(actor_id);
        self
    }

    /// Set the client IP and User-Agent.
    pub fn with_client(mut self, ip: Option<String>, ua: Option<String>) -> Self {
        self.ip = ip;
        self.ua = ua;
        self
    }

    /// Set metadata from a JSON value. Non-object values are ignored.
    pub fn with_meta(mut self, meta: Value) -> Self {
        if let Value::Object(map) = meta {
            self.meta = Some(map);
        }
        self
    }

    /// Set the occurrence time.
    pub fn occurred_at(mut self, at: impl Into<OccurredAt>) -> Self {
        self.occurred_at = Some(at.into());
        self
    }
}
