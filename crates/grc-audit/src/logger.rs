//! Audit event construction and persistence.

use std::sync::Arc;

use chrono::Utc;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use grc_core::error::AppError;
use grc_core::result::AppResult;
use grc_core::types::AuditEventId;

use crate::alias::canonical_action;
use crate::format::format_message;
use crate::model::{AuditEvent, EventInput};
use crate::sanitize::scrub;
use crate::store::AuditStore;

/// Builds normalized audit events and hands them to an [`AuditStore`].
#[derive(Debug, Clone)]
pub struct AuditLogger {
    /// Destination for finished events.
    store: Arc<dyn AuditStore>,
}

impl AuditLogger {
    /// Create a logger writing to `store`.
    pub fn new(store: Arc<dyn AuditStore>) -> Self {
        Self { store }
    }

    /// Build the final event without persisting it.
    ///
    /// Resolves the occurrence time, canonicalizes the action, strips null
    /// metadata, scrubs binary payloads, and injects the rendered message.
    pub fn build(&self, input: EventInput) -> AppResult<AuditEvent> {
        let action = required(&input.action, "action")?;
        let category = required(&input.category, "category")?;
        let entity_type = required(&input.entity_type, "entity_type")?;
        let entity_id = required(&input.entity_id, "entity_id")?;

        let now = Utc::now();
        let occurred_at = input
            .occurred_at
            .as_ref()
            .and_then(|at| at.resolve())
            .unwrap_or(now);

        let meta: Map<String, Value> = input
            .meta
            .unwrap_or_default()
            .into_iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| (k, scrub(v)))
            .collect();

        let mut event = AuditEvent {
            id: AuditEventId::new(),
            occurred_at,
            actor_id: input.actor_id,
            action: canonical_action(action).into_owned(),
            category: category.to_string(),
            entity_type: entity_type.to_string(),
            entity_id: entity_id.to_string(),
            ip: non_empty(input.ip),
            ua: non_empty(input.ua),
            meta: (!meta.is_empty()).then_some(meta),
            created_at: now,
        };

        let message = format_message(&event);
        if !message.is_empty() {
            event
                .meta
                .get_or_insert_with(Map::new)
                .insert("message".to_string(), Value::String(message));
        }
        Ok(event)
    }

    /// Build and persist an event. Store failures are returned to the caller.
    pub fn log(&self, input: EventInput) -> AppResult<AuditEvent> {
        let event = self.build(input)?;
        self.store.append(&event)?;
        debug!(
            id = %event.id,
            action = %event.action,
            entity_type = %event.entity_type,
            entity_id = %event.entity_id,
            "Audit event recorded"
        );
        Ok(event)
    }

    /// Log an event, swallowing any failure.
    ///
    /// For side-effect audits that must never break the request that
    /// triggered them.
    pub fn log_quietly(&self, input: EventInput) -> Option<AuditEvent> {
        let action = input.action.clone();
        match self.log(input) {
            Ok(event) => Some(event),
            Err(e) => {
                warn!(action = %action, error = %e, "Failed to record audit event");
                None
            }
        }
    }
}

fn required<'a>(value: &'a str, field: &str) -> AppResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!(
            "Audit event field '{field}' must be a non-empty string"
        )));
    }
    Ok(trimmed)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
