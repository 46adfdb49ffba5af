//! In-process audit store, used by the CLI and tests.

use std::sync::{Mutex, PoisonError};

use grc_core::result::AppResult;

use super::AuditStore;
use crate::model::AuditEvent;

/// Audit store that keeps events in memory, in append order.
#[derive(Debug, Default)]
pub struct MemoryAuditStore {
    /// Persisted events.
    events: Mutex<Vec<AuditEvent>>,
}

impl MemoryAuditStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of every stored event.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Events with the given canonical action.
    pub fn events_with_action(&self, action: &str) -> Vec<AuditEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.action == action)
            .collect()
    }

    /// Number of stored events.
    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no events have been stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuditStore for MemoryAuditStore {
    fn append(&self, event: &AuditEvent) -> AppResult<()> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
        Ok(())
    }
}
