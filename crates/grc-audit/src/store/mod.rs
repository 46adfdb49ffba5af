//! Audit event sinks.

pub mod memory;

use grc_core::result::AppResult;

use crate::model::AuditEvent;

pub use memory::MemoryAuditStore;

/// Append-only destination for audit events.
///
/// `append` must be a single atomic write: either the whole event becomes
/// visible to readers or none of it does.
pub trait AuditStore: Send + Sync + std::fmt::Debug {
    /// Persist one event.
    fn append(&self, event: &AuditEvent) -> AppResult<()>;
}
