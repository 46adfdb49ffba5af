//! Audit event records.

pub mod event;
pub mod input;

pub use event::AuditEvent;
pub use input::{EventInput, OccurredAt};
