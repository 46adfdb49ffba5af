//! # grc-audit
//!
//! Audit trail pipeline for the GRC policy engine.
//!
//! ## Modules
//!
//! - `model`: the immutable [`AuditEvent`] record and its loosely-typed [`EventInput`]
//! - `alias`: historical action names mapped to canonical actions
//! - `sanitize`: recursive scrubbing of binary, base64, and PEM payloads
//! - `format`: human-readable one-line messages per canonical action
//! - `logger`: builds, formats, and persists events
//! - `store`: the [`AuditStore`] sink trait and an in-memory implementation

pub mod alias;
pub mod format;
pub mod logger;
pub mod model;
pub mod sanitize;
pub mod store;

pub use alias::canonical_action;
pub use format::format_message;
pub use logger::AuditLogger;
pub use model::{AuditEvent, EventInput, OccurredAt};
pub use sanitize::{BINARY_PLACEHOLDER, UNSERIALIZABLE_PLACEHOLDER, scrub, stringify};
pub use store::{AuditStore, MemoryAuditStore};
