//! # grc-policy-engine
//!
//! RBAC policy evaluation and audit-trail engine.
//!
//! [`Engine`] wires an [`AppConfig`] and the host's stores into one
//! evaluator and one audit logger that share them.
//!
//! ```no_run
//! use grc_policy_engine::{AppConfig, Engine, Principal};
//!
//! let engine = Engine::from_config(AppConfig::load("config/default.toml")?);
//! let auditor = Principal::new(["Auditor"]);
//! if engine.allows(Some(&auditor), "core.audit.view") {
//!     // serve the audit log
//! }
//! # Ok::<(), grc_policy_engine::AppError>(())
//! ```

pub mod engine;
pub mod logging;

pub use engine::Engine;
pub use logging::init_logging;

pub use grc_audit::{AuditEvent, AuditLogger, AuditStore, EventInput, MemoryAuditStore};
pub use grc_core::config::AppConfig;
pub use grc_core::traits::{RoleHolder, RoleStore};
pub use grc_core::{AppError, AppResult};
pub use grc_rbac::{DecisionReason, Principal, RbacDecision, RbacEvaluator, RbacMode};
