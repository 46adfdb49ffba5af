//! # grc-rbac
//!
//! Policy and role resolution for the GRC policy engine.
//!
//! ## Modules
//!
//! - `role`: role-name normalization and the role catalog resolver
//! - `policy`: the built-in policy table and the fingerprint-cached policy map
//! - `capability`: capability flags and role capability grants
//! - `mode`: enforcement mode derived from configuration
//! - `evaluator`: the allow/deny decision functions
//! - `principal`: a plain subject type for hosts without their own

pub mod capability;
pub mod evaluator;
pub mod mode;
pub mod policy;
pub mod principal;
pub mod role;

pub use capability::{CapabilityFlags, CapabilityGrants};
pub use evaluator::{DecisionReason, RbacDecision, RbacEvaluator};
pub use mode::RbacMode;
pub use policy::{EffectivePolicies, PolicyCache, PolicyMap, PolicySnapshot, UNKNOWN_ROLE_ACTION};
pub use principal::Principal;
pub use role::RoleCatalog;
