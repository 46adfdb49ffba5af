//! Capability gating: global feature flags plus role-granted capability sets.

pub mod flags;
pub mod grants;

pub use flags::CapabilityFlags;
pub use grants::{CapabilityGrants, WILDCARD};
