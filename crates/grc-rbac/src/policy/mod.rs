//! Policy key to role resolution.

pub mod cache;
pub mod defaults;
pub mod fingerprint;
pub mod map;

pub use cache::{EffectivePolicies, PolicyCache};
pub use defaults::{default_policies, merged_policies, sanitize_overrides};
pub use map::{PolicyMap, PolicySnapshot, UNKNOWN_ROLE_ACTION};
