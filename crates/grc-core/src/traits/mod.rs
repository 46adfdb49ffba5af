//! Collaborator traits defined in `grc-core` and implemented by the host
//! application or by other crates.

pub mod role_holder;
pub mod role_store;

pub use role_holder::RoleHolder;
pub use role_store::RoleStore;
