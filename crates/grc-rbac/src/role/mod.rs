//! Role names and the role catalog.

pub mod catalog;
pub mod name;

pub use catalog::RoleCatalog;
pub use name::{canonical_key, display_form};
