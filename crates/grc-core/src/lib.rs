//! # grc-core
//!
//! Core crate for the GRC policy engine. Contains the collaborator traits,
//! configuration schemas, typed identifiers, and the unified error system.
//!
//! This crate has **no** internal dependencies on other GRC crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
