//! # hotelman-core
//!
//! Core crate for the Hotelman front-desk backend. Contains the unified
//! error system, configuration schemas, shared domain types, and the
//! traits that connect the auth core to its external collaborators.
//!
//! This crate has **no** internal dependencies on other Hotelman crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
