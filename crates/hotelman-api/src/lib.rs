//! # hotelman-api
//!
//! HTTP API layer for Hotelman built on Axum.
//!
//! Provides the auth endpoints, the role-guard middleware, extractors,
//! DTOs, router, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
