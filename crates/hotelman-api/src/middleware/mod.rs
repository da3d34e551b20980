//! HTTP middleware.

pub mod guard;

pub use guard::{RoleGuard, require_role};
