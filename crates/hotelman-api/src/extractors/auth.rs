//! `CurrentStaff` extractor — claims attached by the role guard.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use hotelman_auth::token::SessionClaims;
use hotelman_core::error::AppError;

use crate::error::ApiError;

/// Decoded session claims for the authenticated request.
///
/// Only present downstream of the role guard; a handler reachable
/// without the guard has no claims to extract.
#[derive(Debug, Clone)]
pub struct CurrentStaff(pub SessionClaims);

impl std::ops::Deref for CurrentStaff {
    type Target = SessionClaims;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for CurrentStaff
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionClaims>()
            .cloned()
            .map(CurrentStaff)
            .ok_or_else(|| AppError::unauthorized("Missing session context").into())
    }
}
