//! Role-guard middleware for protected routes.
//!
//! Each protected route group gets a [`RoleGuard`] built at router
//! construction time and applied with
//! `axum::middleware::from_fn_with_state`. Per request the guard runs
//! EXTRACT → DECODE → CHECK_EXPIRY → CHECK_ROLE → FORWARD, any stage
//! short-circuiting to a terminal rejection.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;

use hotelman_auth::token::{TokenCodec, TokenError};
use hotelman_core::error::AppError;
use hotelman_core::types::Role;

use crate::error::ApiError;
use crate::state::AppState;

/// Per-route-group authorization configuration.
///
/// The allowed set is normalized at construction: `Admin` is inserted
/// wherever `Receptionist` is accepted, so the hierarchy is resolved
/// once instead of per request.
#[derive(Clone)]
pub struct RoleGuard {
    /// Bearer-token codec.
    codec: Arc<TokenCodec>,
    /// Name of the session cookie to look in first.
    cookie_name: Arc<str>,
    /// Normalized allowed-role set.
    allowed: Arc<[Role]>,
}

impl std::fmt::Debug for RoleGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleGuard")
            .field("cookie_name", &self.cookie_name)
            .field("allowed", &self.allowed)
            .finish()
    }
}

impl RoleGuard {
    /// Builds a guard accepting the given roles plus every role that
    /// outranks one of them.
    pub fn new(state: &AppState, allowed: &[Role]) -> Self {
        let mut roles: Vec<Role> = Vec::new();
        for role in allowed {
            for candidate in [Role::Admin, Role::Receptionist] {
                if candidate.has_at_least(role) && !roles.contains(&candidate) {
                    roles.push(candidate);
                }
            }
        }

        Self {
            codec: Arc::clone(&state.codec),
            cookie_name: state.config.session.cookie_name.as_str().into(),
            allowed: roles.into(),
        }
    }

    /// The normalized allowed-role set.
    pub fn allowed_roles(&self) -> &[Role] {
        &self.allowed
    }

    fn accepts(&self, role: Role) -> bool {
        self.allowed.contains(&role)
    }
}

/// Middleware entry point; apply with `from_fn_with_state(guard, require_role)`.
pub async fn require_role(
    State(guard): State<RoleGuard>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // EXTRACT: session cookie first, then the Authorization header.
    let token = match jar.get(&guard.cookie_name) {
        Some(cookie) => cookie.value().to_string(),
        None => bearer_token(&request)
            .ok_or_else(|| AppError::unauthorized("Missing session token"))?
            .to_string(),
    };

    // DECODE: signature failures and unparseable tokens are distinct.
    let claims = guard.codec.decode(&token).map_err(|e| match e {
        TokenError::InvalidSignature => AppError::unauthorized("Invalid token signature"),
        TokenError::Malformed => AppError::bad_request("Malformed session token"),
    })?;

    // CHECK_EXPIRY: before the role check, so an expired token is always
    // 401 regardless of what it once permitted.
    if claims.is_expired() {
        return Err(AppError::unauthorized("Session token has expired").into());
    }

    // CHECK_ROLE
    if !guard.accepts(claims.role) {
        return Err(AppError::forbidden("Access denied for this role").into());
    }

    // FORWARD: enrich the request with the decoded claims.
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Reads a token from an `Authorization: Bearer <token>` header.
fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}
