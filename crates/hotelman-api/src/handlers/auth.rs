//! Auth handlers — login, logout, me.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use validator::Validate;

use hotelman_core::config::AppConfig;
use hotelman_core::error::AppError;
use hotelman_core::traits::StaffDirectory;

use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, LoginResponse, MeResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::CurrentStaff;
use crate::state::AppState;

/// POST /api/auth/login
///
/// On success the bearer token travels both ways: as a JSON field and as
/// an HttpOnly cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<LoginResponse>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let entry = state.issuer.login(&req.identifier, &req.password).await?;

    let jar = jar.add(session_cookie(&state.config, entry.token.clone()));

    Ok((
        jar,
        Json(ApiResponse::ok(LoginResponse {
            token: entry.token,
            claims: entry.claims,
        })),
    ))
}

/// POST /api/auth/logout
///
/// Clears the session cookie and drops the cache entry, so the next
/// login mints a fresh session id. Already-issued tokens stay valid
/// until natural expiry.
pub async fn logout(
    State(state): State<AppState>,
    CurrentStaff(claims): CurrentStaff,
    jar: CookieJar,
) -> Result<(CookieJar, Json<ApiResponse<MessageResponse>>), ApiError> {
    state.session_cache.invalidate(&claims.sub);
    tracing::info!(principal = %claims.sub, "Logout completed");

    let removal = Cookie::build((state.config.session.cookie_name.clone(), ""))
        .path("/")
        .build();

    Ok((
        jar.remove(removal),
        Json(ApiResponse::ok(MessageResponse {
            message: "Logged out".to_string(),
        })),
    ))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    CurrentStaff(claims): CurrentStaff,
) -> Result<Json<ApiResponse<MeResponse>>, ApiError> {
    let record = state
        .directory
        .find_by_email(&claims.sub)
        .await?
        .ok_or_else(|| AppError::not_found("Staff account not found"))?;

    Ok(Json(ApiResponse::ok(MeResponse {
        claims,
        staff: record.into(),
    })))
}

/// Builds the HttpOnly session cookie carrying the bearer token.
fn session_cookie(config: &AppConfig, token: String) -> Cookie<'static> {
    Cookie::build((config.session.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::days(config.auth.token_ttl_days as i64))
        .build()
}
