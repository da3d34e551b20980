//! Route definitions for the Hotelman HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. Each
//! protected group carries its own [`RoleGuard`], so the allowed-role
//! set is fixed at construction time.

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use hotelman_core::config::server::CorsConfig;
use hotelman_core::types::Role;

use crate::handlers;
use crate::middleware::guard::{RoleGuard, require_role};
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes(&state))
        .merge(staff_routes(&state))
        .merge(admin_routes(&state))
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: login is open; logout and me require any staff role.
fn auth_routes(state: &AppState) -> Router<AppState> {
    let any_staff = RoleGuard::new(state, &[Role::Receptionist]);

    Router::new()
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
        .route_layer(axum_middleware::from_fn_with_state(any_staff, require_role))
        .route("/auth/login", post(handlers::auth::login))
}

/// Staff listing, open to receptionists and administrators.
fn staff_routes(state: &AppState) -> Router<AppState> {
    let any_staff = RoleGuard::new(state, &[Role::Receptionist]);

    Router::new()
        .route("/staff", get(handlers::staff::list_staff))
        .route_layer(axum_middleware::from_fn_with_state(any_staff, require_role))
}

/// Privileged management endpoints, administrators only.
fn admin_routes(state: &AppState) -> Router<AppState> {
    let admin_only = RoleGuard::new(state, &[Role::Admin]);

    Router::new()
        .route("/admin/staff", post(handlers::staff::create_staff))
        .route_layer(axum_middleware::from_fn_with_state(admin_only, require_role))
}

/// Liveness probe.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// CORS layer for the front-desk SPA origins.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}
