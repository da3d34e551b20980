//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use hotelman_api::build_router;
use hotelman_api::state::AppState;
use hotelman_auth::credentials::CredentialVerifier;
use hotelman_auth::directory::InMemoryStaffDirectory;
use hotelman_auth::session::cache::SessionCache;
use hotelman_auth::session::issuer::TokenIssuer;
use hotelman_auth::token::TokenCodec;
use hotelman_core::config::AppConfig;
use hotelman_core::traits::StaffDirectory;
use hotelman_core::types::{Role, StaffRecord};

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Application state for direct access to the auth core.
    pub state: AppState,
}

/// Captured response: status, parsed JSON body, headers.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub headers: HeaderMap,
}

impl TestApp {
    /// Builds the real router over an in-memory directory seeded with
    /// one receptionist and one administrator.
    pub fn new() -> Self {
        let config = Arc::new(AppConfig::default());
        let verifier = CredentialVerifier::new();

        let directory = Arc::new(InMemoryStaffDirectory::new());
        directory
            .insert(StaffRecord {
                email: "alice@example.com".to_string(),
                employee_id: "EMP-100".to_string(),
                full_name: "Alice Reyes".to_string(),
                role: Role::Receptionist,
                password_hash: verifier.hash("correct-pw").unwrap(),
            })
            .unwrap();
        directory
            .insert(StaffRecord {
                email: "bob@example.com".to_string(),
                employee_id: "EMP-001".to_string(),
                full_name: "Bob Aguilar".to_string(),
                role: Role::Admin,
                password_hash: verifier.hash("admin-pw").unwrap(),
            })
            .unwrap();

        let codec = Arc::new(TokenCodec::new(&config.auth));
        let session_cache = Arc::new(SessionCache::new());
        let issuer = Arc::new(TokenIssuer::new(
            Arc::clone(&directory) as Arc<dyn StaffDirectory>,
            verifier.clone(),
            Arc::clone(&codec),
            Arc::clone(&session_cache),
            &config.auth,
        ));

        let state = AppState {
            config,
            directory,
            verifier,
            codec,
            session_cache,
            issuer,
        };

        Self {
            router: build_router(state.clone()),
            state,
        }
    }

    /// Sends a request with an optional JSON body and optional bearer
    /// token in the Authorization header.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send(request).await
    }

    /// Sends a request carrying the bearer token in the session cookie
    /// instead of the Authorization header.
    pub async fn request_with_cookie(&self, method: &str, path: &str, token: &str) -> TestResponse {
        let cookie_name = &self.state.config.session.cookie_name;
        let request = Request::builder()
            .method(method)
            .uri(path)
            .header(header::COOKIE, format!("{cookie_name}={token}"))
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Logs in and returns the bearer token.
    pub async fn login(&self, identifier: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({
                    "identifier": identifier,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::OK, "login failed: {:?}", response.body);
        response.body["data"]["token"].as_str().unwrap().to_string()
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            body,
            headers,
        }
    }
}
