//! Hotelman Server — hotel front-desk backend.
//!
//! Main entry point that wires the auth core together and starts the
//! HTTP server.

use std::sync::Arc;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use hotelman_api::state::AppState;
use hotelman_auth::credentials::CredentialVerifier;
use hotelman_auth::directory::InMemoryStaffDirectory;
use hotelman_auth::session::cache::SessionCache;
use hotelman_auth::session::issuer::TokenIssuer;
use hotelman_auth::session::sweep::SessionSweeper;
use hotelman_auth::token::TokenCodec;
use hotelman_core::config::AppConfig;
use hotelman_core::error::AppError;
use hotelman_core::traits::StaffDirectory;
use hotelman_core::types::StaffRecord;

#[tokio::main]
async fn main() {
    let env = std::env::var("HOTELMAN_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Hotelman v{}", env!("CARGO_PKG_VERSION"));

    // ── Auth core ────────────────────────────────────────────────
    let verifier = CredentialVerifier::new();
    let directory = Arc::new(InMemoryStaffDirectory::new());
    let codec = Arc::new(TokenCodec::new(&config.auth));
    let session_cache = Arc::new(SessionCache::new());
    let issuer = Arc::new(TokenIssuer::new(
        Arc::clone(&directory) as Arc<dyn StaffDirectory>,
        verifier.clone(),
        Arc::clone(&codec),
        Arc::clone(&session_cache),
        &config.auth,
    ));

    bootstrap_admin(&config, &directory, &verifier)?;

    // ── Session sweep ────────────────────────────────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sweeper = SessionSweeper::new(Arc::clone(&session_cache), &config.session);
    let sweep_handle = tokio::spawn(sweeper.run(shutdown_rx));

    // ── HTTP server ──────────────────────────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = std::time::Duration::from_secs(config.server.shutdown_grace_seconds);

    let app_state = AppState {
        config: Arc::new(config),
        directory,
        verifier,
        codec,
        session_cache,
        issuer,
    };

    let app = hotelman_api::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Hotelman server listening on {addr}");

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    let _ = tokio::time::timeout(grace, sweep_handle).await;

    tracing::info!("Hotelman server shut down gracefully");
    Ok(())
}

/// Provision the first-run administrator account when the directory is
/// empty and configuration defines one.
fn bootstrap_admin(
    config: &AppConfig,
    directory: &InMemoryStaffDirectory,
    verifier: &CredentialVerifier,
) -> Result<(), AppError> {
    let Some(admin) = &config.auth.bootstrap_admin else {
        tracing::warn!("No bootstrap admin configured; logins will fail until staff exist");
        return Ok(());
    };

    if !directory.is_empty() {
        return Ok(());
    }

    directory.insert(StaffRecord {
        email: admin.email.clone(),
        employee_id: admin.employee_id.clone(),
        full_name: admin.full_name.clone(),
        role: admin.role(),
        password_hash: verifier.hash(&admin.password)?,
    })?;

    tracing::info!(email = %admin.email, "Bootstrap administrator provisioned");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
