//! Server setup and initialization
//!
//! Provides the application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use feed_common::{AppConfig, AppError, TokenVerifier};
use feed_db::{
    create_client, GoTrueIdentityProvider, RestBackendHealth, RestInteractionRepository,
    RestPostRepository, RestProfileRepository,
};
use feed_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, MiddlewareSettings};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let settings = MiddlewareSettings {
        rate_limit: &config.rate_limit,
        cors: &config.cors,
        is_production: config.app.env.is_production(),
        request_timeout: config.api.request_timeout(),
    };

    let router = apply_middleware(create_router(), &settings)?.merge(health_routes());
    Ok(router.with_state(state))
}

/// Wire the backend client and repositories into an AppState
pub fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!(url = %config.backend.url, "Configuring backend client");
    let client = create_client(&config.backend)
        .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {e}")))?;

    let token_verifier = config.backend.jwt_secret.as_deref().map(|secret| {
        info!("Verifying access tokens locally");
        Arc::new(TokenVerifier::new(secret))
    });
    if token_verifier.is_none() {
        info!("Verifying access tokens with the auth service");
    }

    let mut builder = ServiceContextBuilder::new()
        .profile_repo(Arc::new(RestProfileRepository::new(client.clone())))
        .post_repo(Arc::new(RestPostRepository::new(client.clone())))
        .interaction_repo(Arc::new(RestInteractionRepository::new(client.clone())))
        .identity_provider(Arc::new(GoTrueIdentityProvider::new(client.clone())))
        .backend_health(Arc::new(RestBackendHealth::new(client)));
    if let Some(verifier) = token_verifier {
        builder = builder.token_verifier(verifier);
    }

    let service_context = builder
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server until Ctrl-C
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address {}: {e}", config.api.address())))?;

    let state = create_app_state(config)?;
    let app = create_app(state)?;

    run_server(app, addr).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
