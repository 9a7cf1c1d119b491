//! Route definitions

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{auth, health, interactions, posts};
use crate::state::AppState;

/// Create the API router (health routes are kept apart so they skip rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(post_routes())
        .merge(interaction_routes())
        .merge(auth_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Post routes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route(
            "/posts/:post_id",
            put(posts::update_post_title).delete(posts::delete_post),
        )
        .route("/posts/:post_id/stats", get(posts::get_post_stats))
        .route("/username/:post_id", get(posts::get_author_username))
}

/// Interaction routes
///
/// Listing takes a post id and deletion an interaction id in the same
/// segment, so both share one route.
fn interaction_routes() -> Router<AppState> {
    Router::new()
        .route("/interactions", post(interactions::create_interaction))
        .route(
            "/interactions/:id",
            get(interactions::list_post_interactions).delete(interactions::delete_interaction),
        )
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::sign_up))
        .route("/login", post(auth::log_in))
}
