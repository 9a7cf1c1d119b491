//! Authentication handlers
//!
//! Endpoints for sign-up and log-in. Sessions are issued by the auth
//! backend and passed through unchanged.

use axum::{extract::State, Json};
use feed_service::dto::{LoginRequest, LoginResponse, SignUpRequest, SignUpResponse};
use feed_service::AuthService;

use crate::extractors::JsonBody;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new user and their profile
///
/// POST /signup
pub async fn sign_up(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SignUpRequest>,
) -> ApiResult<Created<Json<SignUpResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.sign_up(request).await?;
    Ok(Created(Json(response)))
}

/// Login with email and password
///
/// POST /login
pub async fn log_in(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.log_in(request).await?;
    Ok(Json(response))
}
