//! Authentication extractor
//!
//! Resolves the bearer token in the Authorization header to a caller.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use feed_core::Caller;
use feed_service::AuthService;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated caller extracted from the bearer token
///
/// Put this before any body extractor so that an unauthenticated request is
/// refused before its body is looked at.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Caller);

impl AuthUser {
    /// Verified caller, carrying the token for scoped writes
    pub fn caller(&self) -> &Caller {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        if bearer.token().trim().is_empty() {
            return Err(ApiError::MissingAuth);
        }

        let app_state = AppState::from_ref(state);
        let caller = AuthService::new(app_state.service_context())
            .authenticate(bearer.token())
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Bearer token rejected");
                e
            })?;

        Ok(AuthUser(caller))
    }
}
