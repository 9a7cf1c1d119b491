//! Path parameter extractors
//!
//! Ids are opaque strings; whether one names an existing row is decided by
//! the backend, so no format is enforced here.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::response::ApiError;

/// Extract path parameters, rejecting with the API error envelope
#[derive(Debug, Clone)]
pub struct IdPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for IdPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        Ok(IdPath(inner))
    }
}

/// Path parameters with post_id
#[derive(Debug, serde::Deserialize)]
pub struct PostIdPath {
    pub post_id: String,
}

/// `/interactions/:id`, shared by listing (a post id) and deleting (an
/// interaction id)
#[derive(Debug, serde::Deserialize)]
pub struct InteractionRoutePath {
    pub id: String,
}

impl InteractionRoutePath {
    /// The segment read as a post id
    pub fn post_id(&self) -> &str {
        &self.id
    }

    /// The segment read as an interaction id
    pub fn interaction_id(&self) -> &str {
        &self.id
    }
}
