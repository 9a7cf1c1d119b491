//! Interaction handlers

use axum::{extract::State, Json};
use feed_service::dto::{CreateInteractionRequest, InteractionResponse};
use feed_service::InteractionService;

use crate::extractors::{AuthUser, IdPath, InteractionRoutePath, JsonBody};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Like or save a post
///
/// POST /interactions
pub async fn create_interaction(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(request): JsonBody<CreateInteractionRequest>,
) -> ApiResult<Created<Json<Vec<InteractionResponse>>>> {
    let service = InteractionService::new(state.service_context());
    let interactions = service.create(auth.caller(), request).await?;
    Ok(Created(Json(interactions)))
}

/// All interactions on a post
///
/// GET /interactions/:post_id
pub async fn list_post_interactions(
    State(state): State<AppState>,
    IdPath(path): IdPath<InteractionRoutePath>,
) -> ApiResult<Json<Vec<InteractionResponse>>> {
    let service = InteractionService::new(state.service_context());
    let interactions = service.list_for_post(path.post_id()).await?;
    Ok(Json(interactions))
}

/// Remove one of the caller's interactions
///
/// DELETE /interactions/:interaction_id
pub async fn delete_interaction(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<InteractionRoutePath>,
) -> ApiResult<Json<Vec<InteractionResponse>>> {
    let service = InteractionService::new(state.service_context());
    let interactions = service.delete(auth.caller(), path.interaction_id()).await?;
    Ok(Json(interactions))
}
