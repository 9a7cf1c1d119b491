//! Post handlers
//!
//! Reads are public. Create, rename and delete need a bearer token and run
//! with the caller's credentials.

use axum::{extract::State, Json};
use feed_service::dto::{
    CreatePostRequest, ListPostsQuery, PostResponse, PostStatsResponse, UpdateTitleQuery,
};
use feed_service::PostService;

use crate::extractors::{ApiQuery, AuthUser, IdPath, JsonBody, PostIdPath};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List posts
///
/// GET /posts?sort=newest|popular&limit=1..100
pub async fn list_posts(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListPostsQuery>,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let posts = service.list(query).await?;
    Ok(Json(posts))
}

/// Username of a post's author
///
/// GET /username/:post_id
pub async fn get_author_username(
    State(state): State<AppState>,
    IdPath(path): IdPath<PostIdPath>,
) -> ApiResult<Json<String>> {
    let service = PostService::new(state.service_context());
    let username = service.author_username(&path.post_id).await?;
    Ok(Json(username))
}

/// Like and save counts
///
/// GET /posts/:post_id/stats
pub async fn get_post_stats(
    State(state): State<AppState>,
    IdPath(path): IdPath<PostIdPath>,
) -> ApiResult<Json<PostStatsResponse>> {
    let service = PostService::new(state.service_context());
    let stats = service.stats(&path.post_id).await?;
    Ok(Json(stats))
}

/// Create a post owned by the caller
///
/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(request): JsonBody<CreatePostRequest>,
) -> ApiResult<Created<Json<Vec<PostResponse>>>> {
    let service = PostService::new(state.service_context());
    let posts = service.create(auth.caller(), request).await?;
    Ok(Created(Json(posts)))
}

/// Rename a post
///
/// PUT /posts/:post_id?updated_title=
pub async fn update_post_title(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<PostIdPath>,
    ApiQuery(query): ApiQuery<UpdateTitleQuery>,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let posts = service.update_title(auth.caller(), &path.post_id, query).await?;
    Ok(Json(posts))
}

/// Delete a post
///
/// DELETE /posts/:post_id
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<PostIdPath>,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let posts = service.delete(auth.caller(), &path.post_id).await?;
    Ok(Json(posts))
}
