//! Post service
//!
//! Listing, author lookup, engagement stats and owner-only mutations.
//! Mutations run with the caller's credentials; a mutation that touches no
//! rows cannot tell a missing post from a foreign one and reports both alike.

use feed_core::entities::{NewPost, PostQuery, PostSort};
use feed_core::error::DomainError;
use feed_core::value_objects::{Caller, Lookup};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::mappers::map_all;
use crate::dto::{CreatePostRequest, ListPostsQuery, PostResponse, PostStatsResponse, UpdateTitleQuery};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::fields::{require, require_present, validation_message};
use super::lookup::LookupService;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List posts, optionally sorted and bounded
    #[instrument(skip(self))]
    pub async fn list(&self, query: ListPostsQuery) -> ServiceResult<Vec<PostResponse>> {
        query
            .validate()
            .map_err(|e| ServiceError::validation(validation_message(&e)))?;

        let sort = query.sort.as_deref().map(parse_sort).transpose()?;
        let posts = self
            .ctx
            .post_repo()
            .list(PostQuery {
                sort,
                limit: query.limit,
            })
            .await?;

        Ok(map_all(posts))
    }

    /// Username of the profile that owns a post
    #[instrument(skip(self))]
    pub async fn author_username(&self, post_id: &str) -> ServiceResult<String> {
        self.ctx
            .post_repo()
            .find_author_username(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id))
    }

    /// Like and save counts for a post
    #[instrument(skip(self))]
    pub async fn stats(&self, post_id: &str) -> ServiceResult<PostStatsResponse> {
        if let Lookup::Missing(_) = LookupService::new(self.ctx).post_exists(post_id).await? {
            return Err(ServiceError::not_found("Post", post_id));
        }

        let counts = self.ctx.interaction_repo().count_by_post(post_id).await?;
        Ok(PostStatsResponse {
            post_id: post_id.to_string(),
            likes: counts.likes,
            saves: counts.saves,
        })
    }

    /// Create a post owned by the caller
    #[instrument(skip(self, request), fields(user_id = %caller.user_id()))]
    pub async fn create(&self, caller: &Caller, request: CreatePostRequest) -> ServiceResult<Vec<PostResponse>> {
        // Absent fields are reported before malformed ones
        require_present(&[
            (&request.title, "title"),
            (&request.content, "content"),
            (&request.article_url, "article_url"),
        ])?;
        request
            .validate()
            .map_err(|e| ServiceError::validation(validation_message(&e)))?;

        let new_post = NewPost {
            title: require(request.title, "title")?,
            content: require(request.content, "content")?,
            article_url: require(request.article_url, "article_url")?,
            thumbnail_url: request.thumbnail_url,
            user_id: caller.user_id().to_string(),
        };

        let posts = self.ctx.post_repo().create(caller, &new_post).await.map_err(|e| {
            if e.is_authorization() {
                warn!(error = %e, "Post insert refused by row-level security");
            }
            e
        })?;

        info!(count = posts.len(), "Post created");
        Ok(map_all(posts))
    }

    /// Rename a post the caller owns
    #[instrument(skip(self, query), fields(user_id = %caller.user_id()))]
    pub async fn update_title(
        &self,
        caller: &Caller,
        post_id: &str,
        query: UpdateTitleQuery,
    ) -> ServiceResult<Vec<PostResponse>> {
        let title = require(query.updated_title, "updated_title")?;

        let posts = self.ctx.post_repo().update_title(caller, post_id, &title).await?;
        if posts.is_empty() {
            warn!(post_id, "Title update touched no rows");
            return Err(DomainError::NotFoundOrUnauthorized("Post").into());
        }

        info!(post_id, "Post title updated");
        Ok(map_all(posts))
    }

    /// Delete a post the caller owns
    #[instrument(skip(self), fields(user_id = %caller.user_id()))]
    pub async fn delete(&self, caller: &Caller, post_id: &str) -> ServiceResult<Vec<PostResponse>> {
        let posts = self.ctx.post_repo().delete(caller, post_id).await?;
        if posts.is_empty() {
            warn!(post_id, "Delete touched no rows");
            return Err(DomainError::NotFoundOrUnauthorized("Post").into());
        }

        info!(post_id, "Post deleted");
        Ok(map_all(posts))
    }
}

fn parse_sort(value: &str) -> ServiceResult<PostSort> {
    match value {
        "newest" => Ok(PostSort::Newest),
        "popular" => Ok(PostSort::Popular),
        other => Err(ServiceError::validation(format!(
            "sort must be 'newest' or 'popular', got '{other}'"
        ))),
    }
}
