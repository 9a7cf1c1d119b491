//! PostgREST implementation of PostRepository

use async_trait::async_trait;
use reqwest::Method;
use tracing::instrument;

use feed_core::entities::{NewPost, Post, PostQuery, PostSort};
use feed_core::traits::{PostRepository, RepoResult};
use feed_core::value_objects::Caller;

use crate::client::{BackendClient, Credentials, Order, RestQuery, RETURN_REPRESENTATION};
use crate::models::{AuthorModel, PostInsert, PostModel, PostTitleUpdate};

use super::error::{empty_on_malformed_id, map_rest_error};

const TABLE: &str = "posts";

/// PostgREST implementation of PostRepository
#[derive(Clone)]
pub struct RestPostRepository {
    client: BackendClient,
}

impl RestPostRepository {
    /// Create a new RestPostRepository
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

/// Translate listing options into PostgREST parameters
fn list_query(query: PostQuery) -> RestQuery {
    let mut rest = RestQuery::new().select("*");
    rest = match query.sort {
        Some(PostSort::Newest) => rest.order("created_at", Order::Desc),
        Some(PostSort::Popular) => rest.order("view_count", Order::Desc),
        None => rest,
    };
    match query.limit {
        Some(limit) => rest.limit(limit),
        None => rest,
    }
}

fn into_posts(rows: Vec<PostModel>) -> Vec<Post> {
    rows.into_iter().map(Post::from).collect()
}

#[async_trait]
impl PostRepository for RestPostRepository {
    #[instrument(skip(self))]
    async fn list(&self, query: PostQuery) -> RepoResult<Vec<Post>> {
        let request = self
            .client
            .table(Method::GET, TABLE, &list_query(query), Credentials::Service);

        let rows = BackendClient::json::<Vec<PostModel>>(request)
            .await
            .map_err(map_rest_error)?;

        Ok(into_posts(rows))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Post>> {
        let query = RestQuery::new().select("*").eq("id", id).limit(1);
        let request = self.client.table(Method::GET, TABLE, &query, Credentials::Service);

        let rows = empty_on_malformed_id(BackendClient::json::<Vec<PostModel>>(request).await)?;
        Ok(rows.into_iter().next().map(Post::from))
    }

    #[instrument(skip(self))]
    async fn find_author_username(&self, post_id: &str) -> RepoResult<Option<String>> {
        let query = RestQuery::new()
            .select("profiles(username)")
            .eq("id", post_id)
            .limit(1);
        let request = self.client.table(Method::GET, TABLE, &query, Credentials::Service);

        let rows = empty_on_malformed_id(BackendClient::json::<Vec<AuthorModel>>(request).await)?;
        Ok(rows
            .into_iter()
            .next()
            .and_then(|row| row.profiles)
            .map(|profile| profile.username))
    }

    #[instrument(skip(self, post), fields(user_id = %caller.user_id()))]
    async fn create(&self, caller: &Caller, post: &NewPost) -> RepoResult<Vec<Post>> {
        let request = self
            .client
            .table(Method::POST, TABLE, &RestQuery::new(), Credentials::Caller(caller))
            .header("Prefer", RETURN_REPRESENTATION)
            .json(&PostInsert::from(post));

        let rows = BackendClient::json::<Vec<PostModel>>(request)
            .await
            .map_err(map_rest_error)?;

        Ok(into_posts(rows))
    }

    #[instrument(skip(self, title), fields(user_id = %caller.user_id()))]
    async fn update_title(&self, caller: &Caller, id: &str, title: &str) -> RepoResult<Vec<Post>> {
        let request = self
            .client
            .table(Method::PATCH, TABLE, &RestQuery::new().eq("id", id), Credentials::Caller(caller))
            .header("Prefer", RETURN_REPRESENTATION)
            .json(&PostTitleUpdate { title });

        let rows = empty_on_malformed_id(BackendClient::json::<Vec<PostModel>>(request).await)?;
        Ok(into_posts(rows))
    }

    #[instrument(skip(self), fields(user_id = %caller.user_id()))]
    async fn delete(&self, caller: &Caller, id: &str) -> RepoResult<Vec<Post>> {
        let request = self
            .client
            .table(Method::DELETE, TABLE, &RestQuery::new().eq("id", id), Credentials::Caller(caller))
            .header("Prefer", RETURN_REPRESENTATION);

        let rows = empty_on_malformed_id(BackendClient::json::<Vec<PostModel>>(request).await)?;
        Ok(into_posts(rows))
    }
}
