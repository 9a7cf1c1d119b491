//! PostgREST implementation of InteractionRepository

use async_trait::async_trait;
use reqwest::Method;
use tracing::instrument;

use feed_core::entities::{Interaction, InteractionCounts};
use feed_core::error::DomainError;
use feed_core::traits::{InteractionRepository, RepoResult};
use feed_core::value_objects::{Caller, InteractionKey, InteractionType};

use crate::client::{BackendClient, Credentials, Order, RestQuery, RETURN_REPRESENTATION};
use crate::mappers::interactions_from_rows;
use crate::models::{InteractionInsert, InteractionModel};

use super::error::{empty_on_malformed_id, map_rest_error, map_unique_violation, INVALID_TEXT_REPRESENTATION};

const TABLE: &str = "interactions";

/// PostgREST implementation of InteractionRepository
#[derive(Clone)]
pub struct RestInteractionRepository {
    client: BackendClient,
}

impl RestInteractionRepository {
    /// Create a new RestInteractionRepository
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    async fn count_type(&self, post_id: &str, interaction_type: InteractionType) -> RepoResult<u64> {
        let query = RestQuery::new()
            .select("id")
            .eq("post_id", post_id)
            .eq("interaction_type", interaction_type.as_str())
            .limit(0);
        let request = self.client.table(Method::GET, TABLE, &query, Credentials::Service);

        match BackendClient::count(request).await {
            Ok(count) => Ok(count),
            Err(e) if e.code() == Some(INVALID_TEXT_REPRESENTATION) => Ok(0),
            Err(e) => Err(map_rest_error(e)),
        }
    }
}

#[async_trait]
impl InteractionRepository for RestInteractionRepository {
    #[instrument(skip(self))]
    async fn find(&self, key: &InteractionKey) -> RepoResult<Option<Interaction>> {
        let query = RestQuery::new()
            .select("*")
            .eq("user_id", &key.user_id)
            .eq("post_id", &key.post_id)
            .eq("interaction_type", key.interaction_type.as_str())
            .limit(1);
        let request = self.client.table(Method::GET, TABLE, &query, Credentials::Service);

        let rows = empty_on_malformed_id(BackendClient::json::<Vec<InteractionModel>>(request).await)?;
        rows.into_iter().next().map(Interaction::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: &str) -> RepoResult<Vec<Interaction>> {
        let query = RestQuery::new()
            .select("*")
            .eq("post_id", post_id)
            .order("created_at", Order::Asc);
        let request = self.client.table(Method::GET, TABLE, &query, Credentials::Service);

        let rows = empty_on_malformed_id(BackendClient::json::<Vec<InteractionModel>>(request).await)?;
        interactions_from_rows(rows)
    }

    #[instrument(skip(self))]
    async fn count_by_post(&self, post_id: &str) -> RepoResult<InteractionCounts> {
        let likes = self.count_type(post_id, InteractionType::Like).await?;
        let saves = self.count_type(post_id, InteractionType::Save).await?;
        Ok(InteractionCounts::new(likes, saves))
    }

    #[instrument(skip(self), fields(user_id = %caller.user_id()))]
    async fn create(&self, caller: &Caller, key: &InteractionKey) -> RepoResult<Vec<Interaction>> {
        let request = self
            .client
            .table(Method::POST, TABLE, &RestQuery::new(), Credentials::Caller(caller))
            .header("Prefer", RETURN_REPRESENTATION)
            .json(&InteractionInsert::from(key));

        let rows = BackendClient::json::<Vec<InteractionModel>>(request)
            .await
            .map_err(|e| map_unique_violation(e, || DomainError::InteractionAlreadyExists))?;

        interactions_from_rows(rows)
    }

    #[instrument(skip(self), fields(user_id = %caller.user_id()))]
    async fn delete(&self, caller: &Caller, id: &str) -> RepoResult<Vec<Interaction>> {
        let request = self
            .client
            .table(Method::DELETE, TABLE, &RestQuery::new().eq("id", id), Credentials::Caller(caller))
            .header("Prefer", RETURN_REPRESENTATION);

        let rows = empty_on_malformed_id(BackendClient::json::<Vec<InteractionModel>>(request).await)?;
        interactions_from_rows(rows)
    }
}
