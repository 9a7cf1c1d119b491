//! PostgREST implementation of ProfileRepository

use async_trait::async_trait;
use reqwest::Method;
use tracing::instrument;

use feed_core::entities::{NewProfile, Profile};
use feed_core::traits::{ProfileRepository, RepoResult};

use crate::client::{BackendClient, Credentials, RestQuery, RETURN_REPRESENTATION};
use crate::models::{ProfileInsert, ProfileModel};

use super::error::{empty_insert, empty_on_malformed_id, map_rest_error};

const TABLE: &str = "profiles";

/// PostgREST implementation of ProfileRepository
#[derive(Clone)]
pub struct RestProfileRepository {
    client: BackendClient,
}

impl RestProfileRepository {
    /// Create a new RestProfileRepository
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileRepository for RestProfileRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Profile>> {
        let query = RestQuery::new().select("*").eq("id", id).limit(1);
        let request = self.client.table(Method::GET, TABLE, &query, Credentials::Service);

        let rows = empty_on_malformed_id(BackendClient::json::<Vec<ProfileModel>>(request).await)?;
        Ok(rows.into_iter().next().map(Profile::from))
    }

    #[instrument(skip(self, profile), fields(profile_id = %profile.id))]
    async fn create(&self, profile: &NewProfile) -> RepoResult<Profile> {
        let request = self
            .client
            .table(Method::POST, TABLE, &RestQuery::new(), Credentials::Service)
            .header("Prefer", RETURN_REPRESENTATION)
            .json(&ProfileInsert::from(profile));

        let rows = BackendClient::json::<Vec<ProfileModel>>(request)
            .await
            .map_err(map_rest_error)?;

        rows.into_iter()
            .next()
            .map(Profile::from)
            .ok_or_else(|| empty_insert(TABLE))
    }
}
