//! Backend reachability check

use async_trait::async_trait;
use reqwest::Method;
use tracing::instrument;

use feed_core::traits::{BackendHealth, RepoResult};

use crate::client::{BackendClient, Credentials};

use super::error::map_rest_error;

/// Pings the auth service's health endpoint
#[derive(Clone)]
pub struct RestBackendHealth {
    client: BackendClient,
}

impl RestBackendHealth {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BackendHealth for RestBackendHealth {
    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        let request = self.client.auth(Method::GET, "health", Credentials::Anonymous);
        BackendClient::execute(request).await.map_err(map_rest_error)
    }
}
