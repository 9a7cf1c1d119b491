//! Auth-service implementation of IdentityProvider

use async_trait::async_trait;
use reqwest::Method;
use tracing::{instrument, warn};

use feed_core::entities::{AuthIdentity, AuthSession, SignUpOutcome};
use feed_core::error::DomainError;
use feed_core::traits::{IdentityProvider, RepoResult};

use crate::client::{BackendClient, Credentials, RestError};
use crate::models::{GoTrueSession, GoTrueUser, PasswordGrant, SignUpBody, SignUpMetadata, SignUpReply};

use super::error::map_rest_error;

/// Identity provider backed by the hosted auth service
#[derive(Clone)]
pub struct GoTrueIdentityProvider {
    client: BackendClient,
}

impl GoTrueIdentityProvider {
    /// Create a new GoTrueIdentityProvider
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

fn is_client_rejection(e: &RestError) -> bool {
    matches!(e.status(), Some(400..=499))
}

#[async_trait]
impl IdentityProvider for GoTrueIdentityProvider {
    #[instrument(skip(self, password))]
    async fn sign_up(&self, email: &str, password: &str, username: &str) -> RepoResult<SignUpOutcome> {
        let request = self
            .client
            .auth(Method::POST, "signup", Credentials::Anonymous)
            .json(&SignUpBody {
                email,
                password,
                data: SignUpMetadata { username },
            });

        let reply = BackendClient::json::<SignUpReply>(request).await.map_err(|e| {
            if is_client_rejection(&e) {
                DomainError::SignUpRejected(e.to_string())
            } else {
                map_rest_error(e)
            }
        })?;

        Ok(SignUpOutcome::from(reply))
    }

    #[instrument(skip(self, password))]
    async fn sign_in(&self, email: &str, password: &str) -> RepoResult<AuthSession> {
        let request = self
            .client
            .auth(Method::POST, "token", Credentials::Anonymous)
            .query(&[("grant_type", "password")])
            .json(&PasswordGrant { email, password });

        let session = BackendClient::json::<GoTrueSession>(request).await.map_err(|e| {
            if is_client_rejection(&e) {
                warn!(reason = %e, "Password grant rejected");
                DomainError::InvalidCredentials
            } else {
                map_rest_error(e)
            }
        })?;

        Ok(AuthSession::from(session))
    }

    #[instrument(skip_all)]
    async fn verify_token(&self, access_token: &str) -> RepoResult<AuthIdentity> {
        let request = self
            .client
            .auth(Method::GET, "user", Credentials::Bearer(access_token));

        let user = BackendClient::json::<GoTrueUser>(request).await.map_err(|e| {
            if is_client_rejection(&e) {
                DomainError::InvalidToken
            } else {
                map_rest_error(e)
            }
        })?;

        Ok(AuthIdentity::from(user))
    }
}
