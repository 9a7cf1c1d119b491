//! Authentication service
//!
//! Sign-up, log-in and bearer-token resolution. Credentials and sessions are
//! owned by the auth service; this layer only forwards them.

use feed_core::entities::NewProfile;
use feed_core::error::DomainError;
use feed_core::value_objects::Caller;
use tracing::{error, info, instrument, warn};
use validator::Validate;

use crate::dto::{
    IdentityResponse, LoginRequest, LoginResponse, ProfileResponse, SessionResponse, SignUpRequest,
    SignUpResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::fields::{require, require_present, validation_message};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create an identity and its profile row
    ///
    /// The two steps are not atomic. When the profile insert fails the
    /// identity stays behind without a profile.
    #[instrument(skip(self, request))]
    pub async fn sign_up(&self, request: SignUpRequest) -> ServiceResult<SignUpResponse> {
        require_present(&[
            (&request.email, "email"),
            (&request.password, "password"),
            (&request.username, "username"),
        ])?;
        request
            .validate()
            .map_err(|e| ServiceError::validation(validation_message(&e)))?;

        let email = require(request.email, "email")?;
        let password = require(request.password, "password")?;
        let username = require(request.username, "username")?;

        let outcome = self
            .ctx
            .identity_provider()
            .sign_up(&email, &password, &username)
            .await
            .map_err(|e| {
                warn!(error = %e, "Identity creation failed");
                into_sign_up_failure(e)
            })?;

        let identity_id = outcome.identity.id.clone();
        let profile = self
            .ctx
            .profile_repo()
            .create(&NewProfile::new(&identity_id, &email, &username))
            .await
            .map_err(|e| {
                error!(identity_id = %identity_id, error = %e, "Profile insert failed; identity left without a profile");
                DomainError::SignUpRejected(format!("profile could not be created: {e}"))
            })?;

        info!(user_id = %identity_id, "User signed up");

        Ok(SignUpResponse {
            session: outcome.session.as_ref().map(SessionResponse::from),
            identity: IdentityResponse::from(outcome.identity),
            profile: ProfileResponse::from(profile),
        })
    }

    /// Exchange email and password for a session
    #[instrument(skip(self, request))]
    pub async fn log_in(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let email = require(request.email, "email")?;
        let password = require(request.password, "password")?;

        let session = self
            .ctx
            .identity_provider()
            .sign_in(&email, &password)
            .await
            .map_err(|e| {
                warn!(error = %e, "Login failed");
                e
            })?;

        info!(user_id = %session.identity.id, "User logged in");

        Ok(LoginResponse {
            session: SessionResponse::from(&session),
            access_token: session.access_token.clone(),
            identity: IdentityResponse::from(session.identity),
        })
    }

    /// Resolve a bearer token to the caller it was issued for
    #[instrument(skip_all)]
    pub async fn authenticate(&self, access_token: &str) -> ServiceResult<Caller> {
        let user_id = match self.ctx.token_verifier() {
            Some(verifier) => verifier.verify(access_token)?.sub,
            None => {
                self.ctx
                    .identity_provider()
                    .verify_token(access_token)
                    .await?
                    .id
            }
        };

        Ok(Caller::new(user_id, access_token))
    }
}

/// Every identity-creation failure is reported as a rejected sign-up
fn into_sign_up_failure(e: DomainError) -> DomainError {
    match e {
        DomainError::SignUpRejected(_) => e,
        other => DomainError::SignUpRejected(other.to_string()),
    }
}
