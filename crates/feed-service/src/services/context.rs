//! Service context - dependency container for services
//!
//! Holds the backend ports and the optional local token verifier.

use std::sync::Arc;

use feed_common::TokenVerifier;
use feed_core::traits::{
    BackendHealth, IdentityProvider, InteractionRepository, PostRepository, ProfileRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cloning is cheap; every dependency sits behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    profile_repo: Arc<dyn ProfileRepository>,
    post_repo: Arc<dyn PostRepository>,
    interaction_repo: Arc<dyn InteractionRepository>,

    // Auth
    identity_provider: Arc<dyn IdentityProvider>,
    token_verifier: Option<Arc<TokenVerifier>>,

    backend_health: Arc<dyn BackendHealth>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        profile_repo: Arc<dyn ProfileRepository>,
        post_repo: Arc<dyn PostRepository>,
        interaction_repo: Arc<dyn InteractionRepository>,
        identity_provider: Arc<dyn IdentityProvider>,
        token_verifier: Option<Arc<TokenVerifier>>,
        backend_health: Arc<dyn BackendHealth>,
    ) -> Self {
        Self {
            profile_repo,
            post_repo,
            interaction_repo,
            identity_provider,
            token_verifier,
            backend_health,
        }
    }

    // === Repositories ===

    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    pub fn interaction_repo(&self) -> &dyn InteractionRepository {
        self.interaction_repo.as_ref()
    }

    // === Auth ===

    pub fn identity_provider(&self) -> &dyn IdentityProvider {
        self.identity_provider.as_ref()
    }

    /// Local verifier; `None` means tokens are checked by the auth service
    pub fn token_verifier(&self) -> Option<&TokenVerifier> {
        self.token_verifier.as_deref()
    }

    pub fn backend_health(&self) -> &dyn BackendHealth {
        self.backend_health.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("local_token_verification", &self.token_verifier.is_some())
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    interaction_repo: Option<Arc<dyn InteractionRepository>>,
    identity_provider: Option<Arc<dyn IdentityProvider>>,
    token_verifier: Option<Arc<TokenVerifier>>,
    backend_health: Option<Arc<dyn BackendHealth>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn interaction_repo(mut self, repo: Arc<dyn InteractionRepository>) -> Self {
        self.interaction_repo = Some(repo);
        self
    }

    pub fn identity_provider(mut self, provider: Arc<dyn IdentityProvider>) -> Self {
        self.identity_provider = Some(provider);
        self
    }

    /// Verify tokens locally instead of asking the auth service
    pub fn token_verifier(mut self, verifier: Arc<TokenVerifier>) -> Self {
        self.token_verifier = Some(verifier);
        self
    }

    pub fn backend_health(mut self, health: Arc<dyn BackendHealth>) -> Self {
        self.backend_health = Some(health);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let missing = |name: &str| ServiceError::internal(format!("{name} is required"));

        Ok(ServiceContext::new(
            self.profile_repo.ok_or_else(|| missing("profile_repo"))?,
            self.post_repo.ok_or_else(|| missing("post_repo"))?,
            self.interaction_repo.ok_or_else(|| missing("interaction_repo"))?,
            self.identity_provider.ok_or_else(|| missing("identity_provider"))?,
            self.token_verifier,
            self.backend_health.ok_or_else(|| missing("backend_health"))?,
        ))
    }
}
