//! Backend traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs and the infrastructure layer
//! provides the implementation. Reads go through the server's own
//! credentials; every method taking a [`Caller`] must run with the caller's
//! credentials so that row-level security decides what the caller may touch.

use async_trait::async_trait;

use crate::entities::{
    AuthIdentity, AuthSession, Interaction, InteractionCounts, NewPost, NewProfile, Post,
    PostQuery, Profile, SignUpOutcome,
};
use crate::error::DomainError;
use crate::value_objects::{Caller, InteractionKey};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find profile by ID
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Profile>>;

    /// Insert a profile row with server credentials
    async fn create(&self, profile: &NewProfile) -> RepoResult<Profile>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// List posts
    async fn list(&self, query: PostQuery) -> RepoResult<Vec<Post>>;

    /// Find post by ID
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Post>>;

    /// Username of the post's owner, `None` when the post does not exist
    async fn find_author_username(&self, post_id: &str) -> RepoResult<Option<String>>;

    /// Insert a post as the caller; returns the inserted rows
    async fn create(&self, caller: &Caller, post: &NewPost) -> RepoResult<Vec<Post>>;

    /// Update a post title as the caller; returns the affected rows
    async fn update_title(&self, caller: &Caller, id: &str, title: &str) -> RepoResult<Vec<Post>>;

    /// Delete a post as the caller; returns the deleted rows
    async fn delete(&self, caller: &Caller, id: &str) -> RepoResult<Vec<Post>>;
}

// ============================================================================
// Interaction Repository
// ============================================================================

#[async_trait]
pub trait InteractionRepository: Send + Sync {
    /// Find the interaction occupying a (user, post, type) key
    async fn find(&self, key: &InteractionKey) -> RepoResult<Option<Interaction>>;

    /// List all interactions on a post
    async fn find_by_post(&self, post_id: &str) -> RepoResult<Vec<Interaction>>;

    /// Like and save counts on a post
    async fn count_by_post(&self, post_id: &str) -> RepoResult<InteractionCounts>;

    /// Insert an interaction as the caller; returns the inserted rows.
    ///
    /// A key that is already taken yields `DomainError::InteractionAlreadyExists`.
    async fn create(&self, caller: &Caller, key: &InteractionKey) -> RepoResult<Vec<Interaction>>;

    /// Delete an interaction as the caller; returns the deleted rows
    async fn delete(&self, caller: &Caller, id: &str) -> RepoResult<Vec<Interaction>>;
}

// ============================================================================
// Identity Provider
// ============================================================================

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create an identity with email and password
    async fn sign_up(&self, email: &str, password: &str, username: &str) -> RepoResult<SignUpOutcome>;

    /// Exchange email and password for a session
    async fn sign_in(&self, email: &str, password: &str) -> RepoResult<AuthSession>;

    /// Resolve a bearer token to the identity it was issued for
    async fn verify_token(&self, access_token: &str) -> RepoResult<AuthIdentity>;
}

// ============================================================================
// Health
// ============================================================================

#[async_trait]
pub trait BackendHealth: Send + Sync {
    /// Check that the backend answers
    async fn ping(&self) -> RepoResult<()>;
}
