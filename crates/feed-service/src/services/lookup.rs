//! Existence-check helpers
//!
//! Each check asks the backend for at most one row and reports either the
//! row or a human-readable reason. A missing row is not an error; backend
//! faults are.

use feed_core::entities::{Interaction, Post, Profile};
use feed_core::error::DomainError;
use feed_core::value_objects::{InteractionKey, Lookup};
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Existence checks against the backend
pub struct LookupService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LookupService<'a> {
    /// Create a new LookupService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Check that a post exists
    #[instrument(skip(self))]
    pub async fn post_exists(&self, post_id: &str) -> ServiceResult<Lookup<Post>> {
        let post = self.ctx.post_repo().find_by_id(post_id).await?;
        let lookup = Lookup::from_option(post, || DomainError::PostNotFound(post_id.to_string()).to_string());
        debug!(found = lookup.is_found(), "Post lookup");
        Ok(lookup)
    }

    /// Check that a user profile exists
    #[instrument(skip(self))]
    pub async fn user_exists(&self, user_id: &str) -> ServiceResult<Lookup<Profile>> {
        let profile = self.ctx.profile_repo().find_by_id(user_id).await?;
        let lookup = Lookup::from_option(profile, || DomainError::UserNotFound(user_id.to_string()).to_string());
        debug!(found = lookup.is_found(), "User lookup");
        Ok(lookup)
    }

    /// Check whether an interaction already occupies a (user, post, type) key
    #[instrument(skip(self))]
    pub async fn interaction_exists(&self, key: &InteractionKey) -> ServiceResult<Lookup<Interaction>> {
        let interaction = self.ctx.interaction_repo().find(key).await?;
        let lookup = Lookup::from_option(interaction, || {
            format!(
                "No {} interaction by {} on post {}",
                key.interaction_type, key.user_id, key.post_id
            )
        });
        debug!(found = lookup.is_found(), "Interaction lookup");
        Ok(lookup)
    }
}
