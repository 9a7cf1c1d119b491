//! Interaction service
//!
//! Creating, listing and removing likes and saves.

use feed_core::error::DomainError;
use feed_core::value_objects::Caller;
use tracing::{info, instrument, warn};

use crate::dto::mappers::map_all;
use crate::dto::{CreateInteractionRequest, InteractionResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::validator::{InteractionValidator, Verdict};

/// Interaction service
pub struct InteractionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InteractionService<'a> {
    /// Create a new InteractionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Validate and insert an interaction with the caller's credentials
    #[instrument(skip(self, request), fields(user_id = %caller.user_id()))]
    pub async fn create(
        &self,
        caller: &Caller,
        request: CreateInteractionRequest,
    ) -> ServiceResult<Vec<InteractionResponse>> {
        let key = match InteractionValidator::new(self.ctx).validate(&request).await? {
            Verdict::Accepted(key) => key,
            Verdict::Rejected(reason) => {
                warn!(%reason, "Interaction rejected");
                return Err(ServiceError::Rejected(reason));
            }
        };

        // The unique constraint settles races the validator cannot see
        let interactions = match self.ctx.interaction_repo().create(caller, &key).await {
            Ok(rows) => rows,
            Err(DomainError::InteractionAlreadyExists) => {
                warn!(?key, "Interaction inserted concurrently");
                return Err(ServiceError::Rejected(
                    DomainError::InteractionAlreadyExists.to_string(),
                ));
            }
            Err(e) => return Err(e.into()),
        };

        info!(post_id = %key.post_id, interaction_type = %key.interaction_type, "Interaction created");
        Ok(map_all(interactions))
    }

    /// All interactions on a post; none at all is reported as not found
    #[instrument(skip(self))]
    pub async fn list_for_post(&self, post_id: &str) -> ServiceResult<Vec<InteractionResponse>> {
        let interactions = self.ctx.interaction_repo().find_by_post(post_id).await?;
        if interactions.is_empty() {
            return Err(DomainError::NoInteractions(post_id.to_string()).into());
        }
        Ok(map_all(interactions))
    }

    /// Remove an interaction with the caller's credentials
    #[instrument(skip(self), fields(user_id = %caller.user_id()))]
    pub async fn delete(&self, caller: &Caller, interaction_id: &str) -> ServiceResult<Vec<InteractionResponse>> {
        let interactions = self.ctx.interaction_repo().delete(caller, interaction_id).await?;
        if interactions.is_empty() {
            warn!(interaction_id, "Delete touched no rows");
            return Err(DomainError::NotFoundOrUnauthorized("Interaction").into());
        }

        info!(interaction_id, "Interaction deleted");
        Ok(map_all(interactions))
    }
}
