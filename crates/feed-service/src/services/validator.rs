//! Interaction validator
//!
//! Decides whether an interaction request may be inserted. The checks run
//! in a fixed order and stop at the first failure:
//!
//! 1. `profile_id`, `post_id` and `interaction_type` are present
//! 2. `interaction_type` is `like` or `save`
//! 3. the post exists
//! 4. the user exists
//! 5. no interaction with the same (user, post, type) exists

use feed_core::error::DomainError;
use feed_core::value_objects::{InteractionKey, InteractionType, Lookup};
use tracing::{debug, instrument};

use crate::dto::CreateInteractionRequest;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::lookup::LookupService;

/// Outcome of validating an interaction request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The request may be inserted under this key
    Accepted(InteractionKey),
    /// The request must be refused for this reason
    Rejected(String),
}

impl Verdict {
    /// The rejection reason, if any
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(reason) => Some(reason),
        }
    }
}

/// Ordered, short-circuiting interaction checks
pub struct InteractionValidator<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InteractionValidator<'a> {
    /// Create a new InteractionValidator
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Run every check in order
    ///
    /// # Errors
    /// Only backend faults are errors; refusals come back as `Verdict::Rejected`
    #[instrument(skip(self, request))]
    pub async fn validate(&self, request: &CreateInteractionRequest) -> ServiceResult<Verdict> {
        let (user_id, post_id, raw_type) = match required_fields(request) {
            Ok(fields) => fields,
            Err(reason) => return Ok(Verdict::Rejected(reason)),
        };

        let interaction_type = match raw_type.parse::<InteractionType>() {
            Ok(interaction_type) => interaction_type,
            Err(e) => {
                return Ok(Verdict::Rejected(
                    DomainError::InvalidInteractionType(e.0).to_string(),
                ))
            }
        };

        let lookups = LookupService::new(self.ctx);

        if let Lookup::Missing(reason) = lookups.post_exists(post_id).await? {
            return Ok(Verdict::Rejected(reason));
        }

        if let Lookup::Missing(reason) = lookups.user_exists(user_id).await? {
            return Ok(Verdict::Rejected(reason));
        }

        let key = InteractionKey::new(user_id, post_id, interaction_type);
        if lookups.interaction_exists(&key).await?.is_found() {
            return Ok(Verdict::Rejected(DomainError::InteractionAlreadyExists.to_string()));
        }

        debug!(?key, "Interaction accepted");
        Ok(Verdict::Accepted(key))
    }
}

/// Presence check in field order, yielding the missing-field message on failure
fn required_fields(request: &CreateInteractionRequest) -> Result<(&str, &str, &str), String> {
    fn field<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str, String> {
        value.ok_or_else(|| ServiceError::MissingField(name).to_string())
    }

    Ok((
        field(request.profile_id(), "profile_id")?,
        field(request.post_id.as_deref(), "post_id")?,
        field(request.interaction_type.as_deref(), "interaction_type")?,
    ))
}
