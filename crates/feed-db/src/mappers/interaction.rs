//! Interaction entity <-> model mapper

use feed_core::entities::Interaction;
use feed_core::error::DomainError;
use feed_core::value_objects::{InteractionKey, InteractionType};

use crate::models::{InteractionInsert, InteractionModel};

/// Rows with an unknown `interaction_type` are a backend inconsistency
impl TryFrom<InteractionModel> for Interaction {
    type Error = DomainError;

    fn try_from(model: InteractionModel) -> Result<Self, Self::Error> {
        let interaction_type = model
            .interaction_type
            .parse::<InteractionType>()
            .map_err(|e| DomainError::BackendError(e.to_string()))?;

        Ok(Interaction {
            id: model.id,
            user_id: model.user_id,
            post_id: model.post_id,
            interaction_type,
            created_at: model.created_at,
        })
    }
}

impl<'a> From<&'a InteractionKey> for InteractionInsert<'a> {
    fn from(key: &'a InteractionKey) -> Self {
        Self {
            user_id: &key.user_id,
            post_id: &key.post_id,
            interaction_type: key.interaction_type.as_str(),
        }
    }
}

/// Convert a batch of rows, failing on the first bad one
pub(crate) fn interactions_from_rows(rows: Vec<InteractionModel>) -> Result<Vec<Interaction>, DomainError> {
    rows.into_iter().map(Interaction::try_from).collect()
}
