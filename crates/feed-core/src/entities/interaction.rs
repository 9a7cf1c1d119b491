//! Interaction entity - a like or save between a profile and a post

use chrono::{DateTime, Utc};

use crate::value_objects::{InteractionKey, InteractionType};

/// Interaction entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    pub id: String,
    pub user_id: String,
    pub post_id: String,
    pub interaction_type: InteractionType,
    pub created_at: DateTime<Utc>,
}

impl Interaction {
    /// The (user, post, type) key this interaction occupies
    pub fn key(&self) -> InteractionKey {
        InteractionKey::new(&self.user_id, &self.post_id, self.interaction_type)
    }
}

/// Aggregated interaction counts for one post
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionCounts {
    pub likes: u64,
    pub saves: u64,
}

impl InteractionCounts {
    /// Create a new InteractionCounts
    pub fn new(likes: u64, saves: u64) -> Self {
        Self { likes, saves }
    }

    /// Count for one interaction type
    pub fn get(&self, interaction_type: InteractionType) -> u64 {
        match interaction_type {
            InteractionType::Like => self.likes,
            InteractionType::Save => self.saves,
        }
    }
}
