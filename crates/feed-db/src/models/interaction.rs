//! Interaction wire models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::deserialize_id;

/// Row of the `interactions` table
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionModel {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub user_id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub post_id: String,
    pub interaction_type: String,
    pub created_at: DateTime<Utc>,
}

/// Body for inserting an interaction
#[derive(Debug, Serialize)]
pub struct InteractionInsert<'a> {
    pub user_id: &'a str,
    pub post_id: &'a str,
    pub interaction_type: &'a str,
}
