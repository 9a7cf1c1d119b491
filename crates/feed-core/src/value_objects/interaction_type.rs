//! Interaction type and composite interaction key

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of interaction a profile can have with a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionType {
    Like,
    Save,
}

impl InteractionType {
    /// All accepted interaction types
    pub const ALL: [Self; 2] = [Self::Like, Self::Save];

    /// Wire name as stored in the `interaction_type` column
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Save => "save",
        }
    }
}

/// Error when parsing an interaction type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid interaction type: {0}")]
pub struct ParseInteractionTypeError(pub String);

impl FromStr for InteractionType {
    type Err = ParseInteractionTypeError;

    // Exact match only; the column stores lowercase values
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Self::Like),
            "save" => Ok(Self::Save),
            other => Err(ParseInteractionTypeError(other.to_string())),
        }
    }
}

impl fmt::Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composite key identifying at most one interaction
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InteractionKey {
    pub user_id: String,
    pub post_id: String,
    pub interaction_type: InteractionType,
}

impl InteractionKey {
    pub fn new(
        user_id: impl Into<String>,
        post_id: impl Into<String>,
        interaction_type: InteractionType,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            post_id: post_id.into(),
            interaction_type,
        }
    }
}
