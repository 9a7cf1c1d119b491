//! Profile wire model

use serde::{Deserialize, Serialize};

use super::id::deserialize_id;

/// Row of the `profiles` table
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileModel {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    pub username: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Body for inserting a profile
#[derive(Debug, Serialize)]
pub struct ProfileInsert<'a> {
    pub id: &'a str,
    pub email: &'a str,
    pub username: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<&'a str>,
}
