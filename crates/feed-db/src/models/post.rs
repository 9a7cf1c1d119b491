//! Post wire models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::deserialize_id;

/// Row of the `posts` table
#[derive(Debug, Clone, Deserialize)]
pub struct PostModel {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    pub article_url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub view_count: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Body for inserting a post
#[derive(Debug, Serialize)]
pub struct PostInsert<'a> {
    pub user_id: &'a str,
    pub title: &'a str,
    pub content: &'a str,
    pub article_url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<&'a str>,
}

/// Body for renaming a post
#[derive(Debug, Serialize)]
pub struct PostTitleUpdate<'a> {
    pub title: &'a str,
}

/// Row of `posts?select=profiles(username)`
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorModel {
    #[serde(default)]
    pub profiles: Option<UsernameModel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsernameModel {
    pub username: String,
}
