//! Post entity - a shared article reference

use chrono::{DateTime, Utc};

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    /// Owning profile id
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub article_url: String,
    pub thumbnail_url: Option<String>,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Post row to insert; `id`, `view_count` and `created_at` are filled by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub article_url: String,
    pub thumbnail_url: Option<String>,
}

/// Explicit ordering for post listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostSort {
    /// `created_at` descending
    Newest,
    /// `view_count` descending
    Popular,
}

/// Options for listing posts. The default is an unordered, unbounded listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostQuery {
    pub sort: Option<PostSort>,
    pub limit: Option<u32>,
}
