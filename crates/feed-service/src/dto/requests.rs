//! Request DTOs for API endpoints
//!
//! Required fields are `Option`s so that an absent field can be reported by
//! name, in a fixed order, instead of as a generic deserialization failure.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Post Requests
// ============================================================================

/// Body of `POST /posts`. The owner is always the caller, so any `user_id`
/// in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreatePostRequest {
    pub title: Option<String>,

    pub content: Option<String>,

    #[validate(url(message = "article_url must be a valid URL"))]
    pub article_url: Option<String>,

    #[validate(url(message = "thumbnail_url must be a valid URL"))]
    pub thumbnail_url: Option<String>,
}

/// Query of `PUT /posts/{post_id}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTitleQuery {
    pub updated_title: Option<String>,
}

/// Query of `GET /posts`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ListPostsQuery {
    /// `newest` or `popular`; unordered when absent
    pub sort: Option<String>,

    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<u32>,
}

// ============================================================================
// Interaction Requests
// ============================================================================

/// Body of `POST /interactions`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateInteractionRequest {
    /// Profile id of the interacting user
    pub profile_id: Option<String>,

    /// Alternative name for `profile_id`; ignored when both are sent
    pub user_id: Option<String>,

    pub post_id: Option<String>,

    /// Kept as free text so an unknown value can be rejected with its name
    pub interaction_type: Option<String>,
}

impl CreateInteractionRequest {
    /// The interacting profile, preferring `profile_id` over `user_id`
    pub fn profile_id(&self) -> Option<&str> {
        self.profile_id.as_deref().or(self.user_id.as_deref())
    }
}

// ============================================================================
// Auth Requests
// ============================================================================

/// Body of `POST /signup`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub password: Option<String>,

    #[validate(length(min = 1, max = 32, message = "Username must be 1-32 characters"))]
    pub username: Option<String>,
}

/// Body of `POST /login`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}
