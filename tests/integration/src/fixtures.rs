//! Test fixtures and data generators
//!
//! Request bodies the tests send and the response shapes they read back.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::helpers::{assert_json, TestServer};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// Requests
// ============================================================================

/// Sign-up request
#[derive(Debug, Clone, Serialize)]
pub struct SignUpBody {
    pub email: String,
    pub password: String,
    pub username: String,
}

impl SignUpBody {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("reader{suffix}@example.com"),
            password: "TestPass123!".to_string(),
            username: format!("reader{suffix}"),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

impl LoginBody {
    pub fn from_sign_up(body: &SignUpBody) -> Self {
        Self {
            email: body.email.clone(),
            password: body.password.clone(),
        }
    }
}

/// Create-post request
#[derive(Debug, Serialize)]
pub struct NewPostBody {
    pub title: String,
    pub content: String,
    pub article_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl NewPostBody {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Article {suffix}"),
            content: "Worth a read".to_string(),
            article_url: format!("https://news.example.com/articles/{suffix}"),
            thumbnail_url: None,
        }
    }
}

/// Create-interaction request
pub fn interaction_body(user_id: &str, post_id: &str, interaction_type: &str) -> serde_json::Value {
    serde_json::json!({
        "user_id": user_id,
        "post_id": post_id,
        "interaction_type": interaction_type,
    })
}

// ============================================================================
// Responses
// ============================================================================

/// `posts` row
#[derive(Debug, Deserialize)]
pub struct PostRow {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub article_url: String,
    pub thumbnail_url: Option<String>,
    pub view_count: i64,
    pub created_at: String,
}

/// `interactions` row
#[derive(Debug, Deserialize)]
pub struct InteractionRow {
    pub id: String,
    pub user_id: String,
    pub post_id: String,
    pub interaction_type: String,
}

/// Post engagement counts
#[derive(Debug, Deserialize)]
pub struct StatsReply {
    pub post_id: String,
    pub likes: u64,
    pub saves: u64,
}

#[derive(Debug, Deserialize)]
pub struct IdentityReply {
    pub id: String,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProfileReply {
    pub id: String,
    pub email: String,
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct SessionReply {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

/// `POST /signup` response
#[derive(Debug, Deserialize)]
pub struct SignUpReply {
    pub identity: IdentityReply,
    pub profile: ProfileReply,
    pub session: Option<SessionReply>,
}

/// `POST /login` response
#[derive(Debug, Deserialize)]
pub struct LoginReply {
    pub identity: IdentityReply,
    pub session: SessionReply,
    pub access_token: String,
}

/// Error response body
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn message(&self) -> &str {
        &self.error.message
    }

    pub fn code(&self) -> &str {
        &self.error.code
    }
}

// ============================================================================
// Scenarios
// ============================================================================

/// A signed-up, logged-in user
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: String,
    pub username: String,
    pub token: String,
}

/// Sign up a fresh user through the API and log them in
pub async fn signed_in_user(server: &TestServer) -> Result<TestUser> {
    let body = SignUpBody::unique();
    let response = server.post("/signup", &body).await?;
    let sign_up: SignUpReply = assert_json(response, StatusCode::CREATED).await?;

    let response = server.post("/login", &LoginBody::from_sign_up(&body)).await?;
    let login: LoginReply = assert_json(response, StatusCode::OK).await?;

    Ok(TestUser {
        id: sign_up.identity.id,
        username: sign_up.profile.username,
        token: login.access_token,
    })
}

/// Create a post as `user` through the API
pub async fn create_post(server: &TestServer, user: &TestUser) -> Result<PostRow> {
    let response = server.post_auth("/posts", &user.token, &NewPostBody::unique()).await?;
    let mut rows: Vec<PostRow> = assert_json(response, StatusCode::CREATED).await?;
    rows.pop().ok_or_else(|| anyhow::anyhow!("insert returned no rows"))
}
