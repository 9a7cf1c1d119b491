//! Response DTOs for API endpoints
//!
//! Row-shaped responses mirror the backend's column names so that clients
//! see the same objects they would get from the table.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Post Responses
// ============================================================================

/// A `posts` row
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub article_url: String,
    pub thumbnail_url: Option<String>,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Engagement counts for one post
#[derive(Debug, Clone, Serialize)]
pub struct PostStatsResponse {
    pub post_id: String,
    pub likes: u64,
    pub saves: u64,
}

// ============================================================================
// Interaction Responses
// ============================================================================

/// An `interactions` row
#[derive(Debug, Clone, Serialize)]
pub struct InteractionResponse {
    pub id: String,
    pub user_id: String,
    pub post_id: String,
    pub interaction_type: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// A `profiles` row
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub email: String,
    pub username: String,
    pub avatar_url: Option<String>,
}

/// Identity issued by the auth service
#[derive(Debug, Clone, Serialize)]
pub struct IdentityResponse {
    pub id: String,
    pub email: Option<String>,
}

/// Session material, passed through opaquely
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

/// Result of `POST /signup`
#[derive(Debug, Clone, Serialize)]
pub struct SignUpResponse {
    pub identity: IdentityResponse,
    pub profile: ProfileResponse,
    /// Present when the backend signs the user in right away
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionResponse>,
}

/// Result of `POST /login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub identity: IdentityResponse,
    pub session: SessionResponse,
    pub access_token: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Status of each upstream dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub backend: String,
}

impl ReadinessResponse {
    pub fn ready(backend_healthy: bool) -> Self {
        Self {
            status: if backend_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                backend: if backend_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
