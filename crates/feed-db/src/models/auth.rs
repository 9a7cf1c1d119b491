//! Auth-service payloads

use serde::{Deserialize, Serialize};

/// User object returned by the auth service
#[derive(Debug, Clone, Deserialize)]
pub struct GoTrueUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Session returned by a password grant (and by sign-up when no
/// confirmation is required)
#[derive(Debug, Clone, Deserialize)]
pub struct GoTrueSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: i64,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: GoTrueUser,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Sign-up answer: a full session, or only the user when email
/// confirmation is pending
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SignUpReply {
    Session(GoTrueSession),
    User(GoTrueUser),
}

/// Body for `POST /auth/v1/signup`
#[derive(Debug, Serialize)]
pub struct SignUpBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub data: SignUpMetadata<'a>,
}

/// User metadata stored with the identity
#[derive(Debug, Serialize)]
pub struct SignUpMetadata<'a> {
    pub username: &'a str,
}

/// Body for `POST /auth/v1/token?grant_type=password`
#[derive(Debug, Serialize)]
pub struct PasswordGrant<'a> {
    pub email: &'a str,
    pub password: &'a str,
}
