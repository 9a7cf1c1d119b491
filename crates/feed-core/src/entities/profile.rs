//! Profile entity - application-level user record

/// Profile entity, one per authenticated identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Same value as the auth subject id
    pub id: String,
    pub email: String,
    pub username: String,
    pub avatar_url: Option<String>,
}

/// Profile row to insert at sign-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfile {
    pub id: String,
    pub email: String,
    pub username: String,
    pub avatar_url: Option<String>,
}

impl NewProfile {
    /// Create a profile row without an avatar
    pub fn new(id: impl Into<String>, email: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            username: username.into(),
            avatar_url: None,
        }
    }
}
