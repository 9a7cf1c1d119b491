//! Caller - the authenticated identity behind a mutating request

use std::fmt;

/// An authenticated caller.
///
/// Carries the verified subject id together with the bearer token it was
/// verified from, so that backend requests made on the caller's behalf are
/// evaluated by row-level security with the caller's own credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Caller {
    user_id: String,
    access_token: String,
}

impl Caller {
    /// Create a new Caller
    pub fn new(user_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            access_token: access_token.into(),
        }
    }

    /// Subject id of the caller (equals the profile id)
    #[inline]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Bearer token to forward to the backend
    #[inline]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

// Keep tokens out of logs
impl fmt::Debug for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Caller")
            .field("user_id", &self.user_id)
            .finish_non_exhaustive()
    }
}
