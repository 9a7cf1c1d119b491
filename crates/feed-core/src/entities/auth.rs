//! Auth entities - identities and sessions issued by the auth backend

/// An identity known to the auth backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthIdentity {
    /// Subject id; profiles use the same value as their primary key
    pub id: String,
    pub email: Option<String>,
}

/// A session returned by a successful password grant
#[derive(Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub expires_at: Option<i64>,
    pub identity: AuthIdentity,
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

/// Result of creating an identity.
///
/// The session is absent when the backend requires email confirmation
/// before issuing tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpOutcome {
    pub identity: AuthIdentity,
    pub session: Option<AuthSession>,
}
