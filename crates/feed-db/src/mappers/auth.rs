//! Auth payload -> entity mappers

use feed_core::entities::{AuthIdentity, AuthSession, SignUpOutcome};

use crate::models::{GoTrueSession, GoTrueUser, SignUpReply};

impl From<GoTrueUser> for AuthIdentity {
    fn from(user: GoTrueUser) -> Self {
        AuthIdentity {
            id: user.id,
            email: user.email,
        }
    }
}

impl From<GoTrueSession> for AuthSession {
    fn from(session: GoTrueSession) -> Self {
        AuthSession {
            access_token: session.access_token,
            refresh_token: session.refresh_token,
            token_type: session.token_type,
            expires_in: session.expires_in,
            expires_at: session.expires_at,
            identity: session.user.into(),
        }
    }
}

impl From<SignUpReply> for SignUpOutcome {
    fn from(reply: SignUpReply) -> Self {
        match reply {
            SignUpReply::Session(session) => {
                let session = AuthSession::from(session);
                SignUpOutcome {
                    identity: session.identity.clone(),
                    session: Some(session),
                }
            }
            SignUpReply::User(user) => SignUpOutcome {
                identity: user.into(),
                session: None,
            },
        }
    }
}
