//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use feed_core::entities::{AuthIdentity, AuthSession, Interaction, Post, Profile};

use super::responses::{
    IdentityResponse, InteractionResponse, PostResponse, ProfileResponse, SessionResponse,
};

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            title: post.title,
            content: post.content,
            article_url: post.article_url,
            thumbnail_url: post.thumbnail_url,
            view_count: post.view_count,
            created_at: post.created_at,
        }
    }
}

impl From<Interaction> for InteractionResponse {
    fn from(interaction: Interaction) -> Self {
        Self {
            id: interaction.id,
            user_id: interaction.user_id,
            post_id: interaction.post_id,
            interaction_type: interaction.interaction_type.as_str().to_string(),
            created_at: interaction.created_at,
        }
    }
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id,
            email: profile.email,
            username: profile.username,
            avatar_url: profile.avatar_url,
        }
    }
}

impl From<AuthIdentity> for IdentityResponse {
    fn from(identity: AuthIdentity) -> Self {
        Self {
            id: identity.id,
            email: identity.email,
        }
    }
}

impl From<&AuthSession> for SessionResponse {
    fn from(session: &AuthSession) -> Self {
        Self {
            access_token: session.access_token.clone(),
            refresh_token: session.refresh_token.clone(),
            token_type: session.token_type.clone(),
            expires_in: session.expires_in,
            expires_at: session.expires_at,
        }
    }
}

/// Map a batch of entities to responses
pub fn map_all<E, R: From<E>>(items: Vec<E>) -> Vec<R> {
    items.into_iter().map(R::from).collect()
}
