//! Domain entities - core business objects

mod auth;
mod interaction;
mod post;
mod profile;

pub use auth::{AuthIdentity, AuthSession, SignUpOutcome};
pub use interaction::{Interaction, InteractionCounts};
pub use post::{NewPost, Post, PostQuery, PostSort};
pub use profile::{NewProfile, Profile};
