//! # feed-core
//!
//! Domain layer for the article feed: entities, value objects, backend traits
//! and domain errors. Nothing in here knows about HTTP or the hosted backend.

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    AuthIdentity, AuthSession, Interaction, InteractionCounts, NewPost, NewProfile, Post,
    PostQuery, PostSort, Profile, SignUpOutcome,
};
pub use error::DomainError;
pub use traits::{
    BackendHealth, IdentityProvider, InteractionRepository, PostRepository, ProfileRepository,
    RepoResult,
};
pub use value_objects::{Caller, InteractionKey, InteractionType, Lookup, ParseInteractionTypeError};
