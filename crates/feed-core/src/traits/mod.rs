//! Backend traits (ports)

mod repositories;

pub use repositories::{
    BackendHealth, IdentityProvider, InteractionRepository, PostRepository, ProfileRepository,
    RepoResult,
};
