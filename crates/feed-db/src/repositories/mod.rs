//! Repository implementations
//!
//! PostgREST and auth-service implementations of the traits defined in
//! feed-core. Each repository handles one table or backend service.

mod auth;
mod error;
mod health;
mod interaction;
mod post;
mod profile;

pub use auth::GoTrueIdentityProvider;
pub use health::RestBackendHealth;
pub use interaction::RestInteractionRepository;
pub use post::RestPostRepository;
pub use profile::RestProfileRepository;
