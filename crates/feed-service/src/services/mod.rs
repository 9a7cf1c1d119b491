//! Business logic services
//!
//! Services borrow a [`ServiceContext`] and orchestrate field checks,
//! existence lookups and backend calls for one resource each.

pub mod auth;
pub mod context;
pub mod error;
mod fields;
pub mod health;
pub mod interaction;
pub mod lookup;
pub mod post;
pub mod validator;

// Re-export all services for convenience
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use health::HealthService;
pub use interaction::InteractionService;
pub use lookup::LookupService;
pub use post::PostService;
pub use validator::{InteractionValidator, Verdict};
