//! # feed-db
//!
//! Backend layer implementing the repository traits against a hosted
//! Postgres service: PostgREST for table access and the auth service for
//! identities and sessions.
//!
//! ## Overview
//!
//! - One shared [`BackendClient`] holding the HTTP client and project keys
//! - Wire models with serde derives
//! - Model to entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use feed_common::AppConfig;
//! use feed_db::{create_client, RestPostRepository};
//! use feed_core::traits::PostRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let client = create_client(&config.backend)?;
//!     let posts = RestPostRepository::new(client);
//!
//!     let all = posts.list(Default::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod mappers;
pub mod models;
pub mod repositories;

// Re-export commonly used types
pub use client::{create_client, BackendClient, Credentials, RestError, RestQuery};
pub use repositories::{
    GoTrueIdentityProvider, RestBackendHealth, RestInteractionRepository, RestPostRepository,
    RestProfileRepository,
};
