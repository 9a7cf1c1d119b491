//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod auth;
pub mod health;
pub mod interactions;
pub mod posts;
