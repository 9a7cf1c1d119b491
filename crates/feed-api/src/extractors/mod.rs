//! Axum extractors for request handling
//!
//! Custom extractors for authentication, JSON bodies, query strings and
//! path parameters. All of them reject with [`ApiError`](crate::response::ApiError).

mod auth;
mod json;
mod path;
mod query;

pub use auth::AuthUser;
pub use path::{IdPath, InteractionRoutePath, PostIdPath};
pub use query::ApiQuery;
pub use json::JsonBody;
