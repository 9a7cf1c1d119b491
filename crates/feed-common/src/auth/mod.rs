//! Access-token verification

mod jwt;

pub use jwt::{Claims, TokenVerifier, AUTHENTICATED_AUDIENCE};
