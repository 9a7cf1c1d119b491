//! Shared HTTP client for the hosted backend

mod error;
mod query;
mod rest;

pub use error::RestError;
pub use query::{parse_content_range_total, Order, RestQuery};
pub use rest::{create_client, BackendClient, Credentials, COUNT_EXACT, RETURN_REPRESENTATION};
