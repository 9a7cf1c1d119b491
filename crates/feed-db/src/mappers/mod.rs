//! Model to entity mappers
//!
//! - `From<Model> for Entity`: convert backend rows to domain objects
//! - `*Insert` constructors: borrow entity data for request bodies

mod auth;
mod interaction;
mod post;
mod profile;

pub(crate) use interaction::interactions_from_rows;
