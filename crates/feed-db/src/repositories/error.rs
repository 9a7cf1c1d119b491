//! Error handling utilities for repositories

use feed_core::error::DomainError;

use crate::client::RestError;

/// Postgres SQLSTATE for `unique_violation`
pub const UNIQUE_VIOLATION: &str = "23505";
/// Postgres SQLSTATE for `invalid_text_representation` (e.g. a malformed uuid)
pub const INVALID_TEXT_REPRESENTATION: &str = "22P02";
/// Postgres SQLSTATE for `insufficient_privilege`, raised by row-level security
pub const INSUFFICIENT_PRIVILEGE: &str = "42501";

/// Convert a backend failure to DomainError
pub fn map_rest_error(e: RestError) -> DomainError {
    match e.code() {
        Some(UNIQUE_VIOLATION) => DomainError::DuplicateRow(e.to_string()),
        Some(INSUFFICIENT_PRIVILEGE) => DomainError::PolicyViolation(e.to_string()),
        _ => DomainError::BackendError(e.to_string()),
    }
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: RestError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if e.code() == Some(UNIQUE_VIOLATION) {
        return on_unique();
    }
    map_rest_error(e)
}

/// A malformed id cannot match any row; treat it like an empty result
pub fn empty_on_malformed_id<T>(result: Result<Vec<T>, RestError>) -> Result<Vec<T>, DomainError> {
    match result {
        Ok(rows) => Ok(rows),
        Err(e) if e.code() == Some(INVALID_TEXT_REPRESENTATION) => Ok(Vec::new()),
        Err(e) => Err(map_rest_error(e)),
    }
}

/// Empty insert response, which PostgREST should never produce
pub fn empty_insert(table: &str) -> DomainError {
    DomainError::BackendError(format!("insert into {table} returned no rows"))
}
