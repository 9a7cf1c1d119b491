//! Presence checks for request fields

use super::error::{ServiceError, ServiceResult};

/// Take a required field, or report it by name
pub(crate) fn require(value: Option<String>, field: &'static str) -> ServiceResult<String> {
    value.ok_or(ServiceError::MissingField(field))
}

/// Report the first absent field, in the order given
pub(crate) fn require_present(fields: &[(&Option<String>, &'static str)]) -> ServiceResult<()> {
    match fields.iter().find(|(value, _)| value.is_none()) {
        Some((_, field)) => Err(ServiceError::MissingField(field)),
        None => Ok(()),
    }
}

/// Flatten `validator` output into one message
pub(crate) fn validation_message(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map_or_else(|| format!("{field} is invalid"), ToString::to_string)
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}
