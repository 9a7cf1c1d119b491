//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("No interactions found for post: {0}")]
    NoInteractions(String),

    /// A caller-scoped mutation touched zero rows. Row-level security hides
    /// rows the caller does not own, so a missing row and a foreign row look
    /// the same from here.
    #[error("{0} not found or unauthorized")]
    NotFoundOrUnauthorized(&'static str),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid interaction type: '{0}' (expected 'like' or 'save')")]
    InvalidInteractionType(String),

    // =========================================================================
    // Authentication Errors
    // =========================================================================
    #[error("Invalid login credentials")]
    InvalidCredentials,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Sign up failed: {0}")]
    SignUpRejected(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Row-level security policy violation: {0}")]
    PolicyViolation(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Interaction already exists")]
    InteractionAlreadyExists,

    #[error("Duplicate row: {0}")]
    DuplicateRow(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Backend error: {0}")]
    BackendError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::NoInteractions(_) => "NO_INTERACTIONS",
            Self::NotFoundOrUnauthorized(_) => "NOT_FOUND_OR_UNAUTHORIZED",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidInteractionType(_) => "INVALID_INTERACTION_TYPE",

            // Authentication
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::SignUpRejected(_) => "SIGNUP_FAILED",

            // Authorization
            Self::PolicyViolation(_) => "POLICY_VIOLATION",

            // Conflict
            Self::InteractionAlreadyExists => "INTERACTION_EXISTS",
            Self::DuplicateRow(_) => "DUPLICATE_ROW",

            // Infrastructure
            Self::BackendError(_) => "BACKEND_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PostNotFound(_) | Self::UserNotFound(_) | Self::NoInteractions(_) | Self::NotFoundOrUnauthorized(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidInteractionType(_) | Self::SignUpRejected(_)
        )
    }

    /// Check if this is an authentication error
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::InvalidCredentials | Self::InvalidToken)
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::PolicyViolation(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::InteractionAlreadyExists | Self::DuplicateRow(_))
    }
}
