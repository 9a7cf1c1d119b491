//! Raw backend failures, before they are mapped to domain errors

use serde::Deserialize;

/// Failure talking to the backend
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Connection, timeout or body decoding failure
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("{message}")]
    Status {
        status: u16,
        /// Postgres SQLSTATE from PostgREST, or the auth service's error code
        code: Option<String>,
        message: String,
    },

    /// A success response that could not be interpreted
    #[error("unexpected backend response: {0}")]
    Unexpected(String),
}

impl RestError {
    /// HTTP status returned by the backend, if it answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Unexpected(_) => None,
        }
    }

    /// Backend error code, if any
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Status { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Build a status error from a response body
    pub(crate) fn from_body(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorBody>(body).ok();
        let code = parsed.as_ref().and_then(ErrorBody::code);
        let message = parsed
            .and_then(ErrorBody::message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("HTTP {status}"));

        Self::Status {
            status,
            code,
            message,
        }
    }
}

/// Error payload shapes used by PostgREST and the auth service.
///
/// PostgREST sends `{code, message, details, hint}`. The auth service sends
/// either `{error, error_description}` or `{code, error_code, msg}` where
/// `code` is the numeric HTTP status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<serde_json::Value>,
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

impl ErrorBody {
    fn code(&self) -> Option<String> {
        if let Some(code) = &self.error_code {
            return Some(code.clone());
        }
        match &self.code {
            Some(serde_json::Value::String(code)) => Some(code.clone()),
            _ => self.error.clone(),
        }
    }

    fn message(self) -> Option<String> {
        self.message
            .or(self.msg)
            .or(self.error_description)
            .or(self.error)
    }
}
