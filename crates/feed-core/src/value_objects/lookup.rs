//! Lookup - outcome of an existence check

/// Result of looking up a single row.
///
/// A missing row is an ordinary outcome carrying a human-readable reason,
/// not an error. Backend faults travel separately as `DomainError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    Missing(String),
}

impl<T> Lookup<T> {
    /// Build a lookup from an optional row, using `reason` when absent
    pub fn from_option(row: Option<T>, reason: impl FnOnce() -> String) -> Self {
        match row {
            Some(value) => Self::Found(value),
            None => Self::Missing(reason()),
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The found record, if any
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::Missing(_) => None,
        }
    }

    /// The not-found reason, if any
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Found(_) => None,
            Self::Missing(reason) => Some(reason),
        }
    }
}
