//! Errors surfaced by the suggestion board: storage failures and rejected
//! form input.
//!
//! None of these abort the page: the suggestion controller logs them and
//! falls back to an in-memory list.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("stored submissions are corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

impl StoreError {
    /// Short machine-readable code for log lines.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unavailable(_) => "E_STORE_UNAVAILABLE",
            Self::Read(_) => "E_STORE_READ",
            Self::Write(_) => "E_STORE_WRITE",
            Self::Corrupt(_) => "E_STORE_CORRUPT",
        }
    }
}

/// Why a suggestion form submission was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("required field is empty: {0}")]
    MissingField(&'static str),
}
