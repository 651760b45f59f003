//! Error handling module for the content store.
//!
//! Provides centralized error types with stable error codes. Per-record
//! decode failures are not errors; they are dropped and counted in the
//! load report.

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const SOURCE_UNAVAILABLE: &str = "SOURCE_UNAVAILABLE";
    pub const MALFORMED_PAYLOAD: &str = "MALFORMED_PAYLOAD";
}

/// Content load error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// The source failed to produce a payload at all.
    SourceUnavailable(String),
    /// The payload arrived but its shape is unusable (e.g. a section that
    /// is not an array).
    MalformedPayload(String),
}

impl ContentError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            ContentError::SourceUnavailable(_) => codes::SOURCE_UNAVAILABLE,
            ContentError::MalformedPayload(_) => codes::MALFORMED_PAYLOAD,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> &str {
        match self {
            ContentError::SourceUnavailable(msg) => msg,
            ContentError::MalformedPayload(msg) => msg,
        }
    }
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for ContentError {}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        ContentError::MalformedPayload(format!("JSON error: {}", err))
    }
}
