//! Upstream API error types.

/// Specific upstream failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum UpstreamErrorKind {
    /// The HTTP request could not be sent or completed.
    #[display("Request failed: {}", _0)]
    Request(String),

    /// The upstream returned a non-success status code.
    #[display("Unexpected status {} from {}", status, url)]
    Status {
        /// HTTP status code returned by the upstream
        status: u16,
        /// URL of the failed request
        url: String,
    },

    /// The response body could not be decoded as the expected JSON shape.
    #[display("Failed to decode response: {}", _0)]
    Decode(String),
}

/// Upstream error with location tracking.
///
/// Raised for HTTP transport failures, non-success statuses, and JSON
/// decoding failures against the story API.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Upstream Error: {} at line {} in {}", kind, line, file)]
pub struct UpstreamError {
    kind: UpstreamErrorKind,
    line: u32,
    file: &'static str,
}

impl UpstreamError {
    /// Create a new upstream error with caller location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use newsbrief_error::{UpstreamError, UpstreamErrorKind};
    ///
    /// let err = UpstreamError::new(UpstreamErrorKind::Decode("not a JSON array".to_string()));
    /// assert!(format!("{}", err).contains("decode"));
    /// ```
    #[track_caller]
    pub fn new(kind: UpstreamErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &UpstreamErrorKind {
        &self.kind
    }
}
