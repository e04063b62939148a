//! Malformed story record error types.

/// Error for story records missing required fields.
///
/// The item endpoint treats nearly every field as optional; a record
/// without a title cannot be rendered and is reported with this error.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Malformed Record: {} at line {} in {}", message, line, file)]
pub struct MalformedRecordError {
    /// Description of the malformed record
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl MalformedRecordError {
    /// Create a new MalformedRecordError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use newsbrief_error::MalformedRecordError;
    ///
    /// let err = MalformedRecordError::new("story 42 has no title");
    /// assert!(err.message.contains("no title"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
