//! Invalid category error types.

/// Error for category input outside the fixed story-list set.
///
/// This is a caller usage error, not a runtime failure; it is raised at
/// the command boundary before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display(
    "Invalid category '{}' (expected one of top, new, best, ask, jobs) at line {} in {}",
    input,
    line,
    file
)]
pub struct InvalidCategoryError {
    /// The rejected input text
    pub input: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl InvalidCategoryError {
    /// Create a new InvalidCategoryError for the rejected input.
    ///
    /// # Examples
    ///
    /// ```
    /// use newsbrief_error::InvalidCategoryError;
    ///
    /// let err = InvalidCategoryError::new("weird");
    /// assert_eq!(err.input, "weird");
    /// ```
    #[track_caller]
    pub fn new(input: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            input: input.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
