//! Top-level error wrapper types.

use crate::{ConfigError, InvalidCategoryError, MalformedRecordError, UpstreamError};

/// This is the foundation error enum. Every leaf error in the workspace
/// converts into one of these variants.
///
/// # Examples
///
/// ```
/// use newsbrief_error::{NewsbriefError, InvalidCategoryError};
///
/// let cat_err = InvalidCategoryError::new("frontpage");
/// let err: NewsbriefError = cat_err.into();
/// assert!(format!("{}", err).contains("Invalid category"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum NewsbriefErrorKind {
    /// Upstream HTTP/JSON error
    #[from(UpstreamError)]
    Upstream(UpstreamError),
    /// Story record missing a required field
    #[from(MalformedRecordError)]
    MalformedRecord(MalformedRecordError),
    /// Category outside the fixed story-list set
    #[from(InvalidCategoryError)]
    InvalidCategory(InvalidCategoryError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Newsbrief error with kind discrimination.
///
/// # Examples
///
/// ```
/// use newsbrief_error::{NewsbriefResult, ConfigError};
///
/// fn might_fail() -> NewsbriefResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Newsbrief Error: {}", _0)]
pub struct NewsbriefError(Box<NewsbriefErrorKind>);

impl NewsbriefError {
    /// Create a new error from a kind.
    pub fn new(kind: NewsbriefErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &NewsbriefErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to NewsbriefErrorKind
impl<T> From<T> for NewsbriefError
where
    T: Into<NewsbriefErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for newsbrief operations.
///
/// # Examples
///
/// ```
/// use newsbrief_error::{NewsbriefResult, MalformedRecordError};
///
/// fn render() -> NewsbriefResult<String> {
///     Err(MalformedRecordError::new("story has no title"))?
/// }
/// ```
pub type NewsbriefResult<T> = std::result::Result<T, NewsbriefError>;
