//! Story list categories.

use newsbrief_error::InvalidCategoryError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The kinds of story lists the upstream API serves.
///
/// Each variant maps to a distinct list endpoint name; `Display` renders
/// the endpoint name so URLs can be built directly from a category.
///
/// # Examples
///
/// ```
/// use newsbrief_core::Category;
///
/// assert_eq!(Category::Top.to_string(), "topstories");
/// assert_eq!(Category::parse("ask").unwrap(), Category::Ask);
/// assert!(Category::parse("frontpage").is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Category {
    /// Front-page top stories
    #[default]
    #[strum(to_string = "topstories", serialize = "top")]
    Top,
    /// Newest submissions
    #[strum(to_string = "newstories", serialize = "new")]
    New,
    /// Best-ranked stories
    #[strum(to_string = "beststories", serialize = "best")]
    Best,
    /// Ask HN posts
    #[strum(to_string = "askstories", serialize = "ask")]
    Ask,
    /// Job postings
    #[strum(to_string = "jobstories", serialize = "jobs")]
    Jobs,
}

impl Category {
    /// Parse free-text input into a category.
    ///
    /// Accepts the short name (`"top"`) or the endpoint name
    /// (`"topstories"`), case-insensitively. Anything else is a usage
    /// error reported with [`InvalidCategoryError`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCategoryError`] carrying the rejected input.
    pub fn parse(input: &str) -> Result<Self, InvalidCategoryError> {
        Self::from_str(input.trim()).map_err(|_| InvalidCategoryError::new(input))
    }

    /// All categories, in display order.
    pub fn all() -> Vec<Self> {
        use strum::IntoEnumIterator;
        Self::iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_endpoint_name() {
        assert_eq!(Category::Top.to_string(), "topstories");
        assert_eq!(Category::New.to_string(), "newstories");
        assert_eq!(Category::Best.to_string(), "beststories");
        assert_eq!(Category::Ask.to_string(), "askstories");
        assert_eq!(Category::Jobs.to_string(), "jobstories");
    }

    #[test]
    fn parses_short_and_endpoint_names() {
        assert_eq!(Category::parse("top").unwrap(), Category::Top);
        assert_eq!(Category::parse("TOP").unwrap(), Category::Top);
        assert_eq!(Category::parse("jobstories").unwrap(), Category::Jobs);
        assert_eq!(Category::parse(" best ").unwrap(), Category::Best);
    }

    #[test]
    fn rejects_unknown_input() {
        let err = Category::parse("frontpage").unwrap_err();
        assert_eq!(err.input, "frontpage");
    }

    #[test]
    fn default_is_top() {
        assert_eq!(Category::default(), Category::Top);
    }

    #[test]
    fn all_lists_five_categories() {
        assert_eq!(Category::all().len(), 5);
    }
}
