//! Story record types.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Opaque identifier returned by the list endpoints.
pub type StoryId = u64;

/// Detail data for one story, as served by the item endpoint.
///
/// The upstream treats nearly every field as optional, so presence is
/// modeled explicitly rather than through a loosely typed field bag.
/// `title` is semantically required for rendering; `url` is genuinely
/// optional since text-only posts carry none.
///
/// # Examples
///
/// ```
/// use newsbrief_core::StoryRecord;
///
/// let record = StoryRecord::builder()
///     .title("Show HN: a thing".to_string())
///     .url("https://example.com".to_string())
///     .build()
///     .unwrap();
/// assert_eq!(record.title().as_deref(), Some("Show HN: a thing"));
/// ```
#[derive(
    Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(default, setter(into, strip_option))]
pub struct StoryRecord {
    /// Story identifier (optional in practice; the list endpoint is authoritative)
    #[serde(default)]
    id: Option<u64>,
    /// Story title (required for rendering)
    #[serde(default)]
    title: Option<String>,
    /// External link (absent for text-only posts)
    #[serde(default)]
    url: Option<String>,
    /// Submitter username
    #[serde(default)]
    by: Option<String>,
    /// Current score
    #[serde(default)]
    score: Option<i64>,
    /// Submission time (Unix seconds)
    #[serde(default)]
    time: Option<i64>,
    /// Comment count
    #[serde(default)]
    descendants: Option<i64>,
    /// Item type ("story", "job", ...)
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

impl StoryRecord {
    /// Start building a story record.
    pub fn builder() -> StoryRecordBuilder {
        StoryRecordBuilder::default()
    }
}
