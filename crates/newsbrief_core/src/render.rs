//! Story line rendering.

use crate::StoryRecord;
use newsbrief_error::MalformedRecordError;

/// Fixed header line for every digest, trailing newline included.
pub const DIGEST_HEADER: &str = "Stories from [HackerNews](https://news.ycombinator.com)\n";

/// Render one story record as a one-line markdown link.
///
/// Produces `[<title>](<link>)`, where `<link>` is the record's url or
/// the empty string when the story has none.
///
/// # Errors
///
/// Returns [`MalformedRecordError`] when the record has no title.
///
/// # Examples
///
/// ```
/// use newsbrief_core::{StoryRecord, render_story};
///
/// let record = StoryRecord::builder()
///     .title("A".to_string())
///     .url("http://a".to_string())
///     .build()
///     .unwrap();
/// assert_eq!(render_story(&record).unwrap(), "[A](http://a)");
/// ```
pub fn render_story(record: &StoryRecord) -> Result<String, MalformedRecordError> {
    let title = record.title().as_deref().ok_or_else(|| match record.id() {
        Some(id) => MalformedRecordError::new(format!("story {id} has no title")),
        None => MalformedRecordError::new("story has no title"),
    })?;
    let url = record.url().as_deref().unwrap_or("");
    Ok(format!("[{title}]({url})"))
}
