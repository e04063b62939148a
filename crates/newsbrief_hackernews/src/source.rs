//! Story source trait.

use async_trait::async_trait;
use newsbrief_core::{Category, StoryId, StoryRecord};
use newsbrief_error::UpstreamError;

/// Read-only access to a story listing service.
///
/// [`crate::HackerNewsClient`] is the production implementation; tests
/// substitute an in-memory mock.
#[async_trait]
pub trait StorySource: Send + Sync {
    /// Fetch the ordered id list for a category, truncated to `limit`
    /// entries when present.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] if the HTTP call returns a non-success
    /// status or the body is not a JSON array of integers.
    async fn fetch_story_ids(
        &self,
        category: Category,
        limit: Option<usize>,
    ) -> Result<Vec<StoryId>, UpstreamError>;

    /// Fetch the detail record for one story.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] under the same conditions as
    /// [`Self::fetch_story_ids`].
    async fn fetch_story(&self, id: StoryId) -> Result<StoryRecord, UpstreamError>;
}
