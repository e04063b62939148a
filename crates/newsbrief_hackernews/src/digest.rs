//! Digest building.

use crate::StorySource;
use newsbrief_core::{Category, DIGEST_HEADER, StoryId, render_story};
use newsbrief_error::{NewsbriefError, UpstreamError};
use tracing::{debug, info, instrument, warn};

/// Default number of stories per digest.
pub const DEFAULT_STORY_COUNT: usize = 5;

/// Builds multi-story text digests from a story source.
///
/// Stories are fetched strictly one after another; a failure on an
/// individual story (upstream error or a record with no title) is logged
/// and skipped, so a digest degrades to fewer lines rather than failing.
/// Only a failed id-list fetch aborts the build.
///
/// # Example
///
/// ```rust,ignore
/// use newsbrief_hackernews::{DigestBuilder, HackerNewsClient};
/// use newsbrief_core::Category;
///
/// let builder = DigestBuilder::new(HackerNewsClient::new());
/// let digest = builder.build(Category::Top, 5).await?;
/// println!("{digest}");
/// ```
pub struct DigestBuilder<S> {
    source: S,
}

impl<S: StorySource> DigestBuilder<S> {
    /// Create a builder over a story source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Get a reference to the underlying story source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Build a digest for `count` stories from `category`.
    ///
    /// The result always begins with the fixed digest header; a
    /// header-only digest (zero stories requested, or every story
    /// skipped) is a valid result.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] only when the id-list fetch itself
    /// fails.
    #[instrument(skip(self), fields(category = %category, count))]
    pub async fn build(&self, category: Category, count: usize) -> Result<String, UpstreamError> {
        info!("Building story digest");

        let ids = self.source.fetch_story_ids(category, Some(count)).await?;

        let mut lines = Vec::with_capacity(ids.len());
        for id in ids {
            match self.fetch_and_render(id).await {
                Ok(line) => lines.push(line),
                Err(e) => {
                    warn!(story_id = id, error = %e, "Skipping story");
                }
            }
        }

        debug!(rendered = lines.len(), "Rendered digest stories");
        Ok(format!("{}{}", DIGEST_HEADER, lines.join("\n")))
    }

    /// Build a digest with the default category and story count.
    pub async fn build_default(&self) -> Result<String, UpstreamError> {
        self.build(Category::default(), DEFAULT_STORY_COUNT).await
    }

    async fn fetch_and_render(&self, id: StoryId) -> Result<String, NewsbriefError> {
        let record = self.source.fetch_story(id).await?;
        Ok(render_story(&record)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use newsbrief_core::{StoryRecord, StoryRecordBuilder};
    use newsbrief_error::UpstreamErrorKind;
    use std::collections::HashMap;

    /// In-memory story source for testing.
    struct MockStorySource {
        ids: Result<Vec<StoryId>, UpstreamErrorKind>,
        stories: HashMap<StoryId, Result<StoryRecord, UpstreamErrorKind>>,
    }

    impl MockStorySource {
        fn new(ids: Vec<StoryId>) -> Self {
            Self {
                ids: Ok(ids),
                stories: HashMap::new(),
            }
        }

        fn failing_list() -> Self {
            Self {
                ids: Err(UpstreamErrorKind::Status {
                    status: 500,
                    url: "http://mock/topstories.json".to_string(),
                }),
                stories: HashMap::new(),
            }
        }

        fn with_story(mut self, id: StoryId, record: StoryRecord) -> Self {
            self.stories.insert(id, Ok(record));
            self
        }

        fn with_failing_story(mut self, id: StoryId) -> Self {
            self.stories.insert(
                id,
                Err(UpstreamErrorKind::Request("connection reset".to_string())),
            );
            self
        }
    }

    #[async_trait]
    impl StorySource for MockStorySource {
        async fn fetch_story_ids(
            &self,
            _category: Category,
            limit: Option<usize>,
        ) -> Result<Vec<StoryId>, UpstreamError> {
            match &self.ids {
                Ok(ids) => {
                    let mut ids = ids.clone();
                    if let Some(limit) = limit {
                        ids.truncate(limit);
                    }
                    Ok(ids)
                }
                Err(kind) => Err(UpstreamError::new(kind.clone())),
            }
        }

        async fn fetch_story(&self, id: StoryId) -> Result<StoryRecord, UpstreamError> {
            match self.stories.get(&id) {
                Some(Ok(record)) => Ok(record.clone()),
                Some(Err(kind)) => Err(UpstreamError::new(kind.clone())),
                None => Err(UpstreamError::new(UpstreamErrorKind::Status {
                    status: 404,
                    url: format!("http://mock/item/{id}.json"),
                })),
            }
        }
    }

    fn story(title: &str, url: Option<&str>) -> StoryRecord {
        let mut builder = StoryRecordBuilder::default();
        builder.title(title.to_string());
        if let Some(url) = url {
            builder.url(url.to_string());
        }
        builder.build().unwrap()
    }

    #[tokio::test]
    async fn builds_worked_example() {
        let source = MockStorySource::new(vec![1, 2])
            .with_story(1, story("A", Some("http://a")))
            .with_story(2, story("B", None));
        let builder = DigestBuilder::new(source);

        let digest = builder.build(Category::Top, 2).await.unwrap();
        assert_eq!(
            digest,
            "Stories from [HackerNews](https://news.ycombinator.com)\n[A](http://a)\n[B]()"
        );
    }

    #[tokio::test]
    async fn zero_count_yields_exactly_the_header() {
        let source = MockStorySource::new(vec![]);
        let builder = DigestBuilder::new(source);

        let digest = builder.build(Category::Top, 0).await.unwrap();
        assert_eq!(digest, DIGEST_HEADER);
    }

    #[tokio::test]
    async fn skips_failed_stories() {
        let source = MockStorySource::new(vec![1, 2, 3])
            .with_story(1, story("A", Some("http://a")))
            .with_failing_story(2)
            .with_story(3, story("C", Some("http://c")));
        let builder = DigestBuilder::new(source);

        let digest = builder.build(Category::Best, 3).await.unwrap();
        assert_eq!(
            digest,
            "Stories from [HackerNews](https://news.ycombinator.com)\n[A](http://a)\n[C](http://c)"
        );
    }

    #[tokio::test]
    async fn skips_records_without_titles() {
        let source = MockStorySource::new(vec![1, 2])
            .with_story(1, StoryRecord::default())
            .with_story(2, story("B", None));
        let builder = DigestBuilder::new(source);

        let digest = builder.build(Category::Ask, 2).await.unwrap();
        assert_eq!(
            digest,
            "Stories from [HackerNews](https://news.ycombinator.com)\n[B]()"
        );
    }

    #[tokio::test]
    async fn all_stories_failing_yields_exactly_the_header() {
        let source = MockStorySource::new(vec![1, 2])
            .with_failing_story(1)
            .with_failing_story(2);
        let builder = DigestBuilder::new(source);

        let digest = builder.build(Category::Top, 2).await.unwrap();
        assert_eq!(digest, DIGEST_HEADER);
    }

    #[tokio::test]
    async fn failed_id_list_aborts_build() {
        let builder = DigestBuilder::new(MockStorySource::failing_list());

        let err = builder.build(Category::Top, 5).await.unwrap_err();
        assert!(matches!(
            err.kind(),
            UpstreamErrorKind::Status { status: 500, .. }
        ));
    }

    #[tokio::test]
    async fn limit_truncates_id_list() {
        let source = MockStorySource::new(vec![1, 2, 3, 4, 5])
            .with_story(1, story("A", None))
            .with_story(2, story("B", None));
        let builder = DigestBuilder::new(source);

        let digest = builder.build(Category::New, 2).await.unwrap();
        assert_eq!(
            digest,
            "Stories from [HackerNews](https://news.ycombinator.com)\n[A]()\n[B]()"
        );
    }
}
