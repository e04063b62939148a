//! HackerNews API client.

use crate::StorySource;
use async_trait::async_trait;
use newsbrief_core::{Category, StoryId, StoryRecord};
use newsbrief_error::{UpstreamError, UpstreamErrorKind};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Base URL of the public HackerNews Firebase API.
pub const HACKER_NEWS_API_URL: &str = "https://hacker-news.firebaseio.com/v0";

/// Read-only HackerNews API client.
///
/// Holds one persistent [`reqwest::Client`] so sequential calls reuse
/// connections. No retry logic; a single failed call fails the operation.
///
/// # Example
///
/// ```rust,ignore
/// use newsbrief_hackernews::{HackerNewsClient, StorySource};
/// use newsbrief_core::Category;
///
/// let client = HackerNewsClient::new();
/// let ids = client.fetch_story_ids(Category::Top, Some(5)).await?;
/// let story = client.fetch_story(ids[0]).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HackerNewsClient {
    client: Client,
    base_url: String,
}

impl HackerNewsClient {
    /// Create a new client against the public API.
    pub fn new() -> Self {
        debug!("Creating new HackerNews client");
        Self {
            client: Client::new(),
            base_url: HACKER_NEWS_API_URL.to_string(),
        }
    }

    /// Create a client against an alternate base URL.
    ///
    /// Useful for pointing at a local stand-in of the API in tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn with_timeout(timeout: Duration) -> Result<Self, UpstreamError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            UpstreamError::new(UpstreamErrorKind::Request(format!(
                "Failed to build HTTP client: {}",
                e
            )))
        })?;
        Ok(Self {
            client,
            base_url: HACKER_NEWS_API_URL.to_string(),
        })
    }

    /// GET a URL and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, UpstreamError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            error!(error = ?e, url, "Failed to send request to HackerNews API");
            UpstreamError::new(UpstreamErrorKind::Request(format!("Request failed: {}", e)))
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = %status, url, "HackerNews API returned error");
            return Err(UpstreamError::new(UpstreamErrorKind::Status {
                status: status.as_u16(),
                url: url.to_string(),
            }));
        }

        response.json::<T>().await.map_err(|e| {
            error!(error = ?e, url, "Failed to parse HackerNews response");
            UpstreamError::new(UpstreamErrorKind::Decode(format!(
                "Failed to parse response: {}",
                e
            )))
        })
    }
}

impl Default for HackerNewsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorySource for HackerNewsClient {
    #[instrument(skip(self), fields(category = %category, limit))]
    async fn fetch_story_ids(
        &self,
        category: Category,
        limit: Option<usize>,
    ) -> Result<Vec<StoryId>, UpstreamError> {
        let url = format!("{}/{}.json", self.base_url, category);
        let mut ids: Vec<StoryId> = self.get_json(&url).await?;
        if let Some(limit) = limit {
            ids.truncate(limit);
        }
        debug!(count = ids.len(), "Fetched story id list");
        Ok(ids)
    }

    #[instrument(skip(self), fields(story_id = id))]
    async fn fetch_story(&self, id: StoryId) -> Result<StoryRecord, UpstreamError> {
        let url = format!("{}/item/{}.json", self.base_url, id);
        self.get_json(&url).await
    }
}
