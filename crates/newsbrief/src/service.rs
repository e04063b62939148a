//! Cached digest service.

use newsbrief_cache::{Clock, DigestCache, DigestCacheConfig, DigestKey, MonotonicClock};
use newsbrief_core::Category;
use newsbrief_error::NewsbriefResult;
use newsbrief_hackernews::{DEFAULT_STORY_COUNT, DigestBuilder, StorySource};
use tokio::sync::Mutex;
use tracing::{debug, instrument};

/// Digest builder wrapped with result memoization.
///
/// Lookups check the cache first and only invoke the underlying fetch
/// pipeline on a miss. The cache lock is held across the build, so
/// concurrent misses for the same digest perform at most one upstream
/// round of calls instead of racing each other.
///
/// # Example
///
/// ```rust,ignore
/// use newsbrief::{Category, DigestCacheConfig, DigestService, HackerNewsClient};
///
/// let service = DigestService::new(HackerNewsClient::new(), DigestCacheConfig::default());
/// let digest = service.digest(Category::Top, 5).await?;
/// ```
pub struct DigestService<S, C: Clock = MonotonicClock> {
    builder: DigestBuilder<S>,
    cache: Mutex<DigestCache<C>>,
}

impl<S: StorySource> DigestService<S, MonotonicClock> {
    /// Create a service over a story source with the given cache
    /// configuration.
    pub fn new(source: S, config: DigestCacheConfig) -> Self {
        Self {
            builder: DigestBuilder::new(source),
            cache: Mutex::new(DigestCache::new(config)),
        }
    }
}

impl<S: StorySource, C: Clock> DigestService<S, C> {
    /// Create a service with an explicitly constructed cache.
    pub fn with_cache(source: S, cache: DigestCache<C>) -> Self {
        Self {
            builder: DigestBuilder::new(source),
            cache: Mutex::new(cache),
        }
    }

    /// Get a reference to the underlying story source.
    pub fn source(&self) -> &S {
        self.builder.source()
    }

    /// Return the digest for `(category, count)`, building it on a cache
    /// miss.
    ///
    /// # Errors
    ///
    /// Fails only when the id-list fetch fails; see
    /// [`DigestBuilder::build`].
    #[instrument(skip(self), fields(category = %category, count))]
    pub async fn digest(&self, category: Category, count: usize) -> NewsbriefResult<String> {
        let key = DigestKey::new(category, count);
        let mut cache = self.cache.lock().await;

        if let Some(entry) = cache.get(&key) {
            debug!("Serving digest from cache");
            return Ok(entry.digest().clone());
        }

        let digest = self.builder.build(category, count).await?;
        cache.insert(key, digest.clone());
        Ok(digest)
    }

    /// Return the digest for the default category and story count.
    pub async fn digest_default(&self) -> NewsbriefResult<String> {
        self.digest(Category::default(), DEFAULT_STORY_COUNT).await
    }
}
