//! Newsbrief - Cached HackerNews Digest Pipeline
//!
//! Newsbrief fetches top stories from the public HackerNews API and
//! formats them as a markdown text digest suitable for a chat message,
//! memoizing results for a fixed time window.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use newsbrief::{Category, DigestService, HackerNewsClient, NewsbriefConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = NewsbriefConfig::default();
//!     let service = DigestService::new(HackerNewsClient::new(), config.cache().clone());
//!
//!     let digest = service.digest(Category::Top, 5).await?;
//!     println!("{digest}");
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Newsbrief is organized as a workspace with focused crates:
//!
//! - `newsbrief_error` - Error types
//! - `newsbrief_core` - Core data types (Category, StoryRecord) and rendering
//! - `newsbrief_cache` - TTL + LRU digest cache
//! - `newsbrief_hackernews` - HackerNews API client and digest builder
//!
//! This crate (`newsbrief`) wires them together and re-exports everything
//! for convenience, adding the cached [`DigestService`] and the chat
//! command boundary ([`DigestCommandHandler`]).

#![warn(missing_docs)]

mod command;
mod config;
mod service;

pub use command::{CommandReply, DigestCommandHandler};
pub use config::NewsbriefConfig;
pub use service::DigestService;

pub use newsbrief_cache::{
    CacheEntry, Clock, DigestCache, DigestCacheConfig, DigestCacheConfigBuilder, DigestKey,
    MonotonicClock,
};
pub use newsbrief_core::{Category, DIGEST_HEADER, StoryId, StoryRecord, render_story};
pub use newsbrief_error::{
    ConfigError, InvalidCategoryError, MalformedRecordError, NewsbriefError, NewsbriefErrorKind,
    NewsbriefResult, UpstreamError, UpstreamErrorKind,
};
pub use newsbrief_hackernews::{
    DEFAULT_STORY_COUNT, DigestBuilder, HACKER_NEWS_API_URL, HackerNewsClient, StorySource,
};
