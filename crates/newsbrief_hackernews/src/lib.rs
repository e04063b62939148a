//! HackerNews API client and digest builder.
//!
//! This crate talks to the public HackerNews Firebase API and turns its
//! story lists into rendered text digests:
//!
//! - [`HackerNewsClient`] - read-only HTTP client for the list and item endpoints
//! - [`StorySource`] - trait seam over the two fetch operations
//! - [`DigestBuilder`] - orchestrates fetching and rendering into one digest

#![warn(missing_docs)]

mod client;
mod digest;
mod source;

pub use client::{HACKER_NEWS_API_URL, HackerNewsClient};
pub use digest::{DEFAULT_STORY_COUNT, DigestBuilder};
pub use source::StorySource;
