//! Digest result caching with TTL support.
//!
//! This crate provides caching infrastructure for rendered story digests,
//! reducing upstream API calls and improving response times. The cache is
//! an explicit object with injected clock and configured capacity, owned
//! by whoever constructs the digest pipeline.

#![warn(missing_docs)]

mod cache;
mod clock;

pub use cache::{CacheEntry, DigestCache, DigestCacheConfig, DigestCacheConfigBuilder, DigestKey};
pub use clock::{Clock, MonotonicClock};
