//! Error types for the newsbrief library.
//!
//! This crate provides the foundation error types used throughout the newsbrief
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use newsbrief_error::{NewsbriefResult, UpstreamError, UpstreamErrorKind};
//!
//! fn fetch_data() -> NewsbriefResult<String> {
//!     Err(UpstreamError::new(UpstreamErrorKind::Request(
//!         "Connection refused".to_string(),
//!     )))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod category;
mod config;
mod error;
mod record;
mod upstream;

pub use category::InvalidCategoryError;
pub use config::ConfigError;
pub use error::{NewsbriefError, NewsbriefErrorKind, NewsbriefResult};
pub use record::MalformedRecordError;
pub use upstream::{UpstreamError, UpstreamErrorKind};
