//! Core data types for the newsbrief digest pipeline.
//!
//! This crate defines the domain vocabulary shared by the rest of the
//! workspace:
//!
//! - [`Category`] - the fixed set of story lists the upstream serves
//! - [`StoryRecord`] - one story's detail data, with explicit optional fields
//! - [`render_story`] - formats a record as a one-line markdown link

#![warn(missing_docs)]

mod category;
mod render;
mod story;

pub use category::Category;
pub use render::{DIGEST_HEADER, render_story};
pub use story::{StoryId, StoryRecord, StoryRecordBuilder};
