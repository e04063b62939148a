//! Chat command boundary.
//!
//! The host bot framework (receiving updates, chat actions, delivery) is
//! an external collaborator; this module is the typed contract it calls
//! into. Free-text arguments are validated into a [`Category`] before
//! anything touches the network.

use crate::DigestService;
use derive_getters::Getters;
use newsbrief_cache::{Clock, MonotonicClock};
use newsbrief_core::Category;
use newsbrief_error::NewsbriefResult;
use newsbrief_hackernews::{DEFAULT_STORY_COUNT, StorySource};
use tracing::{debug, instrument};

/// A digest reply ready for chat delivery.
///
/// The text uses simple markdown link syntax, so the host should render
/// it with markdown enabled and link-preview expansion suppressed.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct CommandReply {
    /// Message text to deliver
    text: String,
    /// Render the text as markdown
    markdown: bool,
    /// Suppress link-preview expansion
    disable_link_preview: bool,
}

/// Handles incoming digest chat commands.
///
/// # Example
///
/// ```rust,ignore
/// use newsbrief::{DigestCacheConfig, DigestCommandHandler, DigestService, HackerNewsClient};
///
/// let service = DigestService::new(HackerNewsClient::new(), DigestCacheConfig::default());
/// let handler = DigestCommandHandler::new(service);
///
/// // "/hn best" from the chat arrives as its argument list.
/// let reply = handler.handle(&["best".to_string()]).await?;
/// send_message(reply.text());
/// ```
pub struct DigestCommandHandler<S, C: Clock = MonotonicClock> {
    service: DigestService<S, C>,
}

impl<S: StorySource, C: Clock> DigestCommandHandler<S, C> {
    /// Create a handler over a digest service.
    pub fn new(service: DigestService<S, C>) -> Self {
        Self { service }
    }

    /// Get a reference to the underlying digest service.
    pub fn service(&self) -> &DigestService<S, C> {
        &self.service
    }

    /// Handle a digest command with the given free-text arguments.
    ///
    /// The first argument, when present, selects the category; absent
    /// arguments default to top stories.
    ///
    /// # Errors
    ///
    /// Returns [`newsbrief_error::InvalidCategoryError`] (wrapped) for
    /// unmapped category text, before any network call; otherwise fails
    /// only when the digest build itself fails.
    #[instrument(skip(self, args), fields(arg_count = args.len()))]
    pub async fn handle(&self, args: &[String]) -> NewsbriefResult<CommandReply> {
        let category = match args.first() {
            Some(raw) => Category::parse(raw)?,
            None => Category::default(),
        };
        debug!(category = %category, "Handling digest command");

        let text = self.service.digest(category, DEFAULT_STORY_COUNT).await?;

        Ok(CommandReply {
            text,
            markdown: true,
            disable_link_preview: true,
        })
    }
}
