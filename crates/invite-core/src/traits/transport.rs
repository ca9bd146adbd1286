//! Transport trait (port) - the chat message and reaction collaborator

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::entities::{DisplayedMessage, Embed, ReactionEvent};
use crate::value_objects::Snowflake;

use super::repositories::RepoResult;

/// Stream of reaction events observed on a message
pub type ReactionStream = BoxStream<'static, ReactionEvent>;

#[async_trait]
pub trait MessageTransport: Send + Sync {
    /// Identity of this system on the transport
    fn self_id(&self) -> Snowflake;

    /// Send a new message to a channel
    async fn send(&self, channel_id: Snowflake, embed: &Embed) -> RepoResult<DisplayedMessage>;

    /// Replace the content of a message previously sent by this system
    async fn edit(&self, message: &DisplayedMessage, embed: &Embed) -> RepoResult<()>;

    /// Add a reaction to a message
    async fn react(&self, message: &DisplayedMessage, emoji: &str) -> RepoResult<()>;

    /// Subscribe to reactions added from now on
    ///
    /// The stream is unfiltered; callers apply their own predicate.
    fn reactions(&self, message: &DisplayedMessage) -> ReactionStream;
}
