use std::sync::Arc;

use stanza_core::{Jid, Result, StanzaConfig, StanzaError};
use stanza_proto::{Message, Quoted};
use tracing::{debug, error, info};

use crate::content::ContentEnvelope;
use crate::detect::{detect, ContentKind};
use crate::story::{StoryNormalizer, UploadGenerator};
use crate::transport::{
    Collaborators, IdGenerator, MediaUploader, MessageFactory, Relay, SecretSource, SentMessage,
};

/// Result of [`MessageContentBuilder::dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Formatted only; delivering it is the caller's job.
    Built(Message),
    /// Formatted and relayed.
    Sent(SentMessage),
}

/// Builds outbound messages for the specialised kinds and relays those that
/// need sequencing (album, event, poll result, group story).
///
/// Holds no mutable state; every call owns the objects it constructs, so a
/// single instance can be shared behind an `Arc`.
pub struct MessageContentBuilder {
    pub(crate) uploader: Arc<dyn MediaUploader>,
    pub(crate) factory: Arc<dyn MessageFactory>,
    pub(crate) relay: Arc<dyn Relay>,
    pub(crate) ids: Arc<dyn IdGenerator>,
    pub(crate) secrets: Arc<dyn SecretSource>,
    pub(crate) story: StoryNormalizer,
    pub(crate) config: StanzaConfig,
}

impl MessageContentBuilder {
    /// Wire up the builder and pick the story content generator.
    ///
    /// Caller-supplied generators are probed in order, followed by the
    /// built-in upload-backed generator, so selection always succeeds unless
    /// every candidate reports itself unavailable.
    pub fn new(collaborators: Collaborators, config: StanzaConfig) -> Result<Self> {
        let Collaborators {
            uploader,
            factory,
            relay,
            ids,
            secrets,
            mut story_generators,
        } = collaborators;

        story_generators.push(Arc::new(UploadGenerator::new(uploader.clone())));
        let story = StoryNormalizer::select(story_generators)?;
        info!(story_generator = story.selected(), "message content builder ready");

        Ok(Self {
            uploader,
            factory,
            relay,
            ids,
            secrets,
            story,
            config,
        })
    }

    pub fn config(&self) -> &StanzaConfig {
        &self.config
    }

    /// Name of the content generator chosen for group stories.
    pub fn story_generator(&self) -> &str {
        self.story.selected()
    }

    /// Detect the kind of `envelope` and run the matching formatter.
    pub async fn dispatch(
        &self,
        jid: &Jid,
        envelope: &ContentEnvelope,
        quoted: Option<&Quoted>,
    ) -> Result<Outcome> {
        let kind = detect(envelope).ok_or_else(|| {
            StanzaError::invalid("content does not match any supported message kind")
        })?;
        debug!(kind = %kind, jid = %jid, "dispatching content");

        let outcome = match kind {
            ContentKind::Payment => Outcome::Built(self.payment(envelope, quoted)?),
            ContentKind::Product => Outcome::Built(self.product(envelope).await?),
            ContentKind::Interactive => Outcome::Built(self.interactive(envelope).await?),
            ContentKind::Album => Outcome::Sent(self.album(jid, envelope, quoted).await?),
            ContentKind::Event => Outcome::Sent(self.event(jid, envelope, quoted).await?),
            ContentKind::PollResult => {
                Outcome::Sent(self.poll_result(jid, envelope, quoted).await?)
            }
            ContentKind::GroupStory => Outcome::Sent(self.group_story(jid, envelope).await?),
        };
        Ok(outcome)
    }

    /// Fresh random message secret.
    pub(crate) fn message_secret(&self) -> Vec<u8> {
        self.secrets.random_bytes(self.config.secrets.message_secret)
    }

    /// A user address derived from a freshly generated message id.
    pub(crate) fn synthetic_user(&self) -> Jid {
        Jid::user_from_id(&self.ids.next_id())
    }
}

/// Log a formatter failure with its name, then hand the error back unchanged.
pub(crate) fn logged<T>(formatter: &'static str, result: Result<T>) -> Result<T> {
    if let Err(ref e) = result {
        error!(formatter, code = e.code(), error = %e, "formatter failed");
    }
    result
}
