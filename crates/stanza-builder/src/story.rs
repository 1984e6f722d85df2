//! Group status relays and the content generation strategies behind them.
//!
//! Raw story content is normalised by exactly one [`ContentGenerator`],
//! chosen once when the builder is constructed: the first candidate that
//! reports itself available wins.

use std::sync::Arc;

use async_trait::async_trait;
use stanza_core::{Jid, Result, StanzaError};
use stanza_proto::{ExtendedTextMessage, FutureProofMessage, Message, MessageKey};
use tracing::{debug, info};

use crate::builder::{logged, MessageContentBuilder};
use crate::content::{ContentEnvelope, GroupStory, StoryContent};
use crate::media::{resolve_media, MediaKind, MediaUpload};
use crate::transport::{MediaUploader, RelayOptions, SentMessage};

const FORMATTER: &str = "group_story";

/// Turns raw story content into a wire message.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Name for logging and selection reports.
    fn name(&self) -> &str;

    /// Capability probe, evaluated once at selection time.
    fn is_available(&self) -> bool {
        true
    }

    async fn generate(&self, content: &StoryContent) -> Result<Message>;
}

/// The selected generator for group stories.
pub struct StoryNormalizer {
    selected: Arc<dyn ContentGenerator>,
}

impl std::fmt::Debug for StoryNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoryNormalizer")
            .field("selected", &self.selected.name())
            .finish()
    }
}

impl StoryNormalizer {
    /// Pick the first available candidate, in order.
    pub fn select(candidates: Vec<Arc<dyn ContentGenerator>>) -> Result<Self> {
        for candidate in candidates {
            if candidate.is_available() {
                debug!(generator = candidate.name(), "story content generator selected");
                return Ok(Self {
                    selected: candidate,
                });
            }
            debug!(generator = candidate.name(), "story content generator unavailable, skipping");
        }
        Err(StanzaError::Config(
            "no story content generator is available".to_string(),
        ))
    }

    pub fn selected(&self) -> &str {
        self.selected.name()
    }

    /// Prebuilt stories pass through untouched; raw content goes through the
    /// selected generator.
    pub async fn normalize(&self, story: &GroupStory) -> Result<Message> {
        match story {
            GroupStory::Prebuilt { message } => Ok(message.clone()),
            GroupStory::Content(content) => self.selected.generate(content).await,
        }
    }
}

/// Built-in generator: text becomes an extended text message, image or video
/// is uploaded through the media uploader.
pub struct UploadGenerator {
    uploader: Arc<dyn MediaUploader>,
}

impl UploadGenerator {
    pub fn new(uploader: Arc<dyn MediaUploader>) -> Self {
        Self { uploader }
    }
}

#[async_trait]
impl ContentGenerator for UploadGenerator {
    fn name(&self) -> &str {
        "upload"
    }

    async fn generate(&self, content: &StoryContent) -> Result<Message> {
        let media = match (&content.image, &content.video) {
            (Some(image), _) => Some(MediaUpload::new(MediaKind::Image, image.clone())),
            (None, Some(video)) => Some(MediaUpload::new(MediaKind::Video, video.clone())),
            (None, None) => None,
        };

        if let Some(upload) = media {
            let caption = content.caption.clone().or_else(|| content.text.clone());
            let resolved =
                resolve_media(self.uploader.as_ref(), upload.with_caption(caption)).await?;
            return Ok(resolved.into_message());
        }

        match &content.text {
            Some(text) => Ok(Message {
                extended_text_message: Some(ExtendedTextMessage {
                    text: text.clone(),
                    context_info: None,
                }),
                ..Default::default()
            }),
            None => Err(StanzaError::ContentGeneration(
                "story content has no text, image or video".to_string(),
            )),
        }
    }
}

impl MessageContentBuilder {
    /// Wrap a story in a group status v2 envelope and relay it under a
    /// freshly generated message id.
    pub async fn group_story(&self, jid: &Jid, envelope: &ContentEnvelope) -> Result<SentMessage> {
        logged(FORMATTER, self.relay_group_story(jid, envelope).await)
    }

    async fn relay_group_story(&self, jid: &Jid, envelope: &ContentEnvelope) -> Result<SentMessage> {
        let story = envelope
            .group_story
            .as_ref()
            .ok_or_else(|| StanzaError::invalid("missing groupStatusMessage"))?;

        let inner = self.story.normalize(story).await?;
        let message = Message {
            group_status_message_v2: Some(FutureProofMessage::new(inner)),
            ..Default::default()
        };

        let id = self.ids.next_id();
        let receipt = self
            .relay
            .relay(jid, &message, &RelayOptions::with_id(id.clone()))
            .await?;
        info!(formatter = FORMATTER, id = %id, jid = %jid, "group story relayed");

        Ok(SentMessage {
            key: MessageKey::outgoing(jid.clone(), id),
            message,
            receipt,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named {
        name: &'static str,
        available: bool,
    }

    #[async_trait]
    impl ContentGenerator for Named {
        fn name(&self) -> &str {
            self.name
        }
        fn is_available(&self) -> bool {
            self.available
        }
        async fn generate(&self, _content: &StoryContent) -> Result<Message> {
            Ok(Message {
                conversation: Some(self.name.to_string()),
                ..Default::default()
            })
        }
    }

    fn named(name: &'static str, available: bool) -> Arc<dyn ContentGenerator> {
        Arc::new(Named { name, available })
    }

    #[test]
    fn first_available_candidate_is_selected() {
        let normalizer = StoryNormalizer::select(vec![
            named("bail", false),
            named("utils", true),
            named("prepare", true),
        ])
        .unwrap();
        assert_eq!(normalizer.selected(), "utils");
    }

    #[test]
    fn no_available_candidate_is_a_config_error() {
        let err = StoryNormalizer::select(vec![named("bail", false)]).unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
    }

    #[tokio::test]
    async fn prebuilt_story_skips_the_generator() {
        let normalizer = StoryNormalizer::select(vec![named("utils", true)]).unwrap();
        let prebuilt = Message {
            conversation: Some("ready".into()),
            ..Default::default()
        };

        let out = normalizer
            .normalize(&GroupStory::Prebuilt {
                message: prebuilt.clone(),
            })
            .await
            .unwrap();
        assert_eq!(out, prebuilt);

        let out = normalizer
            .normalize(&GroupStory::Content(StoryContent::default()))
            .await
            .unwrap();
        assert_eq!(out.conversation.as_deref(), Some("utils"));
    }
}
