//! Album relay: one parent message announcing the expected media counts,
//! then each member relayed in order with a link back to the parent.
//!
//! The parent must be relayed first because every member embeds the
//! parent's delivery key. Members go out strictly one at a time. A member
//! failure does not retract the parent or the members already relayed; the
//! member's error is returned as the collaborator reported it, and the
//! delivered parent id is logged alongside it.

use chrono::Utc;
use stanza_core::{Jid, Result, StanzaError};
use stanza_proto::{AlbumMessage, Message, MessageContextInfo, MessageKey, Quoted};
use tracing::{debug, info, warn};

use crate::builder::{logged, MessageContentBuilder};
use crate::content::{AlbumItem, ContentEnvelope};
use crate::media::{resolve_media, MediaKind};
use crate::templates;
use crate::transport::{BuildOptions, DeliveryReceipt, RelayOptions, SentMessage};

const FORMATTER: &str = "album";

impl MessageContentBuilder {
    /// Relay an album and return the parent's relay result.
    pub async fn album(
        &self,
        jid: &Jid,
        envelope: &ContentEnvelope,
        quoted: Option<&Quoted>,
    ) -> Result<SentMessage> {
        logged(FORMATTER, self.relay_album(jid, envelope, quoted).await)
    }

    async fn relay_album(
        &self,
        jid: &Jid,
        envelope: &ContentEnvelope,
        quoted: Option<&Quoted>,
    ) -> Result<SentMessage> {
        let items = match envelope.album.as_deref() {
            Some(items) if !items.is_empty() => items,
            _ => {
                return Err(StanzaError::invalid(
                    "albumMessage must be a non-empty list of media",
                ))
            }
        };

        let parent = self.relay_album_parent(jid, items, quoted).await?;
        info!(
            formatter = FORMATTER,
            parent = %parent.key.id,
            items = items.len(),
            "album parent relayed"
        );

        for (idx, item) in items.iter().enumerate() {
            if let Err(e) = self.relay_album_member(jid, &parent, item).await {
                warn!(
                    formatter = FORMATTER,
                    parent = %parent.key.id,
                    relayed_items = idx,
                    error = %e,
                    "album member failed, parent stays delivered"
                );
                return Err(e);
            }
            debug!(formatter = FORMATTER, item = idx, "album member relayed");
        }

        Ok(parent)
    }

    async fn relay_album_parent(
        &self,
        jid: &Jid,
        items: &[AlbumItem],
        quoted: Option<&Quoted>,
    ) -> Result<SentMessage> {
        let content = Message {
            message_context_info: Some(MessageContextInfo {
                message_secret: Some(self.message_secret()),
                ..Default::default()
            }),
            album_message: Some(expected_counts(items)),
            ..Default::default()
        };
        let options = BuildOptions {
            user_jid: Some(self.synthetic_user()),
            quoted: quoted.cloned(),
        };

        let built = self.factory.from_content(jid, content, &options).await?;
        let mut key = built.key;
        // members quote the parent by conversation id, so it must be present
        key.remote_jid.get_or_insert_with(|| jid.clone());

        let receipt = self
            .relay
            .relay(jid, &built.message, &RelayOptions::with_id(key.id.clone()))
            .await?;

        Ok(SentMessage {
            key,
            message: built.message,
            receipt,
        })
    }

    async fn relay_album_member(
        &self,
        jid: &Jid,
        parent: &SentMessage,
        item: &AlbumItem,
    ) -> Result<DeliveryReceipt> {
        let media = resolve_media(self.uploader.as_ref(), item.to_upload()).await?;
        let built = self
            .factory
            .from_content(jid, media.into_message(), &BuildOptions::default())
            .await?;

        let mut message = built.message;
        message.message_context_info = Some(templates::member_context(
            self.message_secret(),
            parent.key.clone(),
            jid,
        ));
        message.forwarded_newsletter_message_info =
            Some(templates::member_newsletter_info(Utc::now()));
        message.disappearing_mode = Some(templates::member_disappearing_mode(jid));

        let options = RelayOptions {
            message_id: Some(built.key.id),
            quoted: Some(parent_reference(parent, self.synthetic_user())),
        };
        self.relay.relay(jid, &message, &options).await
    }
}

/// Expected image and video counts announced by the parent.
pub fn expected_counts(items: &[AlbumItem]) -> AlbumMessage {
    let count = |kind: MediaKind| items.iter().filter(|i| i.kind() == kind).count() as u32;
    AlbumMessage {
        expected_image_count: count(MediaKind::Image),
        expected_video_count: count(MediaKind::Video),
    }
}

/// Synthetic quote of the parent used as a member's threading context.
fn parent_reference(parent: &SentMessage, participant: Jid) -> Quoted {
    Quoted {
        key: MessageKey {
            remote_jid: parent.key.remote_jid.clone(),
            from_me: true,
            id: parent.key.id.clone(),
            participant: Some(participant),
        },
        message: Some(parent.message.clone()),
    }
}
