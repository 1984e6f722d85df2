use serde::{Deserialize, Serialize};

use crate::commerce::RequestPaymentMessage;
use crate::event::{EventMessage, PollResultSnapshotMessage};
use crate::interactive::InteractiveMessage;
use crate::media::{ExtendedTextMessage, MediaMessage};
use crate::meta::{DisappearingMode, ForwardedNewsletterMessageInfo, MessageContextInfo};

/// Top-level message. Exactly one content field is normally populated;
/// `message_context_info`, `forwarded_newsletter_message_info` and
/// `disappearing_mode` are side-band metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_text_message: Option<ExtendedTextMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_message: Option<MediaMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_message: Option<MediaMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_message: Option<MediaMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticker_message: Option<MediaMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_payment_message: Option<RequestPaymentMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interactive_message: Option<InteractiveMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_once_message: Option<FutureProofMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_message: Option<AlbumMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_message: Option<EventMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll_result_snapshot_message: Option<PollResultSnapshotMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_status_message_v2: Option<FutureProofMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_context_info: Option<MessageContextInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forwarded_newsletter_message_info: Option<ForwardedNewsletterMessageInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disappearing_mode: Option<DisappearingMode>,
}

impl Message {
    /// Wire name of the first populated content field, ignoring side-band
    /// metadata. `None` for a message with no content.
    pub fn content_type(&self) -> Option<&'static str> {
        let checks: [(&'static str, bool); 13] = [
            ("conversation", self.conversation.is_some()),
            ("extendedTextMessage", self.extended_text_message.is_some()),
            ("imageMessage", self.image_message.is_some()),
            ("videoMessage", self.video_message.is_some()),
            ("documentMessage", self.document_message.is_some()),
            ("stickerMessage", self.sticker_message.is_some()),
            ("requestPaymentMessage", self.request_payment_message.is_some()),
            ("interactiveMessage", self.interactive_message.is_some()),
            ("viewOnceMessage", self.view_once_message.is_some()),
            ("albumMessage", self.album_message.is_some()),
            ("eventMessage", self.event_message.is_some()),
            ("pollResultSnapshotMessage", self.poll_result_snapshot_message.is_some()),
            ("groupStatusMessageV2", self.group_status_message_v2.is_some()),
        ];
        checks.iter().find(|(_, set)| *set).map(|(name, _)| *name)
    }

    /// Wrap this message in a view-once envelope.
    pub fn into_view_once(self) -> Message {
        Message {
            view_once_message: Some(FutureProofMessage::new(self)),
            ..Default::default()
        }
    }
}

/// Envelope that carries a nested message (view-once, group status v2).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FutureProofMessage {
    pub message: Box<Message>,
}

impl FutureProofMessage {
    pub fn new(message: Message) -> Self {
        Self {
            message: Box::new(message),
        }
    }
}

/// Parent record of a media album.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumMessage {
    pub expected_image_count: u32,
    pub expected_video_count: u32,
}
