use serde::{Deserialize, Serialize};
use stanza_core::Jid;

use crate::message::Message;
use crate::meta::ForwardedNewsletterMessageInfo;

/// Uploaded media sub-message (image, video, document or sticker).
///
/// The upload collaborator fills the transport fields; this crate only
/// reads them back or overrides `file_name` / `mimetype` for documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mimetype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(
        default,
        with = "crate::bytes::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub file_sha256: Option<Vec<u8>>,
    #[serde(
        default,
        with = "crate::bytes::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub file_enc_sha256: Option<Vec<u8>>,
    #[serde(
        default,
        with = "crate::bytes::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub media_key: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(
        default,
        with = "crate::bytes::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub jpeg_thumbnail: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_info: Option<Box<ContextInfo>>,
}

/// Reply, mention and forwarding context attached to a content message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stanza_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant: Option<Jid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quoted_message: Option<Box<Message>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_jid: Option<Jid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentioned_jid: Option<Vec<Jid>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forwarding_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_forwarded: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_ad_reply: Option<ExternalAdReplyInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forwarded_newsletter_message_info: Option<ForwardedNewsletterMessageInfo>,
}

/// Link-preview style advertisement card shown above a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalAdReplyInfo {
    pub title: String,
    pub body: String,
    pub media_type: u32,
    pub thumbnail_url: String,
    pub media_url: String,
    pub source_url: String,
    pub show_ad_attribution: bool,
    pub render_larger_thumbnail: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedTextMessage {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_info: Option<ContextInfo>,
}
