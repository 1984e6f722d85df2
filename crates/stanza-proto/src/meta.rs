use serde::{Deserialize, Serialize};
use stanza_core::Jid;

use crate::key::MessageKey;

/// Side-band context carried next to the content of a message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageContextInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_list_metadata: Option<DeviceListMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_list_metadata_version: Option<u32>,
    #[serde(
        default,
        with = "crate::bytes::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub message_secret: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_payload: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_association: Option<MessageAssociation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant: Option<Jid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_jid: Option<Jid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forwarding_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_forwarded: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentioned_jid: Option<Vec<Jid>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starred: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_highlighted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_message_forward_info: Option<BusinessMessageForwardInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_sharing_context: Option<DataSharingContext>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceListMetadata {}

/// Structural link from a child message to its parent (album grouping).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageAssociation {
    pub association_type: u32,
    pub parent_message_key: MessageKey,
}

impl MessageAssociation {
    /// Association type used for album members.
    pub const MEDIA_ALBUM: u32 = 1;

    pub fn album_member(parent: MessageKey) -> Self {
        Self {
            association_type: Self::MEDIA_ALBUM,
            parent_message_key: parent,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessMessageForwardInfo {
    pub business_owner_jid: Jid,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSharingContext {
    pub show_mm_disclosure: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardedNewsletterMessageInfo {
    pub newsletter_jid: Jid,
    pub server_message_id: u32,
    pub newsletter_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisappearingMode {
    pub initiator: u32,
    pub trigger: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initiator_device_jid: Option<Jid>,
    pub initiated_by_external_service: bool,
    pub initiated_by_user_device: bool,
    pub initiated_by_system: bool,
    pub initiated_by_server: bool,
    pub initiated_by_admin: bool,
    pub initiated_by_user: bool,
    pub initiated_by_app: bool,
    pub initiated_by_bot: bool,
    pub initiated_by_me: bool,
}
