//! Fixed metadata stamped onto every album member.
//!
//! These values are policy, not derived from the item: only the recipient,
//! the parent key, the secret and the timestamp vary per message.

use chrono::{DateTime, SecondsFormat, Utc};
use stanza_core::Jid;
use stanza_proto::{
    BusinessMessageForwardInfo, DataSharingContext, DisappearingMode,
    ForwardedNewsletterMessageInfo, MessageAssociation, MessageContextInfo, MessageKey,
};

pub const MEMBER_FORWARDING_SCORE: u32 = 99_999;
pub const MEMBER_LABELS: [&str; 2] = ["Y", "Important"];

pub const NEWSLETTER_JID: &str = "0@newsletter";
pub const NEWSLETTER_NAME: &str = "WhatsApp";
pub const NEWSLETTER_SERVER_MESSAGE_ID: u32 = 1;
pub const NEWSLETTER_CONTENT_TYPE: u32 = 1;
pub const NEWSLETTER_SENDER_NAME: &str = "kikyy dugonggg";
pub const NEWSLETTER_CONTENT: &str = "Text Message";
pub const NEWSLETTER_PRIORITY: &str = "high";
pub const NEWSLETTER_STATUS: &str = "sent";

pub const DISAPPEARING_INITIATOR: u32 = 3;
pub const DISAPPEARING_TRIGGER: u32 = 4;

/// Context info linking a member to its album parent.
pub fn member_context(secret: Vec<u8>, parent: MessageKey, jid: &Jid) -> MessageContextInfo {
    MessageContextInfo {
        message_secret: Some(secret),
        message_association: Some(MessageAssociation::album_member(parent)),
        participant: Some(Jid::placeholder_user()),
        remote_jid: Some(Jid::status_broadcast()),
        forwarding_score: Some(MEMBER_FORWARDING_SCORE),
        is_forwarded: Some(true),
        mentioned_jid: Some(vec![jid.clone()]),
        starred: Some(true),
        labels: Some(MEMBER_LABELS.iter().map(|l| l.to_string()).collect()),
        is_highlighted: Some(true),
        business_message_forward_info: Some(BusinessMessageForwardInfo {
            business_owner_jid: jid.clone(),
        }),
        data_sharing_context: Some(DataSharingContext {
            show_mm_disclosure: true,
        }),
        ..Default::default()
    }
}

pub fn member_newsletter_info(now: DateTime<Utc>) -> ForwardedNewsletterMessageInfo {
    ForwardedNewsletterMessageInfo {
        newsletter_jid: Jid::from(NEWSLETTER_JID),
        server_message_id: NEWSLETTER_SERVER_MESSAGE_ID,
        newsletter_name: NEWSLETTER_NAME.to_string(),
        content_type: Some(NEWSLETTER_CONTENT_TYPE),
        timestamp: Some(now.to_rfc3339_opts(SecondsFormat::Millis, true)),
        sender_name: Some(NEWSLETTER_SENDER_NAME.to_string()),
        content: Some(NEWSLETTER_CONTENT.to_string()),
        priority: Some(NEWSLETTER_PRIORITY.to_string()),
        status: Some(NEWSLETTER_STATUS.to_string()),
    }
}

pub fn member_disappearing_mode(jid: &Jid) -> DisappearingMode {
    DisappearingMode {
        initiator: DISAPPEARING_INITIATOR,
        trigger: DISAPPEARING_TRIGGER,
        initiator_device_jid: Some(jid.clone()),
        initiated_by_external_service: true,
        initiated_by_user_device: true,
        initiated_by_system: true,
        initiated_by_server: true,
        initiated_by_admin: true,
        initiated_by_user: true,
        initiated_by_app: true,
        initiated_by_bot: true,
        initiated_by_me: true,
    }
}
