use serde::{Deserialize, Serialize};
use stanza_core::{Jid, MessageId};

use crate::message::Message;

/// Delivery key assigned by the transport.
/// Wire: `{ "remoteJid": "...", "fromMe": true, "id": "3EB0...", "participant": "..." }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageKey {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_jid: Option<Jid>,
    #[serde(default)]
    pub from_me: bool,
    pub id: MessageId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant: Option<Jid>,
}

impl MessageKey {
    /// Key for a message this client is about to send.
    pub fn outgoing(remote_jid: Jid, id: MessageId) -> Self {
        Self {
            remote_jid: Some(remote_jid),
            from_me: true,
            id,
            participant: None,
        }
    }
}

/// A keyed message as produced by the content factory: `{ key, message }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireMessage {
    pub key: MessageKey,
    pub message: Message,
}

/// A prior message referenced as reply context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quoted {
    pub key: MessageKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}
