use std::sync::Arc;

use async_trait::async_trait;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use stanza_core::{Jid, MessageId, Result};
use stanza_proto::{MediaMessage, Message, MessageKey, Quoted, WireMessage};
use uuid::Uuid;

use crate::media::MediaUpload;
use crate::story::ContentGenerator;

/// Uploads media to remote storage and returns the wire sub-message for it.
#[async_trait]
pub trait MediaUploader: Send + Sync {
    async fn upload(&self, request: &MediaUpload) -> Result<MediaMessage>;
}

/// Normalises content into the wire schema and assigns it a delivery key.
#[async_trait]
pub trait MessageFactory: Send + Sync {
    async fn from_content(
        &self,
        jid: &Jid,
        content: Message,
        options: &BuildOptions,
    ) -> Result<WireMessage>;
}

/// Hands a fully-formed message to the transport for delivery.
///
/// Implementations own the wire protocol, encryption and any retry policy;
/// the builder calls this at most once per message and never retries.
#[async_trait]
pub trait Relay: Send + Sync {
    async fn relay(
        &self,
        jid: &Jid,
        message: &Message,
        options: &RelayOptions,
    ) -> Result<DeliveryReceipt>;
}

/// Source of transport-unique message ids.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> MessageId;
}

/// Cryptographically strong random bytes for message secrets and ticket ids.
pub trait SecretSource: Send + Sync {
    fn random_bytes(&self, len: usize) -> Vec<u8>;
}

/// Options passed to [`MessageFactory::from_content`].
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Address the message is authored as, when it differs from the session user.
    pub user_jid: Option<Jid>,
    pub quoted: Option<Quoted>,
}

/// Options passed to [`Relay::relay`].
#[derive(Debug, Clone, Default)]
pub struct RelayOptions {
    pub message_id: Option<MessageId>,
    /// Prior key + message used as threading context.
    pub quoted: Option<Quoted>,
}

impl RelayOptions {
    pub fn with_id(message_id: MessageId) -> Self {
        Self {
            message_id: Some(message_id),
            quoted: None,
        }
    }
}

/// Acknowledgement returned once the transport accepted a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryReceipt {
    pub message_id: MessageId,
}

/// A message that was relayed: its delivery key, content and receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentMessage {
    pub key: MessageKey,
    pub message: Message,
    pub receipt: DeliveryReceipt,
}

/// Ids of the form `3EB0` + 16 upper-case hex characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidMessageIds;

impl IdGenerator for UuidMessageIds {
    fn next_id(&self) -> MessageId {
        let hex = Uuid::new_v4().simple().to_string().to_uppercase();
        MessageId(format!("3EB0{}", &hex[..16]))
    }
}

/// Random bytes from the thread-local CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSecrets;

impl SecretSource for OsSecrets {
    fn random_bytes(&self, len: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; len];
        rand::thread_rng().fill_bytes(&mut bytes);
        bytes
    }
}

/// Everything the builder delegates to.
///
/// `ids` and `secrets` default to [`UuidMessageIds`] and [`OsSecrets`].
/// `story_generators` are probed in order ahead of the built-in generator.
#[derive(Clone)]
pub struct Collaborators {
    pub uploader: Arc<dyn MediaUploader>,
    pub factory: Arc<dyn MessageFactory>,
    pub relay: Arc<dyn Relay>,
    pub ids: Arc<dyn IdGenerator>,
    pub secrets: Arc<dyn SecretSource>,
    pub story_generators: Vec<Arc<dyn ContentGenerator>>,
}

impl Collaborators {
    pub fn new(
        uploader: Arc<dyn MediaUploader>,
        factory: Arc<dyn MessageFactory>,
        relay: Arc<dyn Relay>,
    ) -> Self {
        Self {
            uploader,
            factory,
            relay,
            ids: Arc::new(UuidMessageIds),
            secrets: Arc::new(OsSecrets),
            story_generators: Vec::new(),
        }
    }

    pub fn with_ids(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_secrets(mut self, secrets: Arc<dyn SecretSource>) -> Self {
        self.secrets = secrets;
        self
    }

    pub fn with_story_generator(mut self, generator: Arc<dyn ContentGenerator>) -> Self {
        self.story_generators.push(generator);
        self
    }
}
