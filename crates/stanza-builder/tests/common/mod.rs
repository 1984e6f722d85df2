// Recording fake for every collaborator the builder talks to.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use stanza_builder::{
    BuildOptions, Collaborators, DeliveryReceipt, IdGenerator, MediaKind, MediaUpload,
    MediaUploader, MessageContentBuilder, MessageFactory, Relay, RelayOptions, SecretSource,
};
use stanza_core::{Jid, MessageId, Result, StanzaConfig, StanzaError};
use stanza_proto::{MediaMessage, Message, MessageKey, WireMessage};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stanza_builder=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Clone)]
pub struct RelayCall {
    pub jid: Jid,
    pub message: Message,
    pub options: RelayOptions,
    pub accepted: bool,
}

#[derive(Debug, Clone)]
pub struct BuildCall {
    pub jid: Jid,
    pub content: Message,
    pub options: BuildOptions,
}

#[derive(Default)]
pub struct FakeTransport {
    relays: Mutex<Vec<RelayCall>>,
    uploads: Mutex<Vec<MediaUpload>>,
    builds: Mutex<Vec<BuildCall>>,
    /// Zero-based index of the relay attempt that should fail.
    fail_relay_at: Option<usize>,
    /// Uploads of this kind fail.
    fail_upload: Option<MediaKind>,
    ids: AtomicUsize,
    secrets: AtomicUsize,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing_relay_at(index: usize) -> Arc<Self> {
        Arc::new(Self {
            fail_relay_at: Some(index),
            ..Default::default()
        })
    }

    pub fn failing_upload(kind: MediaKind) -> Arc<Self> {
        Arc::new(Self {
            fail_upload: Some(kind),
            ..Default::default()
        })
    }

    pub fn relays(&self) -> Vec<RelayCall> {
        self.relays.lock().unwrap().clone()
    }

    pub fn accepted_relays(&self) -> Vec<RelayCall> {
        self.relays().into_iter().filter(|r| r.accepted).collect()
    }

    pub fn uploads(&self) -> Vec<MediaUpload> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn builds(&self) -> Vec<BuildCall> {
        self.builds.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaUploader for FakeTransport {
    async fn upload(&self, request: &MediaUpload) -> Result<MediaMessage> {
        let n = {
            let mut uploads = self.uploads.lock().unwrap();
            uploads.push(request.clone());
            uploads.len()
        };
        if self.fail_upload == Some(request.kind) {
            return Err(StanzaError::Upload(format!("{} upload rejected", request.kind)));
        }
        let mimetype = match request.kind {
            MediaKind::Image => "image/jpeg",
            MediaKind::Video => "video/mp4",
            MediaKind::Document => "application/pdf",
        };
        Ok(MediaMessage {
            url: Some(format!("https://mmg.test/{}/{n}", request.kind)),
            mimetype: Some(mimetype.to_string()),
            media_key: Some(vec![n as u8; 32]),
            ..Default::default()
        })
    }
}

#[async_trait]
impl MessageFactory for FakeTransport {
    async fn from_content(
        &self,
        jid: &Jid,
        content: Message,
        options: &BuildOptions,
    ) -> Result<WireMessage> {
        let mut builds = self.builds.lock().unwrap();
        builds.push(BuildCall {
            jid: jid.clone(),
            content: content.clone(),
            options: options.clone(),
        });
        let id = MessageId(format!("BUILT{:03}", builds.len()));
        Ok(WireMessage {
            key: MessageKey::outgoing(jid.clone(), id),
            message: content,
        })
    }
}

#[async_trait]
impl Relay for FakeTransport {
    async fn relay(
        &self,
        jid: &Jid,
        message: &Message,
        options: &RelayOptions,
    ) -> Result<DeliveryReceipt> {
        let mut relays = self.relays.lock().unwrap();
        let accepted = self.fail_relay_at != Some(relays.len());
        relays.push(RelayCall {
            jid: jid.clone(),
            message: message.clone(),
            options: options.clone(),
            accepted,
        });
        if !accepted {
            return Err(StanzaError::Relay("connection closed".to_string()));
        }
        let message_id = options
            .message_id
            .clone()
            .unwrap_or_else(|| MessageId(format!("RELAY{:03}", relays.len())));
        Ok(DeliveryReceipt { message_id })
    }
}

impl IdGenerator for FakeTransport {
    fn next_id(&self) -> MessageId {
        let n = self.ids.fetch_add(1, Ordering::SeqCst) + 1;
        MessageId(format!("3EB0TEST{n:04}"))
    }
}

impl SecretSource for FakeTransport {
    fn random_bytes(&self, len: usize) -> Vec<u8> {
        let n = self.secrets.fetch_add(1, Ordering::SeqCst) + 1;
        vec![n as u8; len]
    }
}

pub fn collaborators(fake: &Arc<FakeTransport>) -> Collaborators {
    Collaborators::new(fake.clone(), fake.clone(), fake.clone())
        .with_ids(fake.clone())
        .with_secrets(fake.clone())
}

pub fn builder(fake: &Arc<FakeTransport>) -> MessageContentBuilder {
    init_tracing();
    MessageContentBuilder::new(collaborators(fake), StanzaConfig::default())
        .expect("builder with built-in story generator")
}

pub fn group() -> Jid {
    Jid::from("120363000000000001@g.us")
}
