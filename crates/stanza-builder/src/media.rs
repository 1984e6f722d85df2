//! Media resolution: turns raw bytes or a remote URL into an uploaded media
//! sub-message through the [`MediaUploader`] collaborator.

use std::fmt;

use serde::{Deserialize, Serialize};
use stanza_core::Result;
use stanza_proto::{InteractiveHeader, MediaMessage, Message};
use tracing::debug;

use crate::transport::MediaUploader;

/// Unresolved media reference.
///
/// JSON: `{"url": "https://..."}` or a base64 string of the raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MediaSource {
    Url { url: String },
    Bytes(#[serde(with = "stanza_proto::bytes::standard")] Vec<u8>),
}

impl MediaSource {
    pub fn url(url: impl Into<String>) -> Self {
        MediaSource::Url { url: url.into() }
    }

    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        MediaSource::Bytes(bytes.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Document,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Document => "document",
        };
        f.write_str(s)
    }
}

/// One upload request handed to the uploader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUpload {
    pub kind: MediaKind,
    pub source: MediaSource,
    pub caption: Option<String>,
    /// Preview image for documents; ignored for other kinds.
    pub jpeg_thumbnail: Option<MediaSource>,
}

impl MediaUpload {
    pub fn new(kind: MediaKind, source: MediaSource) -> Self {
        Self {
            kind,
            source,
            caption: None,
            jpeg_thumbnail: None,
        }
    }

    pub fn with_caption(mut self, caption: Option<String>) -> Self {
        self.caption = caption;
        self
    }
}

/// Resolved media: a kind tag plus the uploaded sub-message.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaDescriptor {
    pub kind: MediaKind,
    pub content: MediaMessage,
}

impl MediaDescriptor {
    /// Place the media in the matching field of an otherwise empty message.
    pub fn into_message(self) -> Message {
        let mut message = Message::default();
        match self.kind {
            MediaKind::Image => message.image_message = Some(self.content),
            MediaKind::Video => message.video_message = Some(self.content),
            MediaKind::Document => message.document_message = Some(self.content),
        }
        message
    }

    /// Interactive header carrying this media.
    pub fn into_header(self, title: String) -> InteractiveHeader {
        let mut header = InteractiveHeader {
            title,
            has_media_attachment: true,
            ..Default::default()
        };
        match self.kind {
            MediaKind::Image => header.image_message = Some(self.content),
            MediaKind::Video => header.video_message = Some(self.content),
            MediaKind::Document => header.document_message = Some(self.content),
        }
        header
    }
}

/// Upload `request` and normalise the result into a [`MediaDescriptor`].
///
/// Bytes and URL sources produce the same descriptor shape. A caption on the
/// request always ends up on the uploaded sub-message.
pub async fn resolve_media(
    uploader: &dyn MediaUploader,
    request: MediaUpload,
) -> Result<MediaDescriptor> {
    debug!(kind = %request.kind, "resolving media");
    let mut content = uploader.upload(&request).await?;
    if request.caption.is_some() {
        content.caption = request.caption;
    }
    Ok(MediaDescriptor {
        kind: request.kind,
        content,
    })
}
