use stanza_core::{Result, StanzaError};
use stanza_proto::{
    ContextInfo, ExternalAdReplyInfo, InteractiveHeader, InteractiveMessage, Message,
    NativeFlowButton, NativeFlowMessage, TextBlock,
};
use tracing::warn;

use crate::builder::{logged, MessageContentBuilder};
use crate::content::{AdReply, ContentEnvelope, InteractiveContent, NativeFlowOverride};
use crate::media::{resolve_media, MediaDescriptor, MediaKind, MediaSource, MediaUpload};

const FORMATTER: &str = "interactive";

/// Default `mediaType` of an external ad reply (image).
const AD_REPLY_MEDIA_TYPE: u32 = 1;

impl MessageContentBuilder {
    /// Format a general interactive message with at most one media header.
    ///
    /// Media precedence is thumbnail, image, video, document. The thumbnail
    /// is an enrichment and degrades to no media on upload failure; explicit
    /// image, video or document uploads are required and propagate errors.
    pub async fn interactive(&self, envelope: &ContentEnvelope) -> Result<Message> {
        let result = match envelope.interactive.as_ref() {
            Some(content) => self
                .interactive_media(content)
                .await
                .map(|media| format_interactive(content, media)),
            None => Err(StanzaError::invalid("missing interactiveMessage")),
        };
        logged(FORMATTER, result)
    }

    async fn interactive_media(
        &self,
        content: &InteractiveContent,
    ) -> Result<Option<MediaDescriptor>> {
        let uploader = self.uploader.as_ref();

        if let Some(url) = &content.thumbnail {
            let upload = MediaUpload::new(MediaKind::Image, MediaSource::url(url.clone()));
            return match resolve_media(uploader, upload).await {
                Ok(media) => Ok(Some(media)),
                Err(e) => {
                    warn!(formatter = FORMATTER, error = %e, "thumbnail upload failed, sending without media");
                    Ok(None)
                }
            };
        }

        if let Some(image) = &content.image {
            let upload = MediaUpload::new(MediaKind::Image, image.clone());
            return resolve_media(uploader, upload).await.map(Some);
        }

        if let Some(video) = &content.video {
            let upload = MediaUpload::new(MediaKind::Video, video.clone());
            return resolve_media(uploader, upload).await.map(Some);
        }

        if let Some(document) = &content.document {
            let mut upload = MediaUpload::new(MediaKind::Document, document.clone());
            upload.jpeg_thumbnail = content.jpeg_thumbnail.clone();
            let mut media = resolve_media(uploader, upload).await?;
            if let Some(name) = &content.file_name {
                media.content.file_name = Some(name.clone());
            }
            if let Some(mimetype) = &content.mimetype {
                media.content.mimetype = Some(mimetype.clone());
            }
            return Ok(Some(media));
        }

        Ok(None)
    }
}

/// Assemble the interactive message from already resolved media.
pub fn format_interactive(content: &InteractiveContent, media: Option<MediaDescriptor>) -> Message {
    let title = content.header.clone().unwrap_or_default();
    let header = match media {
        Some(media) => media.into_header(title),
        None => InteractiveHeader {
            title,
            has_media_attachment: false,
            ..Default::default()
        },
    };

    let interactive = InteractiveMessage {
        body: Some(TextBlock::new(content.title.clone().unwrap_or_default())),
        footer: Some(TextBlock::new(content.footer.clone().unwrap_or_default())),
        header: Some(header),
        native_flow_message: native_flow(&content.buttons, content.native_flow_message.as_ref()),
        context_info: context_info(
            content.context_info.as_ref(),
            content.external_ad_reply.as_ref(),
        ),
    };

    Message {
        interactive_message: Some(interactive),
        ..Default::default()
    }
}

/// Seed with `buttons`, then let every field set in `overrides` replace the
/// seeded value.
pub fn native_flow(
    buttons: &[NativeFlowButton],
    overrides: Option<&NativeFlowOverride>,
) -> Option<NativeFlowMessage> {
    if buttons.is_empty() && overrides.is_none() {
        return None;
    }

    let mut flow = NativeFlowMessage {
        buttons: buttons.to_vec(),
        ..Default::default()
    };
    if let Some(o) = overrides {
        if let Some(b) = &o.buttons {
            flow.buttons = b.clone();
        }
        if o.message_params_json.is_some() {
            flow.message_params_json = o.message_params_json.clone();
        }
        if o.message_version.is_some() {
            flow.message_version = o.message_version;
        }
    }
    Some(flow)
}

/// Caller context with defaults filled, plus the ad reply card. `None` when
/// neither was supplied.
pub fn context_info(
    supplied: Option<&ContextInfo>,
    ad_reply: Option<&AdReply>,
) -> Option<ContextInfo> {
    if supplied.is_none() && ad_reply.is_none() {
        return None;
    }

    let mut ctx = match supplied {
        Some(c) => {
            let mut c = c.clone();
            c.mentioned_jid.get_or_insert_with(Vec::new);
            c.forwarding_score.get_or_insert(0);
            c.is_forwarded.get_or_insert(false);
            c
        }
        None => ContextInfo::default(),
    };

    if let Some(ad) = ad_reply {
        ctx.external_ad_reply = Some(ExternalAdReplyInfo {
            title: ad.title.clone().unwrap_or_default(),
            body: ad.body.clone().unwrap_or_default(),
            media_type: ad.media_type.unwrap_or(AD_REPLY_MEDIA_TYPE),
            thumbnail_url: ad.thumbnail_url.clone().unwrap_or_default(),
            media_url: ad.media_url.clone().unwrap_or_default(),
            source_url: ad.source_url.clone().unwrap_or_default(),
            show_ad_attribution: ad.show_ad_attribution.unwrap_or(false),
            render_larger_thumbnail: ad.render_larger_thumbnail.unwrap_or(false),
        });
    }
    Some(ctx)
}
