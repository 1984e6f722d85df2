use stanza_core::config::ProductDefaults;
use stanza_core::{Jid, Result, StanzaError};
use stanza_proto::{
    InteractiveHeader, InteractiveMessage, MediaMessage, Message, NativeFlowMessage,
    ProductMessage, ProductSnapshot, TextBlock,
};
use tracing::warn;

use crate::builder::{logged, MessageContentBuilder};
use crate::content::{ContentEnvelope, ProductCard};
use crate::media::{resolve_media, MediaKind, MediaUpload};

const FORMATTER: &str = "product";

impl MessageContentBuilder {
    /// Format a product card wrapped in a view-once envelope.
    ///
    /// A failed thumbnail upload is logged and the card goes out without an
    /// image.
    pub async fn product(&self, envelope: &ContentEnvelope) -> Result<Message> {
        let result = match envelope.product.as_ref() {
            Some(card) => {
                let image = self.product_image(card).await;
                Ok(format_product(card, image, &self.config.product))
            }
            None => Err(StanzaError::invalid("missing productMessage")),
        };
        logged(FORMATTER, result)
    }

    async fn product_image(&self, card: &ProductCard) -> Option<MediaMessage> {
        let source = card.thumbnail.clone()?;
        let upload = MediaUpload::new(MediaKind::Image, source);
        match resolve_media(self.uploader.as_ref(), upload).await {
            Ok(media) => Some(media.content),
            Err(e) => {
                warn!(formatter = FORMATTER, error = %e, "thumbnail upload failed, sending card without image");
                None
            }
        }
    }
}

/// Map a product card onto the wire shape. `image` is the already resolved
/// thumbnail, if any.
pub fn format_product(
    card: &ProductCard,
    image: Option<MediaMessage>,
    defaults: &ProductDefaults,
) -> Message {
    let has_image = image.is_some();
    let product = ProductSnapshot {
        product_image_count: u32::from(has_image),
        product_image: image,
        product_id: card.product_id.clone(),
        title: card.title.clone(),
        description: card.description.clone(),
        currency_code: card
            .currency_code
            .clone()
            .unwrap_or_else(|| defaults.currency.clone()),
        price_amount1000: card.price_amount1000,
        retailer_id: card.retailer_id.clone(),
        url: card.url.clone(),
    };

    let interactive = InteractiveMessage {
        body: Some(TextBlock::new(card.body.clone())),
        footer: Some(TextBlock::new(card.footer.clone())),
        header: Some(InteractiveHeader {
            title: card.title.clone(),
            has_media_attachment: has_image,
            product_message: Some(ProductMessage {
                product,
                business_owner_jid: Jid::from(defaults.business_owner_jid.as_str()),
            }),
            ..Default::default()
        }),
        native_flow_message: Some(NativeFlowMessage {
            buttons: card.buttons.clone(),
            ..Default::default()
        }),
        context_info: None,
    };

    Message {
        interactive_message: Some(interactive),
        ..Default::default()
    }
    .into_view_once()
}
