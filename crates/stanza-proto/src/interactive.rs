use serde::{Deserialize, Serialize};

use crate::commerce::ProductMessage;
use crate::media::{ContextInfo, MediaMessage};

/// Button / native-flow message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractiveMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<InteractiveHeader>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<TextBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<TextBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_flow_message: Option<NativeFlowMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_info: Option<ContextInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    pub text: String,
}

impl TextBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Header of an interactive message. At most one media field is set.
/// `has_media_attachment` is true when a media field is set, or when a
/// `product_message` carries a product image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractiveHeader {
    pub title: String,
    pub has_media_attachment: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_message: Option<MediaMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_message: Option<MediaMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_message: Option<MediaMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_message: Option<ProductMessage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeFlowMessage {
    #[serde(default)]
    pub buttons: Vec<NativeFlowButton>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_params_json: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_version: Option<u32>,
}

/// One native-flow button, e.g. `quick_reply` with `{"display_text":"Yes","id":"y"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeFlowButton {
    pub name: String,
    pub button_params_json: String,
}
