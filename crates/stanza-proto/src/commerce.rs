use serde::{Deserialize, Serialize};
use stanza_core::Jid;

use crate::media::MediaMessage;
use crate::message::Message;

/// Request for money from the recipient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPaymentMessage {
    /// Quoted text or sticker shown under the request. Absent when there is
    /// no note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_message: Option<Box<Message>>,
    #[serde(rename = "currencyCodeIso4217")]
    pub currency_code_iso4217: String,
    /// Amount in thousandths of the currency unit.
    pub amount1000: u64,
    pub request_from: Jid,
    pub expiry_timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<PaymentBackground>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentBackground {
    pub id: String,
    pub placeholder_argb: u32,
}

/// Catalogue product carried in an interactive header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMessage {
    pub product: ProductSnapshot,
    pub business_owner_jid: Jid,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_image: Option<MediaMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    pub title: String,
    pub description: String,
    pub currency_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_amount1000: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retailer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub product_image_count: u32,
}
