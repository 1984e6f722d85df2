//! Caller-facing input shapes, one per message kind.
//!
//! JSON field names follow the content objects callers already pass around
//! (`requestPaymentMessage`, `albumMessage`, …).

use serde::{Deserialize, Serialize};
use stanza_core::{Jid, Result, StanzaError};
use stanza_proto::{
    ContextInfo, LocationMessage, MediaMessage, Message, NativeFlowButton, PaymentBackground,
};

use crate::media::{MediaKind, MediaSource, MediaUpload};

/// Tagged union over the seven supported kinds, discriminated by which field
/// is set. See [`crate::detect::detect`] for the priority order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentEnvelope {
    #[serde(rename = "requestPaymentMessage", default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<PaymentRequest>,
    #[serde(rename = "productMessage", default, skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductCard>,
    #[serde(rename = "interactiveMessage", default, skip_serializing_if = "Option::is_none")]
    pub interactive: Option<InteractiveContent>,
    #[serde(rename = "albumMessage", default, skip_serializing_if = "Option::is_none")]
    pub album: Option<Vec<AlbumItem>>,
    #[serde(rename = "eventMessage", default, skip_serializing_if = "Option::is_none")]
    pub event: Option<EventDetails>,
    #[serde(rename = "pollResultMessage", default, skip_serializing_if = "Option::is_none")]
    pub poll_result: Option<PollResult>,
    #[serde(rename = "groupStatusMessage", default, skip_serializing_if = "Option::is_none")]
    pub group_story: Option<GroupStory>,
    /// Author of the content, used as quote participant when the quoted key
    /// has none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<Jid>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    #[serde(default)]
    pub expiry: Option<i64>,
    /// Amount in thousandths of the currency unit.
    #[serde(default)]
    pub amount: Option<u64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub from: Option<Jid>,
    #[serde(default)]
    pub note: Option<String>,
    /// Already-uploaded sticker; takes precedence over `note`.
    #[serde(default)]
    pub sticker: Option<MediaMessage>,
    #[serde(default)]
    pub background: Option<PaymentBackground>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: Option<MediaSource>,
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub retailer_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub footer: String,
    #[serde(default)]
    pub buttons: Vec<NativeFlowButton>,
    #[serde(default)]
    pub price_amount1000: Option<i64>,
    #[serde(default)]
    pub currency_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractiveContent {
    /// Body text.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub footer: Option<String>,
    /// Header title.
    #[serde(default)]
    pub header: Option<String>,
    /// Remote image URL; highest media precedence.
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub image: Option<MediaSource>,
    #[serde(default)]
    pub video: Option<MediaSource>,
    #[serde(default)]
    pub document: Option<MediaSource>,
    /// Document-only overrides.
    #[serde(default)]
    pub mimetype: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub jpeg_thumbnail: Option<MediaSource>,
    #[serde(default)]
    pub context_info: Option<ContextInfo>,
    #[serde(default)]
    pub external_ad_reply: Option<AdReply>,
    #[serde(default)]
    pub buttons: Vec<NativeFlowButton>,
    #[serde(default)]
    pub native_flow_message: Option<NativeFlowOverride>,
}

/// Partial native-flow structure; every set field replaces the seeded one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeFlowOverride {
    #[serde(default)]
    pub buttons: Option<Vec<NativeFlowButton>>,
    #[serde(default)]
    pub message_params_json: Option<String>,
    #[serde(default)]
    pub message_version: Option<u32>,
}

/// Partial external-ad-reply card; unset fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdReply {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub media_type: Option<u32>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub show_ad_attribution: Option<bool>,
    #[serde(default)]
    pub render_larger_thumbnail: Option<bool>,
}

/// One album member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AlbumItem {
    Image {
        image: MediaSource,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    Video {
        video: MediaSource,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
}

impl AlbumItem {
    pub fn image(source: MediaSource) -> Self {
        AlbumItem::Image {
            image: source,
            caption: None,
        }
    }

    pub fn video(source: MediaSource) -> Self {
        AlbumItem::Video {
            video: source,
            caption: None,
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            AlbumItem::Image { .. } => MediaKind::Image,
            AlbumItem::Video { .. } => MediaKind::Video,
        }
    }

    pub fn to_upload(&self) -> MediaUpload {
        match self {
            AlbumItem::Image { image, caption } => {
                MediaUpload::new(MediaKind::Image, image.clone()).with_caption(caption.clone())
            }
            AlbumItem::Video { video, caption } => {
                MediaUpload::new(MediaKind::Video, video.clone()).with_caption(caption.clone())
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<LocationMessage>,
    #[serde(default)]
    pub join_link: Option<String>,
    #[serde(default)]
    pub start_time: Option<TimeValue>,
    #[serde(default)]
    pub end_time: Option<TimeValue>,
    #[serde(default)]
    pub is_canceled: Option<bool>,
    #[serde(default)]
    pub extra_guests_allowed: Option<bool>,
}

/// Unix seconds, either as a number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeValue {
    Seconds(i64),
    Text(String),
}

impl TimeValue {
    pub fn to_seconds(&self) -> Result<i64> {
        match self {
            TimeValue::Seconds(s) => Ok(*s),
            TimeValue::Text(t) => t.trim().parse::<i64>().map_err(|_| {
                StanzaError::invalid(format!("event time {t:?} is not an integer"))
            }),
        }
    }
}

impl From<i64> for TimeValue {
    fn from(s: i64) -> Self {
        TimeValue::Seconds(s)
    }
}

impl From<&str> for TimeValue {
    fn from(s: &str) -> Self {
        TimeValue::Text(s.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollResult {
    pub name: String,
    #[serde(default)]
    pub poll_votes: Vec<PollOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollOption {
    pub option_name: String,
    pub option_vote_count: VoteCount,
}

/// Largest float magnitude printed as a whole number without loss.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

/// A vote count as supplied: any JSON number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VoteCount {
    Number(serde_json::Number),
    Text(String),
}

impl VoteCount {
    /// Text form sent on the wire. Whole-valued floats drop their fraction,
    /// so `7.0` becomes `"7"`.
    pub fn into_text(self) -> String {
        match self {
            VoteCount::Number(n) => match n.as_f64() {
                Some(f)
                    if !n.is_i64()
                        && !n.is_u64()
                        && f.fract() == 0.0
                        && f.abs() <= MAX_EXACT_FLOAT =>
                {
                    format!("{}", f as i64)
                }
                _ => n.to_string(),
            },
            VoteCount::Text(t) => t,
        }
    }
}

impl From<u64> for VoteCount {
    fn from(n: u64) -> Self {
        VoteCount::Number(n.into())
    }
}

/// A status update for a group: either a ready wire message or raw content
/// that still needs normalising.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupStory {
    Prebuilt { message: Message },
    Content(StoryContent),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryContent {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub image: Option<MediaSource>,
    #[serde(default)]
    pub video: Option<MediaSource>,
    #[serde(default)]
    pub caption: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_from_caller_json() {
        let json = r#"{
            "albumMessage": [
                {"image": {"url": "https://x.test/1.jpg"}, "caption": "one"},
                {"video": {"url": "https://x.test/2.mp4"}}
            ],
            "sender": "628111@s.whatsapp.net"
        }"#;
        let env: ContentEnvelope = serde_json::from_str(json).unwrap();
        let items = env.album.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind(), MediaKind::Image);
        assert_eq!(items[1].kind(), MediaKind::Video);
        assert_eq!(env.sender.unwrap().as_str(), "628111@s.whatsapp.net");
    }

    #[test]
    fn time_and_vote_count_accept_both_forms() {
        let t: TimeValue = serde_json::from_str(r#""1700000000""#).unwrap();
        assert_eq!(t.to_seconds().unwrap(), 1_700_000_000);
        let t: TimeValue = serde_json::from_str("1700000000").unwrap();
        assert_eq!(t.to_seconds().unwrap(), 1_700_000_000);

        let v: VoteCount = serde_json::from_str("7").unwrap();
        assert_eq!(v.into_text(), "7");
        let v: VoteCount = serde_json::from_str(r#""12""#).unwrap();
        assert_eq!(v.into_text(), "12");
    }

    #[test]
    fn vote_count_accepts_any_json_number() {
        let v: VoteCount = serde_json::from_str("7.0").unwrap();
        assert_eq!(v.into_text(), "7");
        let v: VoteCount = serde_json::from_str("-1").unwrap();
        assert_eq!(v.into_text(), "-1");
        let v: VoteCount = serde_json::from_str("2.5").unwrap();
        assert_eq!(v.into_text(), "2.5");
        assert_eq!(VoteCount::from(7).into_text(), "7");

        let json = r#"{"optionName":"Yes","optionVoteCount":7.0}"#;
        let option: PollOption = serde_json::from_str(json).unwrap();
        assert_eq!(option.option_vote_count.into_text(), "7");
    }

    #[test]
    fn non_numeric_time_is_invalid_input() {
        let err = TimeValue::from("tomorrow").to_seconds().unwrap_err();
        assert_eq!(err.code(), "INVALID_INPUT");
    }

    #[test]
    fn story_with_message_is_prebuilt() {
        let json = r#"{"message": {"conversation": "hi"}}"#;
        let story: GroupStory = serde_json::from_str(json).unwrap();
        assert!(matches!(story, GroupStory::Prebuilt { .. }));

        let json = r#"{"text": "hello group"}"#;
        let story: GroupStory = serde_json::from_str(json).unwrap();
        assert!(matches!(story, GroupStory::Content(_)));
    }
}
