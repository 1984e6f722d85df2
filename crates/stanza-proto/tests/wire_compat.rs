// Verify the JSON shape matches what the message codec expects.
// Field names are camelCase and unset optionals must not appear at all.

use stanza_core::{Jid, MessageId};
use stanza_proto::{
    AlbumMessage, ForwardedNewsletterMessageInfo, FutureProofMessage, InteractiveHeader, InteractiveMessage, MediaMessage,
    Message, MessageAssociation, MessageContextInfo, MessageKey, PaymentBackground, PollVote,
    RequestPaymentMessage, TextBlock, WireMessage,
};

#[test]
fn payment_request_field_names() {
    let msg = Message {
        request_payment_message: Some(RequestPaymentMessage {
            note_message: None,
            currency_code_iso4217: "USD".into(),
            amount1000: 5000,
            request_from: Jid::placeholder_user(),
            expiry_timestamp: 3600,
            background: Some(PaymentBackground {
                id: "DEFAULT".into(),
                placeholder_argb: 0xFFF0F0F0,
            }),
        }),
        ..Default::default()
    };
    let json = serde_json::to_string(&msg).unwrap();

    assert!(json.contains(r#""requestPaymentMessage""#));
    assert!(json.contains(r#""currencyCodeIso4217":"USD""#));
    assert!(json.contains(r#""amount1000":5000"#));
    assert!(json.contains(r#""requestFrom":"0@s.whatsapp.net""#));
    assert!(json.contains(r#""placeholderArgb":4293980400"#));
    // no note → field absent, not null
    assert!(!json.contains("noteMessage"));
    assert!(!json.contains("null"));
}

#[test]
fn message_secret_is_base64() {
    let msg = Message {
        message_context_info: Some(MessageContextInfo {
            message_secret: Some(vec![0u8; 32]),
            ..Default::default()
        }),
        album_message: Some(AlbumMessage {
            expected_image_count: 2,
            expected_video_count: 1,
        }),
        ..Default::default()
    };
    let json = serde_json::to_string(&msg).unwrap();

    assert!(json.contains(r#""messageSecret":"AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=""#));
    assert!(json.contains(r#""expectedImageCount":2"#));
    assert!(json.contains(r#""expectedVideoCount":1"#));

    let back: Message = serde_json::from_str(&json).unwrap();
    assert_eq!(back, msg);
}

#[test]
fn parent_association_embeds_key() {
    let parent = MessageKey::outgoing(Jid::from("123@g.us"), MessageId::from("3EB0PARENT"));
    let info = MessageContextInfo {
        message_association: Some(MessageAssociation::album_member(parent)),
        ..Default::default()
    };
    let json = serde_json::to_string(&info).unwrap();

    assert!(json.contains(r#""associationType":1"#));
    assert!(json.contains(
        r#""parentMessageKey":{"remoteJid":"123@g.us","fromMe":true,"id":"3EB0PARENT"}"#
    ));
}

#[test]
fn interactive_header_without_media() {
    let msg = InteractiveMessage {
        header: Some(InteractiveHeader {
            title: "Menu".into(),
            has_media_attachment: false,
            ..Default::default()
        }),
        body: Some(TextBlock::new("Pick one")),
        footer: Some(TextBlock::new("")),
        ..Default::default()
    };
    let json = serde_json::to_string(&msg).unwrap();

    assert!(json.contains(r#""hasMediaAttachment":false"#));
    assert!(json.contains(r#""body":{"text":"Pick one"}"#));
    assert!(!json.contains("imageMessage"));
    assert!(!json.contains("contextInfo"));
}

#[test]
fn group_status_v2_nests_message() {
    let inner = Message {
        image_message: Some(MediaMessage {
            url: Some("https://mmg.example/abc".into()),
            caption: Some("hello".into()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let msg = Message {
        group_status_message_v2: Some(FutureProofMessage::new(inner)),
        ..Default::default()
    };
    let json = serde_json::to_string(&msg).unwrap();

    assert!(json.starts_with(r#"{"groupStatusMessageV2":{"message":{"imageMessage""#));
}

#[test]
fn poll_vote_count_is_text() {
    let vote = PollVote {
        option_name: "Yes".into(),
        option_vote_count: "7".into(),
    };
    let json = serde_json::to_string(&vote).unwrap();
    assert_eq!(json, r#"{"optionName":"Yes","optionVoteCount":"7"}"#);
}

#[test]
fn wire_message_parses_factory_output() {
    let json = r#"{
        "key": {"remoteJid":"123@s.whatsapp.net","fromMe":true,"id":"3EB0AA"},
        "message": {"conversation":"hi"}
    }"#;
    let wire: WireMessage = serde_json::from_str(json).unwrap();

    assert_eq!(wire.key.id.as_str(), "3EB0AA");
    assert!(wire.key.from_me);
    assert!(wire.key.participant.is_none());
    assert_eq!(wire.message.content_type(), Some("conversation"));
}

#[test]
fn newsletter_stub_from_defaults_omits_optionals() {
    let stub = ForwardedNewsletterMessageInfo {
        newsletter_jid: Jid::from("120363297591152843@newsletter"),
        server_message_id: 1,
        ..Default::default()
    };
    let json = serde_json::to_string(&stub).unwrap();
    assert_eq!(
        json,
        r#"{"newsletterJid":"120363297591152843@newsletter","serverMessageId":1,"newsletterName":""}"#
    );

    let key = MessageKey::default();
    assert_eq!(key.id, MessageId::default());
    assert!(key.remote_jid.is_none());
}
