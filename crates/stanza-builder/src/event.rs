use chrono::Utc;
use stanza_core::config::EventDefaults;
use stanza_core::{Jid, Result, StanzaError};
use stanza_proto::{
    ContextInfo, DeviceListMetadata, EventMessage, ForwardedNewsletterMessageInfo,
    LocationMessage, Message, MessageContextInfo, Quoted,
};

use crate::builder::{logged, MessageContentBuilder};
use crate::content::{ContentEnvelope, EventDetails};
use crate::transport::{BuildOptions, RelayOptions, SentMessage};

const FORMATTER: &str = "event";
const DEVICE_LIST_METADATA_VERSION: u32 = 2;

impl MessageContentBuilder {
    /// Format a calendar event inside a view-once envelope and relay it.
    pub async fn event(
        &self,
        jid: &Jid,
        envelope: &ContentEnvelope,
        quoted: Option<&Quoted>,
    ) -> Result<SentMessage> {
        logged(FORMATTER, self.relay_event(jid, envelope, quoted).await)
    }

    async fn relay_event(
        &self,
        jid: &Jid,
        envelope: &ContentEnvelope,
        quoted: Option<&Quoted>,
    ) -> Result<SentMessage> {
        let details = envelope
            .event
            .as_ref()
            .ok_or_else(|| StanzaError::invalid("missing eventMessage"))?;
        let event = format_event(details, jid, Utc::now().timestamp(), &self.config.event)?;

        let ticket_id = hex::encode(self.secrets.random_bytes(self.config.secrets.ticket_id));
        let context = MessageContextInfo {
            device_list_metadata: Some(DeviceListMetadata {}),
            device_list_metadata_version: Some(DEVICE_LIST_METADATA_VERSION),
            message_secret: Some(self.message_secret()),
            support_payload: Some(support_payload(&ticket_id)),
            ..Default::default()
        };
        let content = Message {
            message_context_info: Some(context),
            event_message: Some(event),
            ..Default::default()
        }
        .into_view_once();

        let options = BuildOptions {
            user_jid: None,
            quoted: quoted.cloned(),
        };
        let built = self.factory.from_content(jid, content, &options).await?;
        let receipt = self
            .relay
            .relay(jid, &built.message, &RelayOptions::with_id(built.key.id.clone()))
            .await?;

        Ok(SentMessage {
            key: built.key,
            message: built.message,
            receipt,
        })
    }
}

/// Map event details onto the wire shape.
///
/// `now` is unix seconds; it fills a missing start time and anchors the
/// default end time. Numeric-string times are parsed, anything else is
/// rejected as invalid input.
pub fn format_event(
    details: &EventDetails,
    jid: &Jid,
    now: i64,
    defaults: &EventDefaults,
) -> Result<EventMessage> {
    let start_time = match &details.start_time {
        Some(t) => t.to_seconds()?,
        None => now,
    };
    let end_time = match &details.end_time {
        Some(t) => t.to_seconds()?,
        None => now + defaults.duration_secs,
    };

    let location = details.location.clone().unwrap_or_else(|| LocationMessage {
        degrees_latitude: 0.0,
        degrees_longitude: 0.0,
        name: Some(defaults.location_name.clone()),
    });

    Ok(EventMessage {
        context_info: Some(ContextInfo {
            mentioned_jid: Some(vec![jid.clone()]),
            participant: Some(jid.clone()),
            remote_jid: Some(Jid::status_broadcast()),
            forwarded_newsletter_message_info: Some(ForwardedNewsletterMessageInfo {
                newsletter_jid: Jid::from(defaults.newsletter_jid.as_str()),
                newsletter_name: defaults.newsletter_name.clone(),
                server_message_id: defaults.newsletter_server_message_id,
                ..Default::default()
            }),
            ..Default::default()
        }),
        is_canceled: details.is_canceled.unwrap_or(false),
        name: details.name.clone(),
        description: details.description.clone(),
        location,
        join_link: details.join_link.clone().unwrap_or_default(),
        start_time,
        end_time,
        extra_guests_allowed: details.extra_guests_allowed != Some(false),
    })
}

fn support_payload(ticket_id: &str) -> String {
    serde_json::json!({
        "version": 2,
        "is_ai_message": true,
        "should_show_system_message": true,
        "ticket_id": ticket_id,
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TimeValue;

    const NOW: i64 = 1_750_000_000;

    fn jid() -> Jid {
        Jid::from("628111@s.whatsapp.net")
    }

    #[test]
    fn string_start_time_is_parsed() {
        let details = EventDetails {
            name: "Launch".into(),
            start_time: Some(TimeValue::from("1700000000")),
            ..Default::default()
        };
        let event = format_event(&details, &jid(), NOW, &EventDefaults::default()).unwrap();
        assert_eq!(event.start_time, 1_700_000_000);
    }

    #[test]
    fn missing_times_default_around_now() {
        let event = format_event(
            &EventDetails::default(),
            &jid(),
            NOW,
            &EventDefaults::default(),
        )
        .unwrap();
        assert_eq!(event.start_time, NOW);
        assert_eq!(event.end_time, NOW + 3600);
    }

    #[test]
    fn guests_allowed_unless_explicitly_false() {
        let defaults = EventDefaults::default();
        let mut details = EventDetails::default();
        assert!(format_event(&details, &jid(), NOW, &defaults).unwrap().extra_guests_allowed);

        details.extra_guests_allowed = Some(true);
        assert!(format_event(&details, &jid(), NOW, &defaults).unwrap().extra_guests_allowed);

        details.extra_guests_allowed = Some(false);
        assert!(!format_event(&details, &jid(), NOW, &defaults).unwrap().extra_guests_allowed);
    }

    #[test]
    fn defaults_for_location_link_and_newsletter_stub() {
        let event = format_event(
            &EventDetails::default(),
            &jid(),
            NOW,
            &EventDefaults::default(),
        )
        .unwrap();

        assert_eq!(event.location.name.as_deref(), Some("Location"));
        assert_eq!(event.join_link, "");
        assert!(!event.is_canceled);
        let ctx = event.context_info.unwrap();
        assert_eq!(ctx.remote_jid, Some(Jid::status_broadcast()));
        let stub = ctx.forwarded_newsletter_message_info.unwrap();
        assert_eq!(stub.newsletter_jid.as_str(), "120363297591152843@newsletter");
        assert_eq!(stub.server_message_id, 1);
    }

    #[test]
    fn garbage_time_is_rejected() {
        let details = EventDetails {
            end_time: Some(TimeValue::from("soon")),
            ..Default::default()
        };
        let err = format_event(&details, &jid(), NOW, &EventDefaults::default()).unwrap_err();
        assert_eq!(err.code(), "INVALID_INPUT");
    }

    #[test]
    fn support_payload_carries_ticket() {
        let payload: serde_json::Value =
            serde_json::from_str(&support_payload("abcd")).unwrap();
        assert_eq!(payload["version"], 2);
        assert_eq!(payload["ticket_id"], "abcd");
        assert_eq!(payload["is_ai_message"], true);
    }
}
