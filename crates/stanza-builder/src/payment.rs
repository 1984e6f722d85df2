use stanza_core::config::PaymentDefaults;
use stanza_core::{Jid, Result, StanzaError};
use stanza_proto::{
    ContextInfo, ExtendedTextMessage, Message, PaymentBackground, Quoted, RequestPaymentMessage,
};

use crate::builder::{logged, MessageContentBuilder};
use crate::content::{ContentEnvelope, PaymentRequest};

const FORMATTER: &str = "payment";

impl MessageContentBuilder {
    /// Format a payment request. No upload, no relay.
    pub fn payment(&self, envelope: &ContentEnvelope, quoted: Option<&Quoted>) -> Result<Message> {
        let result = envelope
            .payment
            .as_ref()
            .ok_or_else(|| StanzaError::invalid("missing requestPaymentMessage"))
            .map(|request| {
                format_payment(
                    request,
                    quoted,
                    envelope.sender.as_ref(),
                    &self.config.payment,
                )
            });
        logged(FORMATTER, result)
    }
}

/// Map a payment request onto the wire shape, applying `defaults`.
pub fn format_payment(
    request: &PaymentRequest,
    quoted: Option<&Quoted>,
    sender: Option<&Jid>,
    defaults: &PaymentDefaults,
) -> Message {
    let note = note_message(request, quoted, sender);

    let background = request.background.clone().unwrap_or_else(|| PaymentBackground {
        id: defaults.background_id.clone(),
        placeholder_argb: defaults.background_argb,
    });

    Message {
        request_payment_message: Some(RequestPaymentMessage {
            note_message: note.map(Box::new),
            currency_code_iso4217: request
                .currency
                .clone()
                .unwrap_or_else(|| defaults.currency.clone()),
            amount1000: request.amount.unwrap_or(0),
            request_from: request
                .from
                .clone()
                .unwrap_or_else(|| Jid::from(defaults.request_from.as_str())),
            expiry_timestamp: request.expiry.unwrap_or(0),
            background: Some(background),
        }),
        ..Default::default()
    }
}

/// Sticker beats text; neither means no note at all.
fn note_message(
    request: &PaymentRequest,
    quoted: Option<&Quoted>,
    sender: Option<&Jid>,
) -> Option<Message> {
    if let Some(sticker) = &request.sticker {
        let mut sticker = sticker.clone();
        sticker.context_info = Some(Box::new(quote_context(quoted, sender)));
        return Some(Message {
            sticker_message: Some(sticker),
            ..Default::default()
        });
    }

    request.note.as_ref().map(|text| Message {
        extended_text_message: Some(ExtendedTextMessage {
            text: text.clone(),
            context_info: Some(quote_context(quoted, sender)),
        }),
        ..Default::default()
    })
}

fn quote_context(quoted: Option<&Quoted>, sender: Option<&Jid>) -> ContextInfo {
    ContextInfo {
        stanza_id: quoted.map(|q| q.key.id.to_string()),
        participant: quoted
            .and_then(|q| q.key.participant.clone())
            .or_else(|| sender.cloned()),
        quoted_message: quoted.and_then(|q| q.message.clone()).map(Box::new),
        ..Default::default()
    }
}
