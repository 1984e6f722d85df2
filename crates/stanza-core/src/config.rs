use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::types::PLACEHOLDER_USER_JID;

pub const DEFAULT_CURRENCY: &str = "IDR";
pub const DEFAULT_BACKGROUND_ID: &str = "DEFAULT";
pub const DEFAULT_BACKGROUND_ARGB: u32 = 0xFFF0_F0F0;
pub const MESSAGE_SECRET_BYTES: usize = 32;
pub const TICKET_ID_BYTES: usize = 16;
pub const DEFAULT_EVENT_DURATION_SECS: i64 = 3600;

/// Formatter defaults (stanza.toml + STANZA_* env overrides).
///
/// Every field has a default so an absent file is a valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StanzaConfig {
    #[serde(default)]
    pub payment: PaymentDefaults,
    #[serde(default)]
    pub product: ProductDefaults,
    #[serde(default)]
    pub event: EventDefaults,
    #[serde(default)]
    pub secrets: SecretSizes,
}

/// Values applied to payment requests that omit them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentDefaults {
    /// ISO 4217 code used when the request has no currency.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Payer address used when the request has no `from`.
    #[serde(default = "default_placeholder_jid")]
    pub request_from: String,
    #[serde(default = "default_background_id")]
    pub background_id: String,
    #[serde(default = "default_background_argb")]
    pub background_argb: u32,
}

impl Default for PaymentDefaults {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            request_from: default_placeholder_jid(),
            background_id: default_background_id(),
            background_argb: default_background_argb(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDefaults {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_placeholder_jid")]
    pub business_owner_jid: String,
}

impl Default for ProductDefaults {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            business_owner_jid: default_placeholder_jid(),
        }
    }
}

/// Calendar event defaults and the newsletter stub attached to every event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDefaults {
    /// Event length in seconds when no end time is given.
    #[serde(default = "default_event_duration")]
    pub duration_secs: i64,
    #[serde(default = "default_location_name")]
    pub location_name: String,
    #[serde(default = "default_newsletter_jid")]
    pub newsletter_jid: String,
    #[serde(default = "default_newsletter_name")]
    pub newsletter_name: String,
    #[serde(default = "default_server_message_id")]
    pub newsletter_server_message_id: u32,
}

impl Default for EventDefaults {
    fn default() -> Self {
        Self {
            duration_secs: default_event_duration(),
            location_name: default_location_name(),
            newsletter_jid: default_newsletter_jid(),
            newsletter_name: default_newsletter_name(),
            newsletter_server_message_id: default_server_message_id(),
        }
    }
}

/// Byte lengths for per-message random material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretSizes {
    #[serde(default = "default_message_secret")]
    pub message_secret: usize,
    #[serde(default = "default_ticket_id")]
    pub ticket_id: usize,
}

impl Default for SecretSizes {
    fn default() -> Self {
        Self {
            message_secret: default_message_secret(),
            ticket_id: default_ticket_id(),
        }
    }
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}
fn default_placeholder_jid() -> String {
    PLACEHOLDER_USER_JID.to_string()
}
fn default_background_id() -> String {
    DEFAULT_BACKGROUND_ID.to_string()
}
fn default_background_argb() -> u32 {
    DEFAULT_BACKGROUND_ARGB
}
fn default_event_duration() -> i64 {
    DEFAULT_EVENT_DURATION_SECS
}
fn default_location_name() -> String {
    "Location".to_string()
}
fn default_newsletter_jid() -> String {
    "120363297591152843@newsletter".to_string()
}
fn default_newsletter_name() -> String {
    "shenvn.".to_string()
}
fn default_server_message_id() -> u32 {
    1
}
fn default_message_secret() -> usize {
    MESSAGE_SECRET_BYTES
}
fn default_ticket_id() -> usize {
    TICKET_ID_BYTES
}

impl StanzaConfig {
    /// Load config from a TOML file with STANZA_* env var overrides.
    ///
    /// Path resolution: explicit argument, then `STANZA_CONFIG`, then
    /// `~/.stanza/stanza.toml`. Nested keys use a double underscore, e.g.
    /// `STANZA_PAYMENT__CURRENCY=USD`.
    pub fn load(config_path: Option<&str>) -> crate::error::Result<Self> {
        let path = config_path
            .map(String::from)
            .or_else(|| std::env::var("STANZA_CONFIG").ok())
            .unwrap_or_else(default_config_path);

        let config: StanzaConfig = Figment::new()
            .merge(Toml::file(&path))
            .merge(Env::prefixed("STANZA_").ignore(&["CONFIG"]).split("__"))
            .extract()
            .map_err(|e| crate::error::StanzaError::Config(e.to_string()))?;

        tracing::debug!(path = %path, "formatter config loaded");
        Ok(config)
    }
}

fn default_config_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.stanza/stanza.toml", home)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn missing_file_yields_defaults() {
        Jail::expect_with(|jail| {
            let path = jail.directory().join("absent.toml");
            let cfg = StanzaConfig::load(path.to_str()).expect("defaults load");
            assert_eq!(cfg.payment.currency, "IDR");
            assert_eq!(cfg.payment.request_from, "0@s.whatsapp.net");
            assert_eq!(cfg.payment.background_argb, 0xFFF0F0F0);
            assert_eq!(cfg.event.duration_secs, 3600);
            assert_eq!(cfg.secrets.message_secret, 32);
            assert_eq!(cfg.secrets.ticket_id, 16);
            Ok(())
        });
    }

    #[test]
    fn file_and_env_override_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "stanza.toml",
                r#"
                [payment]
                currency = "USD"

                [event]
                duration_secs = 600
                "#,
            )?;
            jail.set_env("STANZA_PRODUCT__CURRENCY", "EUR");

            let cfg = StanzaConfig::load(Some("stanza.toml")).expect("config loads");
            assert_eq!(cfg.payment.currency, "USD");
            assert_eq!(cfg.payment.background_id, "DEFAULT");
            assert_eq!(cfg.product.currency, "EUR");
            assert_eq!(cfg.event.duration_secs, 600);
            Ok(())
        });
    }
}
