use serde::{Deserialize, Serialize};
use std::fmt;

/// Server suffix for individual user addresses.
pub const USER_SERVER: &str = "s.whatsapp.net";
/// Placeholder user address used as payer / business owner when none is given.
pub const PLACEHOLDER_USER_JID: &str = "0@s.whatsapp.net";
/// Broadcast address that status updates are posted to.
pub const STATUS_BROADCAST_JID: &str = "status@broadcast";

/// Conversation or participant address, e.g. `628123@s.whatsapp.net` or
/// `1203630@g.us`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Jid(pub String);

impl Jid {
    /// Build a user address from the local part of a generated message id.
    ///
    /// Anything after an `@` in `id` is discarded before the user server is
    /// appended.
    pub fn user_from_id(id: &MessageId) -> Self {
        let local = id.as_str().split('@').next().unwrap_or_default();
        Self(format!("{}@{}", local, USER_SERVER))
    }

    pub fn placeholder_user() -> Self {
        Self(PLACEHOLDER_USER_JID.to_string())
    }

    pub fn status_broadcast() -> Self {
        Self(STATUS_BROADCAST_JID.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Jid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Jid {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Jid {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Transport-unique message identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub String);

impl MessageId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MessageId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MessageId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
