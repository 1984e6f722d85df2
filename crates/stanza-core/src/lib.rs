pub mod config;
pub mod error;
pub mod types;

pub use config::StanzaConfig;
pub use error::{Result, StanzaError};
pub use types::{Jid, MessageId};
