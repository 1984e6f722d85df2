//! Serde model of the outbound message schema.
//!
//! Field names follow the wire's camelCase JSON form. Optional fields are
//! omitted when unset; byte fields travel as standard base64 strings.

pub mod bytes;
pub mod commerce;
pub mod event;
pub mod interactive;
pub mod key;
pub mod media;
pub mod message;
pub mod meta;

pub use commerce::{PaymentBackground, ProductMessage, ProductSnapshot, RequestPaymentMessage};
pub use event::{EventMessage, LocationMessage, PollResultSnapshotMessage, PollVote};
pub use interactive::{
    InteractiveHeader, InteractiveMessage, NativeFlowButton, NativeFlowMessage, TextBlock,
};
pub use key::{MessageKey, Quoted, WireMessage};
pub use media::{ContextInfo, ExtendedTextMessage, ExternalAdReplyInfo, MediaMessage};
pub use message::{AlbumMessage, FutureProofMessage, Message};
pub use meta::{
    BusinessMessageForwardInfo, DataSharingContext, DeviceListMetadata, DisappearingMode,
    ForwardedNewsletterMessageInfo, MessageAssociation, MessageContextInfo,
};
