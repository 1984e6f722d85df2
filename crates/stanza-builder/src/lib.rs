//! Outbound message content builder.
//!
//! Formats payment requests, product cards, interactive messages, media
//! albums, calendar events, poll results and group stories into the wire
//! schema of [`stanza_proto`], delegating upload, keying and delivery to the
//! collaborators in [`transport`].

pub mod album;
pub mod builder;
pub mod content;
pub mod detect;
pub mod event;
pub mod interactive;
pub mod media;
pub mod payment;
pub mod poll;
pub mod product;
pub mod story;
pub mod templates;
pub mod transport;

pub use builder::{MessageContentBuilder, Outcome};
pub use content::{
    AdReply, AlbumItem, ContentEnvelope, EventDetails, GroupStory, InteractiveContent,
    NativeFlowOverride, PaymentRequest, PollOption, PollResult, ProductCard, StoryContent,
    TimeValue, VoteCount,
};
pub use detect::{detect, ContentKind};
pub use media::{resolve_media, MediaDescriptor, MediaKind, MediaSource, MediaUpload};
pub use story::{ContentGenerator, StoryNormalizer, UploadGenerator};
pub use transport::{
    BuildOptions, Collaborators, DeliveryReceipt, IdGenerator, MediaUploader, MessageFactory,
    OsSecrets, Relay, RelayOptions, SecretSource, SentMessage, UuidMessageIds,
};
