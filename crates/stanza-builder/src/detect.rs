use std::fmt;

use serde::{Deserialize, Serialize};

use crate::content::ContentEnvelope;

/// Message kinds the builder knows how to format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentKind {
    Payment,
    Product,
    Interactive,
    Album,
    Event,
    PollResult,
    GroupStory,
}

impl ContentKind {
    /// All kinds in detection priority order.
    pub const PRIORITY: [ContentKind; 7] = [
        ContentKind::Payment,
        ContentKind::Product,
        ContentKind::Interactive,
        ContentKind::Album,
        ContentKind::Event,
        ContentKind::PollResult,
        ContentKind::GroupStory,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Payment => "PAYMENT",
            ContentKind::Product => "PRODUCT",
            ContentKind::Interactive => "INTERACTIVE",
            ContentKind::Album => "ALBUM",
            ContentKind::Event => "EVENT",
            ContentKind::PollResult => "POLL_RESULT",
            ContentKind::GroupStory => "GROUP_STORY",
        }
    }

    fn is_set_in(&self, envelope: &ContentEnvelope) -> bool {
        match self {
            ContentKind::Payment => envelope.payment.is_some(),
            ContentKind::Product => envelope.product.is_some(),
            ContentKind::Interactive => envelope.interactive.is_some(),
            ContentKind::Album => envelope.album.is_some(),
            ContentKind::Event => envelope.event.is_some(),
            ContentKind::PollResult => envelope.poll_result.is_some(),
            ContentKind::GroupStory => envelope.group_story.is_some(),
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Report which kind `envelope` carries.
///
/// When several kind fields are set the first one in
/// [`ContentKind::PRIORITY`] wins; no error is raised for ambiguity. `None`
/// means no supported kind is present and is the caller's error to report.
pub fn detect(envelope: &ContentEnvelope) -> Option<ContentKind> {
    ContentKind::PRIORITY
        .into_iter()
        .find(|kind| kind.is_set_in(envelope))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{
        AlbumItem, EventDetails, GroupStory, InteractiveContent, PaymentRequest, PollResult,
        ProductCard, StoryContent,
    };
    use crate::media::MediaSource;

    /// Envelope with every kind field from `kind` onwards set.
    fn envelope_from(kind: ContentKind) -> ContentEnvelope {
        let mut env = ContentEnvelope::default();
        let start = ContentKind::PRIORITY
            .iter()
            .position(|k| *k == kind)
            .unwrap();
        for k in &ContentKind::PRIORITY[start..] {
            match k {
                ContentKind::Payment => env.payment = Some(PaymentRequest::default()),
                ContentKind::Product => env.product = Some(ProductCard::default()),
                ContentKind::Interactive => env.interactive = Some(InteractiveContent::default()),
                ContentKind::Album => {
                    env.album = Some(vec![AlbumItem::image(MediaSource::url("https://x.test/a"))])
                }
                ContentKind::Event => env.event = Some(EventDetails::default()),
                ContentKind::PollResult => env.poll_result = Some(PollResult::default()),
                ContentKind::GroupStory => {
                    env.group_story = Some(GroupStory::Content(StoryContent::default()))
                }
            }
        }
        env
    }

    #[test]
    fn empty_envelope_matches_nothing() {
        assert_eq!(detect(&ContentEnvelope::default()), None);
    }

    #[test]
    fn first_set_field_wins_for_every_kind() {
        for kind in ContentKind::PRIORITY {
            assert_eq!(detect(&envelope_from(kind)), Some(kind), "kind {kind}");
        }
    }

    #[test]
    fn single_field_is_detected() {
        let env = ContentEnvelope {
            poll_result: Some(PollResult::default()),
            ..Default::default()
        };
        assert_eq!(detect(&env), Some(ContentKind::PollResult));
    }

    #[test]
    fn empty_album_still_counts_as_album() {
        let env = ContentEnvelope {
            album: Some(Vec::new()),
            ..Default::default()
        };
        assert_eq!(detect(&env), Some(ContentKind::Album));
    }

    #[test]
    fn labels_match_wire_names() {
        assert_eq!(ContentKind::PollResult.to_string(), "POLL_RESULT");
        let json = serde_json::to_string(&ContentKind::GroupStory).unwrap();
        assert_eq!(json, r#""GROUP_STORY""#);
    }
}
