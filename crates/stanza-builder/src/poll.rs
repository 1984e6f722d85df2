use stanza_core::{Jid, Result, StanzaError};
use stanza_proto::{Message, PollResultSnapshotMessage, PollVote, Quoted};

use crate::builder::{logged, MessageContentBuilder};
use crate::content::{ContentEnvelope, PollResult};
use crate::transport::{BuildOptions, RelayOptions, SentMessage};

const FORMATTER: &str = "poll_result";

impl MessageContentBuilder {
    /// Format a poll result snapshot and relay it.
    pub async fn poll_result(
        &self,
        jid: &Jid,
        envelope: &ContentEnvelope,
        quoted: Option<&Quoted>,
    ) -> Result<SentMessage> {
        logged(FORMATTER, self.relay_poll_result(jid, envelope, quoted).await)
    }

    async fn relay_poll_result(
        &self,
        jid: &Jid,
        envelope: &ContentEnvelope,
        quoted: Option<&Quoted>,
    ) -> Result<SentMessage> {
        let poll = envelope
            .poll_result
            .as_ref()
            .ok_or_else(|| StanzaError::invalid("missing pollResultMessage"))?;

        let content = Message {
            poll_result_snapshot_message: Some(format_poll_result(poll)),
            ..Default::default()
        };
        let options = BuildOptions {
            user_jid: Some(self.synthetic_user()),
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

/// Vote counts always leave as text.
pub fn format_poll_result(poll: &PollResult) -> PollResultSnapshotMessage {
    PollResultSnapshotMessage {
        name: poll.name.clone(),
        poll_votes: poll
            .poll_votes
            .iter()
            .map(|v| PollVote {
                option_name: v.option_name.clone(),
                option_vote_count: v.option_vote_count.clone().into_text(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{PollOption, VoteCount};

    #[test]
    fn numeric_and_text_counts_become_text() {
        let poll = PollResult {
            name: "Lunch?".into(),
            poll_votes: vec![
                PollOption {
                    option_name: "Yes".into(),
                    option_vote_count: VoteCount::from(7),
                },
                PollOption {
                    option_name: "No".into(),
                    option_vote_count: VoteCount::Text("3".into()),
                },
            ],
        };
        let snapshot = format_poll_result(&poll);

        assert_eq!(snapshot.name, "Lunch?");
        assert_eq!(snapshot.poll_votes[0].option_vote_count, "7");
        assert_eq!(snapshot.poll_votes[1].option_vote_count, "3");
    }

    #[test]
    fn no_votes_is_an_empty_snapshot() {
        let snapshot = format_poll_result(&PollResult {
            name: "Empty".into(),
            poll_votes: Vec::new(),
        });
        assert!(snapshot.poll_votes.is_empty());
    }
}
