use tokio_util::sync::CancellationToken;

use crate::core::config::Config;
use crate::core::responder::{ReplySequencer, ResponderService};
use crate::utils::logging::LoggingState;

/// Non-visual session state: configuration, transcript logging, and the
/// reply-delivery plumbing.
pub struct SessionContext {
    pub config: Config,
    pub logging: LoggingState,
    pub responder: ResponderService,
    /// Cancelled once on teardown; every pending reply timer observes it.
    pub cancel_token: CancellationToken,
    pub sequencer: ReplySequencer,
    scheduled_replies: u64,
}

impl SessionContext {
    pub fn new(config: Config, responder: ResponderService, log_file: Option<String>) -> Self {
        Self {
            config,
            logging: LoggingState::new(log_file),
            responder,
            cancel_token: CancellationToken::new(),
            sequencer: ReplySequencer::new(),
            scheduled_replies: 0,
        }
    }

    /// Sequence number for the next submission; also counts it as scheduled.
    pub fn next_reply_seq(&mut self) -> u64 {
        let seq = self.scheduled_replies;
        self.scheduled_replies += 1;
        seq
    }

    /// True while at least one scheduled reply has not yet been released
    /// into the transcript. Drives the thinking indicator.
    pub fn has_pending_reply(&self) -> bool {
        self.sequencer.in_flight(self.scheduled_replies) > 0
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::responder::ReplyDelivery;

    fn session() -> SessionContext {
        let (responder, _rx) = ResponderService::new();
        SessionContext::new(Config::default(), responder, None)
    }

    #[test]
    fn sequence_numbers_are_monotonic() {
        let mut session = session();
        assert_eq!(session.next_reply_seq(), 0);
        assert_eq!(session.next_reply_seq(), 1);
    }

    #[test]
    fn pending_replies_track_scheduling_and_release() {
        let mut session = session();
        assert!(!session.has_pending_reply());

        let seq = session.next_reply_seq();
        assert!(session.has_pending_reply());

        session.sequencer.accept(ReplyDelivery {
            seq,
            content: "done".into(),
        });
        assert!(!session.has_pending_reply());
    }
}
