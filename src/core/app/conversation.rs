use super::{session::SessionContext, ui_state::UiState};
use crate::core::message::{AppMessageKind, Message};
use crate::core::responder::{self, ReplyDelivery, ReplyParams};

/// Borrow-scoped view over the session and UI state for transcript
/// mutations, so command handlers and the event loop share one code path.
pub struct ConversationController<'a> {
    session: &'a mut SessionContext,
    ui: &'a mut UiState,
}

impl<'a> ConversationController<'a> {
    pub fn new(session: &'a mut SessionContext, ui: &'a mut UiState) -> Self {
        Self { session, ui }
    }

    /// Show the concierge greeting the first time the panel opens. The
    /// greeting precedes all user input, so it never counts against the
    /// one-reply-per-user-message pairing.
    pub fn show_greeting_if_needed(&mut self) {
        if self.ui.chat.greeted {
            return;
        }
        let greeting = &responder::response_table().greeting;
        self.log_assistant_text(greeting);
        self.ui.chat.messages.push_back(Message::assistant(greeting));
        self.ui.chat.greeted = true;
    }

    /// Append the user's message and schedule exactly one delayed reply
    /// for it.
    pub fn submit_user_message(&mut self, content: String) {
        self.clear_status();

        if let Err(e) = self.session.logging.log_message(&format!("You: {content}")) {
            self.ui.set_status(format!("Log error: {e}"));
        }

        let reply = responder::select_response(&content);
        self.ui.chat.messages.push_back(Message::user(content));

        let seq = self.session.next_reply_seq();
        tracing::debug!(seq, "user message submitted");
        self.session.responder.spawn_reply(ReplyParams {
            seq,
            content: reply.to_string(),
            cancel_token: self.session.cancel_token.clone(),
        });

        self.ui.chat.pulse_start = std::time::Instant::now();
        self.ui.chat.auto_scroll = true;
    }

    /// Fold a delivery into the transcript, releasing any replies the
    /// sequencer was holding for order.
    pub fn apply_delivery(&mut self, delivery: ReplyDelivery) {
        for content in self.session.sequencer.accept(delivery) {
            self.log_assistant_text(&content);
            self.ui.chat.messages.push_back(Message::assistant(content));
        }
    }

    pub fn add_app_message(&mut self, kind: AppMessageKind, content: impl Into<String>) {
        self.ui.chat.messages.push_back(Message::app(kind, content));
    }

    /// Drop the transcript and start over from the greeting.
    pub fn clear_transcript(&mut self) {
        self.ui.chat.messages.clear();
        self.ui.chat.greeted = false;
        self.ui.chat.scroll_offset = 0;
        self.ui.chat.auto_scroll = true;
        self.show_greeting_if_needed();
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.ui.set_status(status);
    }

    pub fn clear_status(&mut self) {
        self.ui.clear_status();
    }

    fn log_assistant_text(&mut self, content: &str) {
        if let Err(e) = self.session.logging.log_message(content) {
            self.ui.set_status(format!("Log error: {e}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::app::App;
    use crate::core::config::Config;
    use crate::core::responder::{response_table, ResponderService};

    fn test_app() -> App {
        let (responder, _rx) = ResponderService::new();
        App::new(Config::default(), None, responder, None, Some("dark"))
    }

    #[test]
    fn greeting_appears_once() {
        let mut app = test_app();
        app.conversation().show_greeting_if_needed();
        app.conversation().show_greeting_if_needed();

        assert_eq!(app.ui.chat.messages.len(), 1);
        assert_eq!(app.ui.chat.messages[0].content, response_table().greeting);
        assert!(app.ui.chat.messages[0].is_assistant());
    }

    #[tokio::test]
    async fn each_submission_schedules_exactly_one_reply() {
        let mut app = test_app();
        app.conversation().submit_user_message("pricing?".into());
        app.conversation().submit_user_message("security?".into());

        let user_count = app.ui.chat.messages.iter().filter(|m| m.is_user()).count();
        assert_eq!(user_count, 2);
        assert!(app.session.has_pending_reply());
    }

    #[tokio::test]
    async fn out_of_order_deliveries_append_in_submission_order() {
        let mut app = test_app();
        app.conversation().submit_user_message("first".into());
        app.conversation().submit_user_message("second".into());

        app.conversation().apply_delivery(ReplyDelivery {
            seq: 1,
            content: "reply two".into(),
        });
        let replies: Vec<_> = app
            .ui
            .chat
            .messages
            .iter()
            .filter(|m| m.is_assistant())
            .collect();
        assert!(replies.is_empty(), "later reply must wait for the earlier one");

        app.conversation().apply_delivery(ReplyDelivery {
            seq: 0,
            content: "reply one".into(),
        });
        let replies: Vec<_> = app
            .ui
            .chat
            .messages
            .iter()
            .filter(|m| m.is_assistant())
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(replies, vec!["reply one", "reply two"]);
        assert!(!app.session.has_pending_reply());
    }

    #[tokio::test]
    async fn clear_transcript_restores_the_greeting() {
        let mut app = test_app();
        app.conversation().show_greeting_if_needed();
        app.conversation().submit_user_message("hello".into());
        app.conversation().clear_transcript();

        assert_eq!(app.ui.chat.messages.len(), 1);
        assert_eq!(app.ui.chat.messages[0].content, response_table().greeting);
    }
}
