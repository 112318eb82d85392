//! The chat widget's conversation state.
//!
//! A [`Chatbot`] owns one conversation log and the open/typing flags the UI
//! renders. Sending a message is split in two so a UI can hold the state in
//! a reactive cell and run the typing delay outside of it:
//!
//! 1. [`Chatbot::begin_turn`] records the visitor's message and starts typing.
//! 2. The caller waits the typing delay.
//! 3. [`Chatbot::finish_turn`] resolves and records the reply.
//!
//! [`Chatbot::send_turn`] runs all three in one call.

use crate::catalog::{DEFAULT_KEYWORD, ResponseCatalog};
use crate::delay::{Sleeper, TypingDelay};
use crate::message::{ConversationLog, ConversationTurn};
use crate::quick_reply::QuickReplySet;
use std::sync::Arc;

/// Visible state of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    /// Only the floating button is shown.
    Closed,
    /// The chat window is open and accepting input.
    OpenIdle,
    /// The chat window is open and a reply is pending.
    OpenTyping,
}

/// A visitor message waiting for its reply.
///
/// Returned by [`Chatbot::begin_turn`]; hand it back to
/// [`Chatbot::finish_turn`] once the typing delay has elapsed. Finishing
/// consumes it, so each visitor turn gets exactly one reply.
#[derive(Debug)]
#[must_use = "a pending reply must be finished or the widget stays in the typing state"]
pub struct PendingReply {
    text: String,
}

impl PendingReply {
    /// The trimmed visitor text the reply will be resolved from.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Conversation state for one mounted chat widget.
#[derive(Debug, Clone)]
pub struct Chatbot {
    catalog: Arc<ResponseCatalog>,
    quick_replies: Arc<QuickReplySet>,
    log: ConversationLog,
    open: bool,
    typing: bool,
}

impl Chatbot {
    /// Creates a closed widget whose log holds only the greeting.
    #[must_use]
    pub fn new(
        catalog: Arc<ResponseCatalog>,
        quick_replies: Arc<QuickReplySet>,
        greeting: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            quick_replies,
            log: ConversationLog::with_greeting(greeting),
            open: false,
            typing: false,
        }
    }

    /// Opens a closed widget or closes an open one.
    ///
    /// Closing does not cancel a pending reply; it is still recorded when it
    /// finishes.
    pub fn toggle(&mut self) -> WidgetState {
        self.open = !self.open;
        tracing::debug!(conversation = %self.log.id(), open = self.open, "Chat widget toggled");
        self.state()
    }

    #[must_use]
    pub fn state(&self) -> WidgetState {
        match (self.open, self.typing) {
            (false, _) => WidgetState::Closed,
            (true, false) => WidgetState::OpenIdle,
            (true, true) => WidgetState::OpenTyping,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// True while a reply is pending. Input submission should be disabled.
    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.typing
    }

    #[must_use]
    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    #[must_use]
    pub fn catalog(&self) -> &ResponseCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn quick_replies(&self) -> &QuickReplySet {
        &self.quick_replies
    }

    /// Records the visitor's message and enters the typing state.
    ///
    /// Returns `None` without touching the log if the text is blank or a
    /// reply is already pending.
    pub fn begin_turn(&mut self, text: &str) -> Option<PendingReply> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if self.typing {
            tracing::debug!(
                conversation = %self.log.id(),
                "Ignoring message while a reply is pending"
            );
            return None;
        }

        self.log.push(ConversationTurn::user(text));
        self.typing = true;
        tracing::debug!(conversation = %self.log.id(), turns = self.log.len(), "User turn recorded");

        Some(PendingReply {
            text: text.to_string(),
        })
    }

    /// Resolves the pending message, records the reply and leaves the typing
    /// state. Returns the recorded bot turn.
    ///
    /// Returns `None` without touching the log if this widget has no reply
    /// pending, which happens when the token came from another widget.
    pub fn finish_turn(&mut self, pending: PendingReply) -> Option<&ConversationTurn> {
        if !self.typing {
            tracing::debug!(
                conversation = %self.log.id(),
                "Ignoring reply with no message pending"
            );
            return None;
        }

        let matched = self.catalog.matching_entry(&pending.text);
        let keyword = matched.map_or(DEFAULT_KEYWORD, |entry| entry.keyword.as_str());
        let reply = matched.map_or(self.catalog.default_reply(), |entry| entry.reply.as_str());

        self.log.push(ConversationTurn::bot(reply));
        self.typing = false;
        tracing::debug!(conversation = %self.log.id(), keyword, "Bot turn recorded");

        self.log.last()
    }

    /// Starts a turn using a quick reply's label as the visitor's text.
    ///
    /// Unknown keys are ignored.
    pub fn begin_quick_reply(&mut self, key: &str) -> Option<PendingReply> {
        let Some(quick_reply) = self.quick_replies.find(key) else {
            tracing::debug!(key, "Unknown quick reply");
            return None;
        };
        let label = quick_reply.label.clone();
        self.begin_turn(&label)
    }

    /// Sends a message: records it, waits the typing delay and records the
    /// reply.
    ///
    /// Returns the bot turn, or `None` if the message was ignored.
    pub async fn send_turn<S: Sleeper>(
        &mut self,
        text: &str,
        delay: &TypingDelay<S>,
    ) -> Option<&ConversationTurn> {
        let pending = self.begin_turn(text)?;
        delay.wait().await;
        self.finish_turn(pending)
    }

    /// Sends the label of the quick reply with the given key.
    pub async fn dispatch_quick_reply<S: Sleeper>(
        &mut self,
        key: &str,
        delay: &TypingDelay<S>,
    ) -> Option<&ConversationTurn> {
        let pending = self.begin_quick_reply(key)?;
        delay.wait().await;
        self.finish_turn(pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChatbotConfig;
    use crate::message::Sender;

    fn chatbot() -> Chatbot {
        ChatbotConfig::default()
            .build()
            .expect("default config is valid")
            .chatbot()
    }

    fn texts(bot: &Chatbot) -> Vec<(Sender, String)> {
        bot.log()
            .turns()
            .iter()
            .map(|t| (t.sender, t.text.clone()))
            .collect()
    }

    #[test]
    fn starts_closed_with_greeting() {
        let bot = chatbot();
        assert_eq!(bot.state(), WidgetState::Closed);
        assert_eq!(bot.log().len(), 1);
        assert_eq!(bot.log().turns()[0].text, "Hi! How can I help you today?");
    }

    #[test]
    fn toggle_cycles_open_and_closed() {
        let mut bot = chatbot();
        assert_eq!(bot.toggle(), WidgetState::OpenIdle);
        assert_eq!(bot.toggle(), WidgetState::Closed);
    }

    #[test]
    fn begin_and_finish_move_through_typing() {
        let mut bot = chatbot();
        bot.toggle();

        let pending = bot.begin_turn("  price?  ").expect("accepted");
        assert_eq!(pending.text(), "price?");
        assert_eq!(bot.state(), WidgetState::OpenTyping);
        assert_eq!(bot.log().last().map(|t| t.sender), Some(Sender::User));

        let reply = bot.finish_turn(pending).expect("reply recorded").text.clone();
        assert_eq!(bot.state(), WidgetState::OpenIdle);
        assert_eq!(reply, bot.catalog().lookup("price").expect("price entry"));
    }

    #[test]
    fn blank_input_never_touches_the_log() {
        let mut bot = chatbot();
        assert!(bot.begin_turn("   ").is_none());
        assert!(bot.begin_turn("").is_none());
        assert_eq!(bot.log().len(), 1);
        assert!(!bot.is_typing());
    }

    #[test]
    fn second_message_is_rejected_while_typing() {
        let mut bot = chatbot();
        let first = bot.begin_turn("team").expect("accepted");
        assert!(bot.begin_turn("price").is_none());
        assert!(bot.begin_quick_reply("order").is_none());
        bot.finish_turn(first);

        let turns = texts(&bot);
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[1], (Sender::User, "team".to_string()));
    }

    #[test]
    fn closing_while_typing_still_records_reply() {
        let mut bot = chatbot();
        bot.toggle();
        let pending = bot.begin_turn("warranty").expect("accepted");
        assert_eq!(bot.toggle(), WidgetState::Closed);

        bot.finish_turn(pending);
        assert_eq!(bot.log().len(), 3);
        assert_eq!(bot.toggle(), WidgetState::OpenIdle);
    }

    #[test]
    fn reopening_before_reply_shows_typing() {
        let mut bot = chatbot();
        bot.toggle();
        let pending = bot.begin_turn("hello").expect("accepted");
        bot.toggle();
        assert_eq!(bot.toggle(), WidgetState::OpenTyping);
        bot.finish_turn(pending);
    }

    #[test]
    fn finished_turn_leaves_exactly_one_reply() {
        let mut bot = chatbot();
        let pending = bot.begin_turn("price").expect("accepted");
        assert!(bot.finish_turn(pending).is_some());

        let turns = texts(&bot);
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[1].0, Sender::User);
        assert_eq!(turns[2].0, Sender::Bot);
        assert!(!bot.is_typing());
    }

    #[test]
    fn reply_token_from_another_widget_is_ignored() {
        let mut asked = chatbot();
        let mut idle = chatbot();
        let pending = asked.begin_turn("warranty").expect("accepted");

        assert!(idle.finish_turn(pending).is_none());
        assert_eq!(idle.log().len(), 1);
        assert!(asked.is_typing());
    }

    #[test]
    fn finished_reply_agrees_with_resolve() {
        for input in ["How much is the price?", "banana", "?!", "hello team", "MAGMIST"] {
            let mut bot = chatbot();
            let pending = bot.begin_turn(input).expect("accepted");
            let reply = bot.finish_turn(pending).expect("reply recorded").text.clone();
            assert_eq!(reply, bot.catalog().resolve(input), "input {input:?}");
        }
    }

    #[tokio::test]
    async fn send_turn_appends_user_then_bot() {
        let mut bot = chatbot();
        let delay = TypingDelay::none();

        let reply = bot
            .send_turn("What is Magmist?", &delay)
            .await
            .map(|t| t.text.clone());

        assert_eq!(
            reply.as_deref(),
            bot.catalog().lookup("magmist"),
        );
        let turns = texts(&bot);
        assert_eq!(turns[1], (Sender::User, "What is Magmist?".to_string()));
        assert_eq!(turns[2].0, Sender::Bot);
        assert!(!bot.is_typing());
    }

    #[tokio::test]
    async fn unmatched_input_gets_default_reply() {
        let mut bot = chatbot();
        let reply = bot
            .send_turn("banana", &TypingDelay::none())
            .await
            .map(|t| t.text.clone());
        assert_eq!(reply.as_deref(), Some(bot.catalog().default_reply()));
    }

    #[tokio::test]
    async fn blank_send_turn_is_ignored() {
        let mut bot = chatbot();
        assert!(bot.send_turn("   ", &TypingDelay::none()).await.is_none());
        assert_eq!(bot.log().len(), 1);
    }

    #[tokio::test]
    async fn n_sequential_sends_yield_2n_plus_1_turns() {
        let mut bot = chatbot();
        let delay = TypingDelay::none();
        let inputs = ["hello", "price", "banana", "team", "order"];

        for input in inputs {
            bot.send_turn(input, &delay).await;
        }

        let turns = bot.log().turns();
        assert_eq!(turns.len(), 2 * inputs.len() + 1);
        for (i, input) in inputs.iter().enumerate() {
            let user = &turns[1 + 2 * i];
            let bot_turn = &turns[2 + 2 * i];
            assert_eq!(user.sender, Sender::User);
            assert_eq!(user.text, *input);
            assert_eq!(bot_turn.sender, Sender::Bot);
        }
        assert!(turns.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[tokio::test]
    async fn quick_reply_matches_typing_its_label() {
        let delay = TypingDelay::none();

        let mut via_quick_reply = chatbot();
        via_quick_reply.dispatch_quick_reply("price", &delay).await;

        let mut via_typing = chatbot();
        via_typing.send_turn("Price?", &delay).await;

        assert_eq!(texts(&via_quick_reply), texts(&via_typing));
        let turns = texts(&via_quick_reply);
        assert_eq!(turns[1], (Sender::User, "Price?".to_string()));
        assert_eq!(
            turns[2],
            (
                Sender::Bot,
                via_quick_reply
                    .catalog()
                    .lookup("price")
                    .expect("price entry")
                    .to_string()
            )
        );
    }

    #[tokio::test]
    async fn every_default_quick_reply_resolves_to_its_key() {
        let delay = TypingDelay::none();
        let keys: Vec<String> = chatbot().quick_replies().iter().map(|q| q.key.clone()).collect();

        for key in keys {
            let mut bot = chatbot();
            let reply = bot
                .dispatch_quick_reply(&key, &delay)
                .await
                .map(|t| t.text.clone());
            assert_eq!(reply.as_deref(), bot.catalog().lookup(&key), "quick reply {key}");
        }
    }

    #[tokio::test]
    async fn unknown_quick_reply_is_a_no_op() {
        let mut bot = chatbot();
        assert!(bot.dispatch_quick_reply("shipping", &TypingDelay::none()).await.is_none());
        assert_eq!(bot.log().len(), 1);
        assert_eq!(bot.state(), WidgetState::Closed);
    }
}
