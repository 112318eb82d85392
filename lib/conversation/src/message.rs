//! Conversation turns and the per-widget log.

use chrono::{DateTime, Utc};
use magmist_core::{ConversationId, TurnId};
use serde::{Deserialize, Serialize};

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The site visitor.
    User,
    /// The scripted assistant.
    Bot,
}

impl Sender {
    /// Returns true for visitor turns.
    #[must_use]
    pub fn is_user(&self) -> bool {
        matches!(self, Self::User)
    }
}

/// One message in the chat log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// Unique turn identifier, also used as the render key.
    pub id: TurnId,
    /// Message text as displayed.
    pub text: String,
    /// Who sent it.
    pub sender: Sender,
    /// When the turn was recorded.
    pub timestamp: DateTime<Utc>,
}

impl ConversationTurn {
    /// Creates a turn stamped with the current time.
    #[must_use]
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        let timestamp = Utc::now();
        let (timestamp_ms, random) = id_parts(timestamp);
        Self {
            id: TurnId::from_parts(timestamp_ms, random),
            text: text.into(),
            sender,
            timestamp,
        }
    }

    /// Creates a visitor turn.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    /// Creates an assistant turn.
    #[must_use]
    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Sender::Bot, text)
    }
}

/// ULID parts from the chrono clock and the platform RNG.
///
/// `Ulid::new` reads `SystemTime`, which panics on `wasm32-unknown-unknown`.
fn id_parts(at: DateTime<Utc>) -> (u64, u128) {
    let timestamp_ms = u64::try_from(at.timestamp_millis()).unwrap_or(0);
    let random = match (getrandom::u64(), getrandom::u64()) {
        (Ok(hi), Ok(lo)) => (u128::from(hi) << 64) | u128::from(lo),
        _ => u128::from(at.timestamp_subsec_nanos()),
    };
    (timestamp_ms, random)
}

/// Append-only, ordered chat history for one widget instance.
///
/// The log always starts with a single bot greeting and lives only as long
/// as the widget that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationLog {
    id: ConversationId,
    turns: Vec<ConversationTurn>,
}

impl ConversationLog {
    /// Creates a log seeded with the greeting turn.
    #[must_use]
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        let (timestamp_ms, random) = id_parts(Utc::now());
        Self {
            id: ConversationId::from_parts(timestamp_ms, random),
            turns: vec![ConversationTurn::bot(greeting)],
        }
    }

    /// Identifier of this conversation.
    #[must_use]
    pub fn id(&self) -> ConversationId {
        self.id
    }

    pub(crate) fn push(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    /// Turns in display order.
    #[must_use]
    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    /// The most recent turn.
    #[must_use]
    pub fn last(&self) -> Option<&ConversationTurn> {
        self.turns.last()
    }

    /// Number of turns, greeting included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Always false once constructed; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
