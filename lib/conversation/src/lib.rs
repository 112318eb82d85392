//! Scripted FAQ chatbot for the Magmist site.
//!
//! This crate provides:
//!
//! - **Response catalog**: ordered keyword dictionary and the substring resolver
//! - **Quick replies**: shortcut buttons that send a canned label
//! - **Conversation log**: append-only turns for one widget instance
//! - **Chatbot**: widget state machine and turn orchestration
//! - **Typing delay**: injectable latency simulation
//! - **Handoff**: WhatsApp click-to-chat links

pub mod catalog;
pub mod chatbot;
pub mod config;
pub mod delay;
pub mod error;
pub mod handoff;
pub mod message;
pub mod quick_reply;

pub use catalog::{DEFAULT_KEYWORD, ResponseCatalog, ResponseEntry, normalize};
pub use chatbot::{Chatbot, PendingReply, WidgetState};
pub use config::{ChatbotConfig, ChatbotParts, HandoffConfig, TypingConfig};
pub use delay::{DelayPolicy, InstantSleeper, Sleeper, TypingDelay};
pub use error::CatalogError;
pub use handoff::{HandoffLink, build_handoff_url};
pub use message::{ConversationLog, ConversationTurn, Sender};
pub use quick_reply::{QuickReply, QuickReplyIcon, QuickReplySet};
