//! Core domain types and utilities for the Magmist site.
//!
//! This crate provides the foundational types and error handling shared by
//! the chatbot library and the Leptos site.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{ConversationId, TurnId};
