//! Chat-session state for the mocked document-chat flow.
//!
//! DESIGN
//! ======
//! The transcript is append-only: a valid send appends one user message
//! immediately and marks a reply pending; the chat page schedules one
//! randomized delay and then calls `deliver_reply`, which appends exactly
//! one canned assistant message. Sends are rejected while a reply is
//! pending or when the trimmed input is empty.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::content;

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// A single chat message. Immutable once appended.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    /// Opaque unique identifier.
    pub id: String,
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), role, content: content.into() }
    }
}

/// State for the chat page: the transcript plus the pending-reply flag that
/// drives the typing indicator and blocks concurrent sends.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub reply_pending: bool,
}

impl ChatState {
    /// Chat state pre-populated with the canned demo transcript.
    #[must_use]
    pub fn seeded() -> Self {
        Self { messages: content::seed_messages(), reply_pending: false }
    }

    /// Append the user's message if the trimmed input is non-empty and no
    /// reply is in flight. Returns `true` when the send was accepted, in
    /// which case the caller schedules `deliver_reply`.
    pub fn send(&mut self, input: &str) -> bool {
        let text = input.trim();
        if text.is_empty() || self.reply_pending {
            return false;
        }
        self.messages.push(ChatMessage::new(Role::User, text));
        self.reply_pending = true;
        true
    }

    /// Append the canned assistant reply for the in-flight send. No-op when
    /// nothing is pending, so a stale timer cannot inject extra messages.
    pub fn deliver_reply(&mut self) {
        if !self.reply_pending {
            return;
        }
        self.messages.push(ChatMessage::new(Role::Assistant, content::CANNED_REPLY));
        self.reply_pending = false;
    }
}
