//! Chat log.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::PlayerId;

/// Longest accepted message, in characters.
pub const MAX_MESSAGE_LEN: usize = 500;

/// A message the log refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("Message is empty")]
    EmptyMessage,

    #[error("Message is {len} characters; the limit is {}", MAX_MESSAGE_LEN)]
    TooLong { len: usize },
}

/// One chat line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Logical timestamp, increasing across the life of the log.
    pub tick: u64,
    pub sender: PlayerId,
    pub text: String,
}

/// Messages in posting order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    next_tick: u64,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message. Surrounding whitespace is trimmed.
    pub fn post(&mut self, sender: PlayerId, text: &str) -> Result<&ChatMessage, ChatError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        let len = text.chars().count();
        if len > MAX_MESSAGE_LEN {
            return Err(ChatError::TooLong { len });
        }

        let tick = self.next_tick;
        self.next_tick += 1;
        debug!(%sender, tick, len, "chat message");

        self.messages.push(ChatMessage {
            tick,
            sender,
            text: text.to_string(),
        });
        Ok(&self.messages[self.messages.len() - 1])
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Messages from one player, in order.
    pub fn from_sender(&self, sender: PlayerId) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter().filter(move |m| m.sender == sender)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop all messages. Ticks keep counting up.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
