//! Chat between players at the table.
//!
//! Independent of the game: the only link is that a table reset clears
//! the log.

pub mod log;

pub use log::{ChatError, ChatLog, ChatMessage, MAX_MESSAGE_LEN};
