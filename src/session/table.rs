//! The table: what a presentation layer owns.
//!
//! Bundles one game session, the chat log and an effect sink. Every
//! operation returns a fresh `SessionView`; events reach the sink only
//! after the session has finished changing.

use tracing::instrument;

use super::events::{EffectSink, NullSink, SessionEvent};
use super::game::{DrawOutcome, GameSession};
use super::view::SessionView;
use crate::chat::{ChatError, ChatLog, ChatMessage};
use crate::core::{BingoConfig, ConfigError, PlayerId};

/// A bingo table with chat.
#[derive(Debug)]
pub struct Table<S: EffectSink = NullSink> {
    session: GameSession,
    chat: ChatLog,
    sink: S,
}

impl Table<NullSink> {
    /// A table with no effect layer.
    pub fn without_effects(config: &BingoConfig) -> Result<Self, ConfigError> {
        Self::new(config, NullSink)
    }
}

impl<S: EffectSink> Table<S> {
    pub fn new(config: &BingoConfig, sink: S) -> Result<Self, ConfigError> {
        Ok(Self::with_session(GameSession::new(config)?, sink))
    }

    /// Seat an existing session.
    pub fn with_session(session: GameSession, sink: S) -> Self {
        Self {
            session,
            chat: ChatLog::new(),
            sink,
        }
    }

    /// Draw a number. Returns the unchanged view if the draw was refused.
    #[instrument(skip(self))]
    pub fn draw(&mut self) -> SessionView {
        if let DrawOutcome::Drawn { events, .. } = self.session.draw() {
            for event in &events {
                self.sink.on_event(event);
            }
        }
        self.session.view()
    }

    /// Re-deal the game and clear the chat.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> SessionView {
        self.session.reset();
        self.chat.clear();
        self.sink.on_event(&SessionEvent::Reset);
        self.session.view()
    }

    #[must_use]
    pub fn view(&self) -> SessionView {
        self.session.view()
    }

    /// Post a chat message.
    pub fn post(&mut self, sender: PlayerId, text: &str) -> Result<&ChatMessage, ChatError> {
        self.chat.post(sender, text)
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn chat(&self) -> &ChatLog {
        &self.chat
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
