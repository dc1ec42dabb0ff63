//! Session events and the effect layer that reacts to them.
//!
//! A transition finishes mutating the session first, then hands its events
//! to an `EffectSink`. Sinks play sounds, repaint, and so on; they cannot
//! reach back into the session, and nothing waits on them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlayerId;
use crate::rules::LineKind;

/// Cells covered by one draw, as `(player, cell index)`.
pub type Hits = SmallVec<[(PlayerId, usize); 2]>;

/// Events from a single transition. A draw yields one or two.
pub type EventBatch = SmallVec<[SessionEvent; 2]>;

/// Something that happened to the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A number left the pool.
    NumberDrawn { number: u8, hits: Hits },
    /// A player completed a line. Always follows the draw that caused it.
    PlayerWon { player: PlayerId, line: LineKind },
    /// Cards were re-dealt and the table cleared.
    Reset,
}

/// Receives events after each transition.
pub trait EffectSink {
    fn on_event(&mut self, event: &SessionEvent);
}

/// Ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EffectSink for NullSink {
    fn on_event(&mut self, _event: &SessionEvent) {}
}

/// Keeps every event, for presentation layers that poll.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    events: Vec<SessionEvent>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far.
    #[must_use]
    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    /// Take the received events, leaving the sink empty.
    pub fn drain(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EffectSink for RecordingSink {
    fn on_event(&mut self, event: &SessionEvent) {
        self.events.push(event.clone());
    }
}

impl<F> EffectSink for F
where
    F: FnMut(&SessionEvent),
{
    fn on_event(&mut self, event: &SessionEvent) {
        self(event);
    }
}
