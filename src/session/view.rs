//! Read model handed to the presentation layer.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::game::Phase;
use crate::cards::Card;
use crate::core::{PlayerId, PlayerMap};
use crate::rules::{LineKind, MarkedSet};

/// Snapshot of a session, everything a renderer needs.
///
/// Cloning is cheap: the history is a persistent vector shared with the
/// session that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub phase: Phase,
    pub cards: PlayerMap<Card>,
    pub marked: PlayerMap<MarkedSet>,
    /// Drawn numbers, oldest first.
    pub history: Vector<u8>,
    pub winner: Option<PlayerId>,
    pub winning_line: Option<LineKind>,
    /// Numbers left in the pool.
    pub remaining: usize,
}

impl SessionView {
    /// Can the draw button be pressed?
    #[must_use]
    pub fn can_draw(&self) -> bool {
        self.winner.is_none() && self.remaining > 0
    }

    /// Most recent draw.
    #[must_use]
    pub fn last_drawn(&self) -> Option<u8> {
        self.history.last().copied()
    }

    /// Is this cell covered on this player's card?
    #[must_use]
    pub fn is_marked(&self, player: PlayerId, index: usize) -> bool {
        self.marked[player].contains(index)
    }

    /// Status line, e.g. "Player 2 wins with column G!".
    #[must_use]
    pub fn status(&self) -> String {
        match (self.winner, self.winning_line) {
            (Some(player), Some(line)) => format!("{player} wins with {line}!"),
            (Some(player), None) => format!("{player} wins!"),
            (None, _) if self.remaining == 0 => "No numbers left".to_string(),
            (None, _) => "Draw a number to continue...".to_string(),
        }
    }
}
