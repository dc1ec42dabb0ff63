//! # bingo-engine
//!
//! The game core of a 75-ball bingo table with local chat.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: `GameSession` changes state synchronously and
//!    reports what happened as `SessionEvent`s. Sound and rendering react
//!    to those events through an `EffectSink`; they never interleave with
//!    a transition.
//!
//! 2. **Deterministic**: every deal and draw comes from a seeded
//!    `GameRng`, so a seed replays a whole game.
//!
//! 3. **Static tables**: column ranges and the 12 winning lines are
//!    constants, never recomputed.
//!
//! 4. **No singletons**: a front end owns a `Table` (or a bare
//!    `GameSession`) explicitly.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, layout constants
//! - `cards`: bingo cards and dealing
//! - `draw`: the shuffled draw pool
//! - `rules`: marking drawn numbers and detecting wins
//! - `session`: the session state machine, read model, events, table
//! - `chat`: the table's chat log
//!
//! ## Example
//!
//! ```
//! use bingo_engine::{BingoConfig, Table};
//!
//! let mut table = Table::without_effects(&BingoConfig::default().with_seed(42)).unwrap();
//! let mut view = table.view();
//! while view.can_draw() {
//!     view = table.draw();
//! }
//! assert!(view.winner.is_some());
//! ```

pub mod core;
pub mod cards;
pub mod draw;
pub mod rules;
pub mod session;
pub mod chat;

// Re-export commonly used types
pub use crate::core::{BingoConfig, ConfigError, GameRng, PlayerId, PlayerMap};

pub use crate::cards::{generate_card, Card, CardError};

pub use crate::draw::{DrawPool, PoolError, PoolExhausted};

pub use crate::rules::{apply_draw, has_won, first_winning_line, LineKind, MarkedSet, WinningLine, WINNING_LINES};

pub use crate::session::{
    DrawOutcome, DrawRejection, EffectSink, GameSession, NullSink, Phase,
    RecordingSink, SessionEvent, SessionView, Table,
};

pub use crate::chat::{ChatError, ChatLog, ChatMessage};
