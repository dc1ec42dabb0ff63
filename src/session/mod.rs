//! Game sessions and the table that owns them.
//!
//! ## Control flow
//!
//! `GameSession::new` deals one card per player and shuffles a pool.
//! Each `draw` pops a number, covers it on every card, then checks seats
//! in order for a completed line. The first seat with a line wins and the
//! session stops accepting draws until `reset`.
//!
//! `Table` wraps a session with chat and an `EffectSink`, and is what a
//! front end holds.

pub mod events;
pub mod game;
pub mod table;
pub mod view;

pub use events::{EffectSink, EventBatch, Hits, NullSink, RecordingSink, SessionEvent};
pub use game::{DrawOutcome, DrawRejection, GameSession, Phase};
pub use table::Table;
pub use view::SessionView;
