//! Bingo cards and how they are dealt.
//!
//! - `Card`: 25 cells, row-major, free centre
//! - `generate_card`: per-column Fisher–Yates deal

pub mod card;
pub mod generator;

pub use card::{Card, CardError};
pub use generator::generate_card;
