//! Draw pool.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{GameRng, MAX_NUMBER};

/// Every number has already been drawn.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("Draw pool is exhausted")]
pub struct PoolExhausted;

/// A preset draw order that is not a valid pool.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoolError {
    #[error("Number {0} is outside 1-{}", MAX_NUMBER)]
    OutOfRange(u8),

    #[error("Number {0} appears more than once")]
    Duplicate(u8),
}

/// Numbers still to be drawn this session, in draw order.
///
/// A freshly shuffled pool holds all 75 numbers. A preset pool may hold
/// fewer, which is how fixed scenarios are staged.
///
/// Serializes as the numbers still to come. Deserializing runs the same
/// checks as `from_order`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<u8>", try_from = "Vec<u8>")]
pub struct DrawPool {
    order: Vec<u8>,
    cursor: usize,
}

impl DrawPool {
    /// Shuffle the full universe 1..=75.
    #[must_use]
    pub fn new(rng: &mut GameRng) -> Self {
        let mut order: Vec<u8> = (1..=MAX_NUMBER).collect();
        rng.shuffle(&mut order);
        Self { order, cursor: 0 }
    }

    /// Use a fixed draw order.
    pub fn from_order(order: Vec<u8>) -> Result<Self, PoolError> {
        let mut seen = FxHashSet::default();
        for &n in &order {
            if !(1..=MAX_NUMBER).contains(&n) {
                return Err(PoolError::OutOfRange(n));
            }
            if !seen.insert(n) {
                return Err(PoolError::Duplicate(n));
            }
        }
        Ok(Self { order, cursor: 0 })
    }

    /// Remove and return the next number.
    pub fn draw(&mut self) -> Result<u8, PoolExhausted> {
        let number = self.peek().ok_or(PoolExhausted)?;
        self.cursor += 1;
        Ok(number)
    }

    /// The next number, without drawing it.
    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        self.order.get(self.cursor).copied()
    }

    /// Numbers left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.order.len() - self.cursor
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}

impl From<DrawPool> for Vec<u8> {
    fn from(mut pool: DrawPool) -> Self {
        pool.order.drain(..pool.cursor);
        pool.order
    }
}

impl TryFrom<Vec<u8>> for DrawPool {
    type Error = PoolError;

    fn try_from(order: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_order(order)
    }
}
