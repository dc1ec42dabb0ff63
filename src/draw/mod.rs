//! The draw pool: a shuffled permutation of 1..=75, consumed from the front.

pub mod pool;

pub use pool::{DrawPool, PoolError, PoolExhausted};
