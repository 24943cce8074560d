//! Problem implementations for the checkpoint engine.
//!
//! - [`coin_change`] : fewest coins summing to an amount, with the coins used.

pub mod coin_change;
