//! Minimum coin change
//!
//! This crate answers one question: given coin denominations in unlimited
//! supply, what is the fewest number of coins that sums exactly to an amount?
//!
//! ## Core idea
//! Bottom-up dynamic programming over sub-amounts `0..=amount`. Each table
//! entry is an `Option<usize>`, so "unreachable" can never be confused with,
//! or overflow into, a real count. See [`solver`].
//!
//! ## Quick start
//! ```
//! assert_eq!(coin_dp::solve(&[1, 2, 5], 11).unwrap(), 3);
//! assert_eq!(coin_dp::solve(&[2], 3).unwrap(), -1);
//! assert_eq!(coin_dp::solve(&[1, 2, 5], 0).unwrap(), 0);
//! ```
//!
//! ## Recovering the coins
//! [`make_change`] returns an optimal multiset of coins, not just its size.
//! It runs the recurrence as a layered problem ([`problems::coin_change`]) on
//! the [`CheckpointEngine`], which keeps `O(√amount)` window checkpoints and
//! replays one block at a time while tracing back.
//!
//! ## Input policy
//! Amounts must be non-negative and every denomination positive; anything
//! else is rejected with [`error::InvalidArgument`] before work starts.
//! Duplicate denominations are accepted and ignored.

pub mod blocks;
pub mod builder;
pub mod denominations;
pub mod engine;
pub mod error;
#[cfg(feature = "cli")]
pub mod logging;
pub mod problems;
pub mod solver;
pub mod traits;
pub mod utils;

pub use crate::builder::EngineBuilder;
pub use crate::denominations::Denominations;
pub use crate::engine::CheckpointEngine;
pub use crate::error::{CoinError, InvalidArgument};
pub use crate::solver::{
    make_change, min_coins, min_coins_many, min_coins_table, solve, solve_batch,
    try_min_coins_many, try_min_coins_table, Query, INFEASIBLE,
};
pub use crate::traits::LayeredProblem;
