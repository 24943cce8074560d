//! Error types for the coin solver.
//!
//! Only malformed input is an error. An amount that no combination of coins
//! can reach is a normal result (`-1` / `None`), not a failure.

use thiserror::Error;

/// Input that violates the solver's preconditions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("amount must be non-negative, got {0}")]
    NegativeAmount(i64),

    #[error("amount {0} does not fit the address space of this platform")]
    AmountTooLarge(i64),

    #[error("denomination #{index} must be positive, got {value}")]
    NonPositiveDenomination { index: usize, value: i64 },

    #[error("denomination #{index} ({value}) does not fit the address space of this platform")]
    DenominationTooLarge { index: usize, value: i64 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoinError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    #[error("cannot parse '{token}': {reason}")]
    Parse { token: String, reason: String },
}

pub type Result<T> = std::result::Result<T, CoinError>;
