//! Validated denomination sets.
//!
//! Every solver entry point works on a [`Denominations`] value: coin values
//! that are strictly positive, sorted ascending and free of duplicates.
//! Zero and negative coins are rejected rather than ignored, so a typo in the
//! input never silently changes the answer.

use std::str::FromStr;

use crate::error::{CoinError, InvalidArgument, Result};

/// A normalised set of coin values, each available in unlimited supply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Denominations {
    coins: Vec<usize>,
}

impl Denominations {
    /// Build a set from unsigned coin values.
    ///
    /// Duplicates are dropped and the values sorted; a zero coin is rejected.
    pub fn new(mut coins: Vec<usize>) -> Result<Self> {
        if let Some(index) = coins.iter().position(|&c| c == 0) {
            return Err(InvalidArgument::NonPositiveDenomination { index, value: 0 }.into());
        }
        coins.sort_unstable();
        coins.dedup();
        Ok(Self { coins })
    }

    /// Build a set from signed input, as received from callers that speak in
    /// plain integers.
    ///
    /// The reported index refers to the position in `values`, before sorting.
    pub fn from_signed(values: &[i64]) -> Result<Self> {
        let mut coins = Vec::with_capacity(values.len());
        for (index, &value) in values.iter().enumerate() {
            if value <= 0 {
                return Err(InvalidArgument::NonPositiveDenomination { index, value }.into());
            }
            let coin = usize::try_from(value)
                .map_err(|_| InvalidArgument::DenominationTooLarge { index, value })?;
            coins.push(coin);
        }
        Self::new(coins)
    }

    /// The empty set. Only the amount `0` is reachable with it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Coin values in ascending order.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.coins
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coins.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    /// Largest coin, if any.
    #[inline]
    pub fn max(&self) -> Option<usize> {
        self.coins.last().copied()
    }

    #[inline]
    pub fn contains(&self, coin: usize) -> bool {
        self.coins.binary_search(&coin).is_ok()
    }

    /// Coins not larger than `limit`, ascending.
    #[inline]
    pub fn up_to(&self, limit: usize) -> &[usize] {
        let end = self.coins.partition_point(|&c| c <= limit);
        &self.coins[..end]
    }
}

impl FromStr for Denominations {
    type Err = CoinError;

    /// Parse a comma-separated list such as `"1, 2, 5"`.
    ///
    /// An empty or all-whitespace string yields the empty set.
    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(Self::empty());
        }
        let values = s
            .split(',')
            .map(|token| {
                let token = token.trim();
                token.parse::<i64>().map_err(|err| CoinError::Parse {
                    token: token.to_string(),
                    reason: err.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_signed(&values)
    }
}

/// Convert a signed amount into a table length, rejecting negatives.
pub fn checked_amount(amount: i64) -> Result<usize> {
    if amount < 0 {
        return Err(InvalidArgument::NegativeAmount(amount).into());
    }
    usize::try_from(amount).map_err(|_| InvalidArgument::AmountTooLarge(amount).into())
}
