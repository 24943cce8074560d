//! The minimum coin solver.
//!
//! Bottom-up DP over sub-amounts `0..=amount`. Entry `i` of the table is the
//! fewest coins summing to `i`, or `None` when `i` cannot be reached. Using
//! `Option` keeps "unreachable" apart from every real count, so no entry is
//! ever incremented past a sentinel.
//!
//! Time `O(amount × |coins|)`, space `O(amount)`.

use crate::denominations::{checked_amount, Denominations};
use crate::error::{InvalidArgument, Result};
use crate::problems::coin_change::{Change, CoinChangeProblem};
use crate::CheckpointEngine;

/// Value returned by [`solve`] when no combination reaches the amount.
pub const INFEASIBLE: i64 = -1;

/// Fewest coins from `denominations` summing exactly to `amount`.
///
/// Returns `-1` when the amount is unreachable and `0` for a zero amount.
///
/// # Errors
/// [`InvalidArgument`](crate::error::InvalidArgument) if `amount` is negative
/// or any denomination is not positive, and
/// [`AmountTooLarge`](crate::error::InvalidArgument::AmountTooLarge) if the
/// table for `amount` cannot be allocated. Validation happens before any
/// table is allocated.
///
/// ```
/// assert_eq!(coin_dp::solve(&[1, 2, 5], 11).unwrap(), 3);
/// assert_eq!(coin_dp::solve(&[2], 3).unwrap(), -1);
/// assert!(coin_dp::solve(&[1, 0], 3).is_err());
/// ```
pub fn solve(denominations: &[i64], amount: i64) -> Result<i64> {
    let coins = Denominations::from_signed(denominations)?;
    let amount = checked_amount(amount)?;
    if amount == 0 {
        return Ok(0);
    }
    let table = try_min_coins_table(&coins, amount)?;
    Ok(table[amount].map_or(INFEASIBLE, |count| count as i64))
}

/// Typed form of [`solve`]: `None` means infeasible.
pub fn min_coins(coins: &Denominations, amount: usize) -> Option<usize> {
    if amount == 0 {
        return Some(0);
    }
    let table = min_coins_table(coins, amount);
    let answer = table[amount];

    #[cfg(feature = "tracing")]
    tracing::debug!(amount, coins = coins.len(), ?answer, "min_coins");

    answer
}

/// Full DP table for every sub-amount `0..=max_amount`.
///
/// # Panics
/// Panics if the table cannot be allocated; see [`try_min_coins_table`].
pub fn min_coins_table(coins: &Denominations, max_amount: usize) -> Vec<Option<usize>> {
    let mut dp: Vec<Option<usize>> = vec![None; max_amount + 1];
    fill_table(coins, &mut dp);
    dp
}

/// [`min_coins_table`] that reports an unallocatable table as
/// [`InvalidArgument::AmountTooLarge`] instead of panicking.
pub fn try_min_coins_table(
    coins: &Denominations,
    max_amount: usize,
) -> Result<Vec<Option<usize>>> {
    let too_large =
        || InvalidArgument::AmountTooLarge(i64::try_from(max_amount).unwrap_or(i64::MAX));
    let len = max_amount.checked_add(1).ok_or_else(too_large)?;
    let mut dp: Vec<Option<usize>> = Vec::new();
    dp.try_reserve_exact(len).map_err(|_| too_large())?;
    dp.resize(len, None);
    fill_table(coins, &mut dp);
    Ok(dp)
}

/// Fill `dp` in place; its length fixes the largest sub-amount.
fn fill_table(coins: &Denominations, dp: &mut [Option<usize>]) {
    if dp.is_empty() {
        return;
    }
    dp[0] = Some(0);
    for i in 1..dp.len() {
        let mut best: Option<usize> = None;
        for &c in coins.up_to(i) {
            if let Some(prev) = dp[i - c] {
                let cand = prev + 1;
                if best.map_or(true, |b| cand < b) {
                    best = Some(cand);
                }
            }
        }
        dp[i] = best;
    }
}

/// Answer several amounts from one shared table sized to the largest.
pub fn min_coins_many(coins: &Denominations, amounts: &[usize]) -> Vec<Option<usize>> {
    let Some(&max_amount) = amounts.iter().max() else {
        return Vec::new();
    };
    let table = min_coins_table(coins, max_amount);
    amounts.iter().map(|&a| table[a]).collect()
}

/// [`min_coins_many`] that fails with [`InvalidArgument::AmountTooLarge`]
/// when the shared table cannot be allocated.
pub fn try_min_coins_many(
    coins: &Denominations,
    amounts: &[usize],
) -> Result<Vec<Option<usize>>> {
    let Some(&max_amount) = amounts.iter().max() else {
        return Ok(Vec::new());
    };
    let table = try_min_coins_table(coins, max_amount)?;
    Ok(amounts.iter().map(|&a| table[a]).collect())
}

/// An optimal coin multiset for `amount`, reconstructed with the checkpoint
/// engine so memory stays at `O(sqrt(amount) × max(coin))`.
///
/// ```
/// use coin_dp::{make_change, Denominations};
///
/// let coins = Denominations::new(vec![1, 2, 5]).unwrap();
/// let change = make_change(&coins, 11).unwrap();
/// assert_eq!(change.count(), 3);
/// assert_eq!(change.total(), 11);
/// ```
pub fn make_change(coins: &Denominations, amount: usize) -> Option<Change> {
    let engine = CheckpointEngine::new(CoinChangeProblem::new(coins.clone(), amount));
    let (count, steps) = engine.run();
    count.map(|_| Change::from_steps(&steps))
}

/// One independent `(denominations, amount)` request for [`solve_batch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub denominations: Vec<i64>,
    pub amount: i64,
}

impl Query {
    pub fn new(denominations: Vec<i64>, amount: i64) -> Self {
        Self {
            denominations,
            amount,
        }
    }
}

/// Solve independent queries, returning results in input order.
///
/// With the `parallel` feature the queries are spread across rayon's pool.
/// Each query still owns its own table.
pub fn solve_batch(queries: &[Query]) -> Vec<Result<i64>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        queries
            .par_iter()
            .map(|q| solve(&q.denominations, q.amount))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        queries
            .iter()
            .map(|q| solve(&q.denominations, q.amount))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoinError;

    fn coins(values: &[usize]) -> Denominations {
        Denominations::new(values.to_vec()).unwrap()
    }

    #[test]
    fn classic_scenarios() {
        assert_eq!(solve(&[1, 2, 5], 11).unwrap(), 3);
        assert_eq!(solve(&[2], 3).unwrap(), -1);
        assert_eq!(solve(&[1], 0).unwrap(), 0);
        assert_eq!(solve(&[1, 2, 5], 0).unwrap(), 0);
        assert_eq!(solve(&[3, 7], 5).unwrap(), -1);
    }

    #[test]
    fn empty_set_reaches_only_zero() {
        assert_eq!(solve(&[], 0).unwrap(), 0);
        assert_eq!(solve(&[], 1).unwrap(), -1);
        assert_eq!(solve(&[], 17).unwrap(), -1);
    }

    #[test]
    fn greedy_is_not_optimal_but_dp_is() {
        // Greedy picks 4+1+1; optimal is 3+3.
        assert_eq!(solve(&[1, 3, 4], 6).unwrap(), 2);
    }

    #[test]
    fn rejects_invalid_input() {
        assert_eq!(
            solve(&[1, 2], -1).unwrap_err(),
            CoinError::InvalidArgument(InvalidArgument::NegativeAmount(-1))
        );
        assert_eq!(
            solve(&[1, 0], 5).unwrap_err(),
            CoinError::InvalidArgument(InvalidArgument::NonPositiveDenomination {
                index: 1,
                value: 0
            })
        );
    }

    #[test]
    fn unallocatable_amount_is_rejected() {
        assert!(matches!(
            solve(&[1], i64::MAX),
            Err(CoinError::InvalidArgument(InvalidArgument::AmountTooLarge(_)))
        ));
        assert!(matches!(
            try_min_coins_table(&coins(&[1]), usize::MAX),
            Err(CoinError::InvalidArgument(InvalidArgument::AmountTooLarge(_)))
        ));
        assert!(try_min_coins_many(&coins(&[1]), &[3, usize::MAX]).is_err());
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn failed_reservation_is_rejected() {
        // 16 PiB: a valid layout, but no allocator can back it.
        assert!(matches!(
            try_min_coins_table(&coins(&[1]), 1 << 50),
            Err(CoinError::InvalidArgument(InvalidArgument::AmountTooLarge(_)))
        ));
    }

    #[test]
    fn fallible_table_matches_infallible() {
        let set = coins(&[3, 5]);
        assert_eq!(try_min_coins_table(&set, 40).unwrap(), min_coins_table(&set, 40));
        assert_eq!(
            try_min_coins_many(&set, &[4, 0, 8]).unwrap(),
            min_coins_many(&set, &[4, 0, 8])
        );
        assert!(try_min_coins_many(&set, &[]).unwrap().is_empty());
    }

    #[test]
    fn duplicates_do_not_change_the_answer() {
        assert_eq!(solve(&[5, 1, 5, 2, 1], 11).unwrap(), 3);
    }

    #[test]
    fn table_covers_every_sub_amount() {
        let table = min_coins_table(&coins(&[3, 5]), 10);
        let expected = [
            Some(0),
            None,
            None,
            Some(1),
            None,
            Some(1),
            Some(2),
            None,
            Some(2),
            Some(3),
            Some(2),
        ];
        assert_eq!(table, expected);
    }

    #[test]
    fn many_shares_one_table() {
        let answers = min_coins_many(&coins(&[2]), &[4, 0, 3, 10]);
        assert_eq!(answers, vec![Some(2), Some(0), None, Some(5)]);
        assert!(min_coins_many(&coins(&[2]), &[]).is_empty());
    }

    #[test]
    fn make_change_matches_count() {
        let set = coins(&[1, 2, 5]);
        let change = make_change(&set, 11).unwrap();
        assert_eq!(change.count(), 3);
        assert_eq!(change.total(), 11);
        assert!(make_change(&coins(&[2]), 3).is_none());
        assert_eq!(make_change(&set, 0).unwrap().count(), 0);
    }

    #[test]
    fn batch_keeps_input_order() {
        let queries = vec![
            Query::new(vec![1, 2, 5], 11),
            Query::new(vec![2], 3),
            Query::new(vec![1], -4),
        ];
        let results = solve_batch(&queries);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0], Ok(3));
        assert_eq!(results[1], Ok(-1));
        assert!(results[2].is_err());
    }
}
