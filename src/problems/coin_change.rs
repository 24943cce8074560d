//! Minimum coin change as a layered DP.
//!
//! Layers are sub-amounts: the frontier at layer `i` holds the fewest-coin
//! counts for sub-amounts `i - W + 1 ..= i`, where `W` is the largest coin.
//! No transition reaches further back than `W`, so that window is all a step
//! needs. Sub-amounts below zero read as unreachable.
//!
//! The backward trace starts at the full amount and repeatedly removes a coin
//! `c` such that `dp[p - c] + 1 == dp[p]`, preferring the largest such coin.
//! Boundaries are the sub-amount still left to explain (`None` when the
//! amount is infeasible).

use std::collections::BTreeMap;
use std::fmt;

use crate::denominations::Denominations;
use crate::traits::LayeredProblem;

#[derive(Clone, Debug)]
pub struct CoinChangeProblem {
    coins: Denominations,
    amount: usize,
}

/// Ring buffer of the last `width` DP entries, newest at sub-amount `top`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoinWindow {
    slots: Vec<Option<usize>>,
    top: usize,
}

impl CoinWindow {
    /// Window at layer 0: only sub-amount 0 is reachable, with zero coins.
    fn origin(width: usize) -> Self {
        let mut slots = vec![None; width.max(1)];
        slots[0] = Some(0);
        Self { slots, top: 0 }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.slots.len()
    }

    /// Newest sub-amount held.
    #[inline]
    pub fn top(&self) -> usize {
        self.top
    }

    /// Count for `sub_amount`, which must lie in `top - width + 1 ..= top`.
    #[inline]
    pub fn get(&self, sub_amount: usize) -> Option<usize> {
        debug_assert!(sub_amount <= self.top && self.top - sub_amount < self.width());
        self.slots[sub_amount % self.width()]
    }

    /// Count for the newest sub-amount.
    #[inline]
    pub fn latest(&self) -> Option<usize> {
        self.get(self.top)
    }

    #[inline]
    fn push(&mut self, value: Option<usize>) {
        self.top += 1;
        let w = self.width();
        self.slots[self.top % w] = value;
    }
}

/// One coin of the reconstructed change and the sub-amount it completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoinStep {
    pub coin: usize,
    pub reached: usize,
}

impl CoinChangeProblem {
    pub fn new(coins: Denominations, amount: usize) -> Self {
        Self { coins, amount }
    }

    pub fn coins(&self) -> &Denominations {
        &self.coins
    }

    pub fn amount(&self) -> usize {
        self.amount
    }

    fn width(&self) -> usize {
        self.coins.max().unwrap_or(1)
    }

    /// Fewest coins for `next`, reading predecessors from a window whose top
    /// is `next - 1`.
    fn best_for(&self, next: usize, window: &CoinWindow) -> Option<usize> {
        let mut best: Option<usize> = None;
        for &c in self.coins.up_to(next) {
            if let Some(prev) = window.get(next - c) {
                let cand = prev + 1;
                if best.map_or(true, |b| cand < b) {
                    best = Some(cand);
                }
            }
        }
        best
    }
}

impl LayeredProblem for CoinChangeProblem {
    type State = CoinStep;
    type Frontier = CoinWindow;
    type Boundary = Option<usize>;
    type Cost = Option<usize>;

    fn num_layers(&self) -> usize {
        self.amount
    }

    fn init_frontier(&self) -> Self::Frontier {
        CoinWindow::origin(self.width())
    }

    fn forward_step(&self, layer: usize, frontier: &mut Self::Frontier) {
        debug_assert_eq!(frontier.top(), layer);
        let value = self.best_for(layer + 1, frontier);
        frontier.push(value);
    }

    fn extract_cost(&self, frontier_t: &Self::Frontier) -> Self::Cost {
        frontier_t.latest()
    }

    fn terminal_boundary(&self, frontier_t: &Self::Frontier) -> Self::Boundary {
        frontier_t.latest().map(|_| self.amount)
    }

    fn trace_block(
        &self,
        start: usize,
        _end: usize,
        frontier_start: &Self::Frontier,
        boundary_end: &Self::Boundary,
    ) -> (Vec<Self::State>, Self::Boundary) {
        let Some(mut pending) = *boundary_end else {
            return (Vec::new(), None);
        };
        if pending <= start {
            return (Vec::new(), Some(pending));
        }

        // Replay the block up to the pending sub-amount.
        let mut replay = Vec::with_capacity(pending - start);
        let mut window = frontier_start.clone();
        for layer in start..pending {
            self.forward_step(layer, &mut window);
            replay.push(window.latest());
        }
        let lookup = |x: usize| -> Option<usize> {
            if x > start {
                replay[x - start - 1]
            } else {
                frontier_start.get(x)
            }
        };

        let mut steps = Vec::new();
        while pending > start {
            let predecessor = lookup(pending).and_then(|k| {
                self.coins
                    .up_to(pending)
                    .iter()
                    .rev()
                    .copied()
                    .find(|&c| k > 0 && lookup(pending - c) == Some(k - 1))
            });
            let Some(coin) = predecessor else {
                debug_assert!(false, "sub-amount {pending} on the trace has no predecessor");
                return (Vec::new(), None);
            };
            steps.push(CoinStep {
                coin,
                reached: pending,
            });
            pending -= coin;
        }

        steps.reverse();
        (steps, Some(pending))
    }
}

/// An optimal multiset of coins, in the order the trace added them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Change {
    coins: Vec<usize>,
}

impl Change {
    pub fn from_steps(steps: &[CoinStep]) -> Self {
        Self {
            coins: steps.iter().map(|s| s.coin).collect(),
        }
    }

    pub fn coins(&self) -> &[usize] {
        &self.coins
    }

    pub fn count(&self) -> usize {
        self.coins.len()
    }

    pub fn total(&self) -> usize {
        self.coins.iter().sum()
    }

    /// How many of each denomination the change uses.
    pub fn tally(&self) -> BTreeMap<usize, usize> {
        let mut tally = BTreeMap::new();
        for &c in &self.coins {
            *tally.entry(c).or_insert(0) += 1;
        }
        tally
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for c in &self.coins {
            if !first {
                f.write_str(" + ")?;
            }
            write!(f, "{c}")?;
            first = false;
        }
        Ok(())
    }
}
