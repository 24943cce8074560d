//! Generic checkpointed layered DP engine.
//!
//! This module implements a two-phase algorithm:
//! 1. A forward sweep that saves the frontier at the start of every block.
//! 2. A backward trace that replays one block at a time, from the last to the
//!    first, to recover an optimal path.
//!
//! With `T` layers and block size `b`, at most `T / b` frontiers and one
//! block's worth of replayed values are live at once. The default `b ≈ √T`
//! gives `O(√T · W)` memory for frontier width `W`.
//!
//! The engine is completely generic over implementations of [`LayeredProblem`].

use crate::blocks::{block_bounds, Checkpoint};
use crate::traits::LayeredProblem;
use crate::utils::default_block_size;

/// Checkpointed DP engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use coin_dp::{CheckpointEngine, Denominations, problems::coin_change::CoinChangeProblem};
///
/// let coins = Denominations::new(vec![1, 2, 5]).unwrap();
/// let engine = CheckpointEngine::new(CoinChangeProblem::new(coins, 11));
/// let (count, steps) = engine.run();
/// assert_eq!(count, Some(3));
/// assert_eq!(steps.iter().map(|s| s.coin).sum::<usize>(), 11);
/// ```
pub struct CheckpointEngine<P: LayeredProblem> {
    problem: P,
    block_size: usize,
}

impl<P: LayeredProblem> CheckpointEngine<P> {
    /// Create a new engine with a heuristic block size (≈ √T).
    pub fn new(problem: P) -> Self {
        let b = default_block_size(problem.num_layers());
        Self::with_block_size(problem, b)
    }

    /// Create a new engine with an explicit block size.
    ///
    /// # Panics
    /// Panics if `block_size == 0`.
    pub fn with_block_size(problem: P, block_size: usize) -> Self {
        assert!(block_size > 0, "block_size must be positive");
        Self {
            problem,
            block_size,
        }
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Sweep all layers keeping only the running frontier and return the cost.
    ///
    /// No checkpoints are stored; use [`run`](Self::run) when the path is needed.
    pub fn cost(&self) -> P::Cost {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("coin_cost", layers = self.problem.num_layers());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut frontier = self.problem.init_frontier();
        self.problem.advance_block(0, self.problem.num_layers(), &mut frontier);
        self.problem.extract_cost(&frontier)
    }

    /// Run both phases and return `(optimal_cost, optimal_path_states)`.
    ///
    /// The path is ordered by layer. Its contents when no optimum exists are
    /// up to the problem's `terminal_boundary` / `trace_block`.
    pub fn run(&self) -> (P::Cost, Vec<P::State>) {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "coin_run",
            layers = self.problem.num_layers(),
            block_size = self.block_size
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let (checkpoints, frontier_t) = {
            #[cfg(feature = "tracing")]
            let span = tracing::info_span!("forward_sweep");
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            self.forward_sweep()
        };

        let cost = self.problem.extract_cost(&frontier_t);
        let beta_t = self.problem.terminal_boundary(&frontier_t);

        let path = {
            #[cfg(feature = "tracing")]
            let span = tracing::info_span!("trace_back", blocks = checkpoints.len());
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            self.trace_back(&checkpoints, beta_t)
        };

        (cost, path)
    }

    /// Phase I: advance through every block, saving the frontier at its start.
    ///
    /// Returns the checkpoints covering `[0, T)` and the frontier at layer T.
    fn forward_sweep(&self) -> (Vec<Checkpoint<P::Frontier>>, P::Frontier) {
        let t = self.problem.num_layers();
        let mut checkpoints = Vec::with_capacity(t.div_ceil(self.block_size));
        let mut frontier = self.problem.init_frontier();

        for (start, end) in block_bounds(t, self.block_size) {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!(
                "advance_block",
                block = start / self.block_size,
                start,
                end
            );
            #[cfg(feature = "tracing")]
            let _enter = span.enter();

            checkpoints.push(Checkpoint {
                start,
                end,
                frontier: frontier.clone(),
            });
            self.problem.advance_block(start, end, &mut frontier);
        }

        (checkpoints, frontier)
    }

    /// Phase II: walk the checkpoints from last to first, threading the
    /// boundary each block hands back, then stitch the segments in layer order.
    fn trace_back(
        &self,
        checkpoints: &[Checkpoint<P::Frontier>],
        beta_t: P::Boundary,
    ) -> Vec<P::State> {
        let mut beta = beta_t;
        let mut segments = Vec::with_capacity(checkpoints.len());

        for cp in checkpoints.iter().rev() {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!(
                "trace_block",
                start = cp.start,
                end = cp.end,
                layers = cp.len()
            );
            #[cfg(feature = "tracing")]
            let _enter = span.enter();

            debug_assert!(!cp.is_empty(), "block_bounds never yields empty blocks");
            let (segment, beta_start) =
                self.problem.trace_block(cp.start, cp.end, &cp.frontier, &beta);
            segments.push(segment);
            beta = beta_start;
        }

        segments.into_iter().rev().flatten().collect()
    }
}
