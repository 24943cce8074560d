//! Core trait for layered dynamic programs with checkpointed reconstruction.
//!
//! To run a DP on [`CheckpointEngine`](crate::engine::CheckpointEngine),
//! implement [`LayeredProblem`] for a struct that captures the instance.
//!
//! The trait encodes a small interface:
//! - Layered structure: layers 0..=T, each computed from the one before.
//! - Frontiers: a bounded-width view of the DP values needed for the next step.
//! - Boundaries: the "pending" state a backward trace still has to explain.
//! - Local tracing: recover the part of an optimal path that lies inside one
//!   block, given only the frontier checkpointed at the block's start.
//!
//! The engine keeps one frontier per block and replays a block only when the
//! backward trace reaches it, so the full table never lives in memory.

/// A layered dynamic program instance.
///
/// Semantics:
/// - There are `T = num_layers()` steps.
/// - `forward_step(i, frontier)` advances the frontier from layer `i` to `i+1`.
/// - After T steps the frontier holds the answer, read via `extract_cost`.
/// - The backward trace starts from `terminal_boundary` and walks blocks in
///   reverse, each call to `trace_block` handing a boundary to the block before.
pub trait LayeredProblem {
    /// One element of the reconstructed optimal path.
    type State: Clone;

    /// DP values carried from one layer to the next.
    type Frontier: Clone;

    /// What the backward trace still owes at a block boundary.
    type Boundary: Clone;

    /// Objective value.
    type Cost: Clone;

    /// Number of DP steps `T`.
    fn num_layers(&self) -> usize;

    /// Frontier at layer 0.
    fn init_frontier(&self) -> Self::Frontier;

    /// Advance `frontier` in place from layer `layer` to `layer + 1`.
    ///
    /// Must only depend on the frontier and fixed problem data.
    fn forward_step(&self, layer: usize, frontier: &mut Self::Frontier);

    /// Advance `frontier` across the block `[start, end)`.
    fn advance_block(&self, start: usize, end: usize, frontier: &mut Self::Frontier) {
        for layer in start..end {
            self.forward_step(layer, frontier);
        }
    }

    /// Objective value carried by the frontier at layer T.
    fn extract_cost(&self, frontier_t: &Self::Frontier) -> Self::Cost;

    /// Boundary the backward trace starts from, chosen from the final frontier.
    fn terminal_boundary(&self, frontier_t: &Self::Frontier) -> Self::Boundary;

    /// Trace the optimal path backwards through the block `[start, end)`.
    ///
    /// Inputs:
    /// - `frontier_start`: the frontier checkpointed at layer `start`,
    /// - `boundary_end`: the boundary handed over by the block after this one
    ///   (or the terminal boundary for the last block).
    ///
    /// Returns the path states that fall inside this block, ordered by layer,
    /// and the boundary to hand to the previous block.
    fn trace_block(
        &self,
        start: usize,
        end: usize,
        frontier_start: &Self::Frontier,
        boundary_end: &Self::Boundary,
    ) -> (Vec<Self::State>, Self::Boundary);
}
