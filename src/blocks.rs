//! Block checkpoints kept by the engine between its two phases.

/// Frontier saved at the start of the layer interval `[start, end)`.
#[derive(Debug, Clone)]
pub struct Checkpoint<F> {
    /// First layer of the block.
    pub start: usize,
    /// One past the last layer of the block.
    pub end: usize,
    /// Frontier at layer `start`.
    pub frontier: F,
}

impl<F> Checkpoint<F> {
    /// Number of layers the block spans.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split `num_layers` layers into consecutive `[start, end)` blocks of at
/// most `block_size` layers each.
pub fn block_bounds(num_layers: usize, block_size: usize) -> impl Iterator<Item = (usize, usize)> {
    debug_assert!(block_size > 0);
    (0..num_layers)
        .step_by(block_size)
        .map(move |start| (start, (start + block_size).min(num_layers)))
}
