use crate::utils::default_block_size;
use crate::{CheckpointEngine, LayeredProblem};

/// Configures a [`CheckpointEngine`]; the block size defaults to `ceil(sqrt(T))`.
pub struct EngineBuilder<P: LayeredProblem> {
    problem: P,
    block_size: Option<usize>,
}

impl<P: LayeredProblem> EngineBuilder<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            block_size: None,
        }
    }

    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = Some(block_size);
        self
    }

    /// Accept an optional override, as parsed from a command line.
    pub fn with_block_size_opt(mut self, block_size: Option<usize>) -> Self {
        if block_size.is_some() {
            self.block_size = block_size;
        }
        self
    }

    /// # Panics
    /// Panics if an explicit block size of zero was configured.
    pub fn build(self) -> CheckpointEngine<P> {
        let b = self
            .block_size
            .unwrap_or_else(|| default_block_size(self.problem.num_layers()));
        CheckpointEngine::with_block_size(self.problem, b)
    }
}
