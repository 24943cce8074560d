//! Assorted helpers.

/// Block size used when none is given: `ceil(sqrt(T))`, at least 1.
///
/// Balances the number of checkpoints against the length of the block the
/// backward trace has to replay.
#[inline]
pub fn default_block_size(num_layers: usize) -> usize {
    if num_layers <= 1 {
        return 1;
    }
    let mut root = (num_layers as f64).sqrt() as usize;
    // Float rounding can be off by one for large T.
    while root.saturating_mul(root) > num_layers {
        root -= 1;
    }
    while (root + 1).saturating_mul(root + 1) <= num_layers {
        root += 1;
    }
    if root * root == num_layers {
        root
    } else {
        root + 1
    }
}
