//! Output types for resampling results.

use serde::Serialize;

/// Result of one resampling pass.
///
/// Both vectors have exactly the configured target length. Entries are in
/// source order: a particle duplicated k times occupies k consecutive slots.
#[derive(Debug, Clone, Serialize)]
pub struct Resampled {
    /// Output particle weights; sums to the target size within floating
    /// tolerance.
    pub weights: Vec<f64>,
    /// 1-based position in the input vector each output slot was copied
    /// from. The same position may appear several times (duplication) and
    /// some positions may be absent (elimination).
    pub indices: Vec<usize>,
}

impl Resampled {
    /// Number of emitted particles
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True if no particles were emitted
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Sum of the emitted weights
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }
}
