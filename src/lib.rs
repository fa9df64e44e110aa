/*!
# chopthin-rs - bounded-ratio particle resampling

Rust implementation of the chopthin resampler for sequential Monte Carlo /
particle filter pipelines (Gandy & Lau, "The chopthin algorithm for
resampling", IEEE Transactions on Signal Processing 64(16), 2016).

Given `n` unnormalized importance weights, the resampler emits exactly `N`
(index, weight) pairs whose weights sum to `N`, while bounding the ratio
between the thinning ceiling and the chopping floor by `eta / 2`:
over-weight particles are split into several copies, under-weight particles
are merged away or raised to the floor.

## Features

- Expected-linear randomized threshold search for the clipping bounds
- Low-variance systematic sweep with a single shared uniform offset
- Caller-supplied generators: any `rand::RngCore` type or the bundled
  deterministic [`SimpleRng`] threads through `&mut impl Rng`
- No global state; concurrent calls need no locking

## Modules

- [`chopthin`] - resampling algorithm, configuration, errors, diagnostics
- [`common`] - low-level utilities (random number generation)

## Example

```rust
use chopthin_rs::{chopthin_with_rng, ChopthinConfig, SimpleRng};

let weights = vec![0.1, 2.5, 0.4, 1.0];
let config = ChopthinConfig::with_default_eta(4);

let mut rng = SimpleRng::new(42);
let resampled = chopthin_with_rng(&mut rng, &weights, &config).unwrap();

assert_eq!(resampled.len(), 4);
assert!((resampled.total_weight() - 4.0).abs() < 1e-9);
for &i in &resampled.indices {
    assert!((1..=weights.len()).contains(&i)); // 1-based source positions
}
```
*/

// ============================================================================
// Core modules
// ============================================================================

/// Chopthin resampling algorithm and its configuration
pub mod chopthin;

/// Low-level utilities (random number generation)
pub mod common;

// ============================================================================
// Re-exports
// ============================================================================

pub use chopthin::{
    chopthin, chopthin_with_rng, effective_sample_size, solve_bounds, systematic_resample, Bounds,
    ChopthinConfig, ChopthinError, Resampled, DEFAULT_ETA,
};
pub use common::rng::{Rng, SimpleRng};
