/*!
Chopthin resampling: bounded-ratio particle resampling.

Resamples a weighted particle set to a fixed target size while bounding the
ratio between the largest and smallest output weight by `eta / 2`:
under-weight particles are *chopped* (raised to a floor `a`, possibly merged
away), over-weight particles are *thinned* (split into several copies
against a ceiling `b = a * eta / 2`).

The call runs in two stages:
- [`bounds`] - randomized threshold search for the clipping bounds
- [`systematic`] - single-offset systematic sweep emitting exactly
  `target_size` particles, rescaled to sum to the target
*/

pub mod bounds;
pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod output;
pub mod systematic;

pub use bounds::{solve_bounds, Bounds};
pub use config::{ChopthinConfig, DEFAULT_ETA};
pub use diagnostics::effective_sample_size;
pub use errors::ChopthinError;
pub use output::Resampled;
pub use systematic::systematic_resample;

use crate::common::rng::{Rng, SimpleRng};

/// Resample `weights` to exactly `config.target_size` particles using a
/// caller-supplied generator.
///
/// Parameters are validated before the weight vector is touched, so a bad
/// target size or `eta` fails the same way regardless of the input data.
///
/// # Arguments
/// * `rng` - Generator for pivot selection and the sweep offset; pass a
///   seeded [`SimpleRng`] for reproducible output
/// * `weights` - Unnormalized importance weights, at least one strictly
///   positive entry
/// * `config` - Target size and dispersion parameter
///
/// # Returns
/// [`Resampled`] with `target_size` weights summing to `target_size` and
/// 1-based source indices.
///
/// # Errors
/// [`ChopthinError::Configuration`] for a zero target size, `eta < 4`, or an
/// empty weight vector; [`ChopthinError::NoPositiveWeights`] if the vector
/// has no positive mass; [`ChopthinError::DegenerateResample`] if a resample
/// pass would otherwise produce non-finite weights.
pub fn chopthin_with_rng(
    rng: &mut impl Rng,
    weights: &[f64],
    config: &ChopthinConfig,
) -> Result<Resampled, ChopthinError> {
    config.validate()?;
    if weights.is_empty() {
        return Err(ChopthinError::Configuration {
            description: "weight vector must contain at least one particle".to_string(),
        });
    }

    let bounds = solve_bounds(rng, weights, config.target_size, config.eta)?;
    systematic_resample(rng, weights, config.target_size, bounds)
}

/// Resample with a fresh entropy-seeded generator.
///
/// Convenience wrapper around [`chopthin_with_rng`] for callers that do not
/// need reproducibility. Each call draws its own seed, so concurrent calls
/// never share generator state.
pub fn chopthin(weights: &[f64], config: &ChopthinConfig) -> Result<Resampled, ChopthinError> {
    let mut rng = SimpleRng::from_entropy();
    chopthin_with_rng(&mut rng, weights, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::rng::SimpleRng;

    #[test]
    fn test_validation_runs_before_weights_are_read() {
        let mut rng = SimpleRng::new(42);
        // Invalid target with an empty vector: the target error wins.
        let err = chopthin_with_rng(&mut rng, &[], &ChopthinConfig::new(0, 3.0)).unwrap_err();
        assert!(matches!(err, ChopthinError::Configuration { description } if description.contains("target")));
    }

    #[test]
    fn test_empty_weights_rejected() {
        let mut rng = SimpleRng::new(42);
        let err = chopthin_with_rng(&mut rng, &[], &ChopthinConfig::with_default_eta(3)).unwrap_err();
        assert!(matches!(err, ChopthinError::Configuration { .. }));
    }

    #[test]
    fn test_entropy_seeded_call_returns_valid_shape() {
        let weights = [0.5, 1.5, 2.0];
        let out = chopthin(&weights, &ChopthinConfig::with_default_eta(3)).unwrap();
        assert_eq!(out.len(), 3);
        assert!((out.total_weight() - 3.0).abs() < 1e-9);
    }
}
