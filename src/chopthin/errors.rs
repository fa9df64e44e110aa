//! Error types for resampling calls.

use std::fmt;

/// Errors that can occur during a resampling call.
///
/// All variants are fatal to the call: there is no partial result and no
/// internal retry. Callers embedding the resampler in a particle-filter loop
/// should treat any of these as fatal for that filtering step.
#[derive(Debug, Clone, PartialEq)]
pub enum ChopthinError {
    /// Caller-supplied parameters are invalid; not retryable without
    /// changing inputs.
    Configuration {
        /// Description of the invalid parameter
        description: String,
    },

    /// The weight vector has no positive mass to resample from; indicates an
    /// upstream degenerate particle set.
    NoPositiveWeights,

    /// A resample pass produced no usable mass, or the threshold search
    /// derived a non-positive floor. Guards the final rescale against
    /// emitting non-finite weights.
    DegenerateResample {
        /// Description of where the degenerate value arose
        context: String,
    },
}

impl fmt::Display for ChopthinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChopthinError::Configuration { description } => {
                write!(f, "Configuration error: {}", description)
            }
            ChopthinError::NoPositiveWeights => {
                write!(f, "Weight vector contains no positive weights")
            }
            ChopthinError::DegenerateResample { context } => {
                write!(f, "Degenerate resample: {}", context)
            }
        }
    }
}

impl std::error::Error for ChopthinError {}
