//! Configuration for resampling calls.

use serde::{Deserialize, Serialize};

use super::errors::ChopthinError;

/// Default dispersion parameter, 3 + 2*sqrt(2).
pub const DEFAULT_ETA: f64 = 5.828427;

/// Parameters for a resampling call.
///
/// `eta` bounds the ratio between the thinning ceiling and the chopping
/// floor by `eta / 2`: values close to the minimum of 4 clip weights
/// aggressively, larger values leave more weight dispersion untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChopthinConfig {
    /// Number of particles to emit. May differ from the input size in
    /// either direction.
    pub target_size: usize,
    /// Dispersion parameter, must be >= 4.
    pub eta: f64,
}

impl ChopthinConfig {
    /// Create a new configuration
    pub fn new(target_size: usize, eta: f64) -> Self {
        Self { target_size, eta }
    }

    /// Create a configuration with the default dispersion parameter
    pub fn with_default_eta(target_size: usize) -> Self {
        Self::new(target_size, DEFAULT_ETA)
    }

    /// Check parameter bounds. Target size is checked before `eta`.
    pub fn validate(&self) -> Result<(), ChopthinError> {
        if self.target_size == 0 {
            return Err(ChopthinError::Configuration {
                description: "target size must be positive".to_string(),
            });
        }
        if !(self.eta >= 4.0) {
            return Err(ChopthinError::Configuration {
                description: format!("eta must be >= 4, got {}", self.eta),
            });
        }
        Ok(())
    }
}
