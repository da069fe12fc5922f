// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Filter configuration.
//!
//! One threshold drives every bound in the crate: prefix length, the position
//! bound and both length regimes. Changing it means rebuilding the index, so
//! the config is copied into the index at construction and never mutated.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Threshold and rounding tolerance shared by all filters.
///
/// ```
/// use prefix_join::FilterConfig;
///
/// let config = FilterConfig::new(0.9).unwrap();
/// assert_eq!(config.epsilon, FilterConfig::DEFAULT_EPSILON);
/// assert!(FilterConfig::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Jaccard similarity threshold `J`, in `(0, 1]`.
    pub threshold: f64,
    /// Tolerance added before flooring so that exact boundaries
    /// (e.g. `0.1 * 10`) are not lost to floating-point rounding.
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
}

fn default_epsilon() -> f64 {
    FilterConfig::DEFAULT_EPSILON
}

impl FilterConfig {
    /// Default rounding tolerance.
    pub const DEFAULT_EPSILON: f64 = 1e-3;

    /// Create a validated config with the default epsilon.
    pub fn new(threshold: f64) -> Result<Self> {
        let config = Self {
            threshold,
            epsilon: Self::DEFAULT_EPSILON,
        };
        config.validate()?;
        Ok(config)
    }

    /// Replace the rounding tolerance.
    pub fn with_epsilon(self, epsilon: f64) -> Result<Self> {
        let config = Self { epsilon, ..self };
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants. Deserialized configs bypass [`FilterConfig::new`],
    /// so indexes call this again on whatever they are handed.
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || self.threshold <= 0.0 || self.threshold > 1.0 {
            return Err(Error::InvalidThreshold(self.threshold));
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(Error::InvalidEpsilon(self.epsilon));
        }
        Ok(())
    }
}
