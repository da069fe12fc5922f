// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The prefix filter.
//!
//! If `Jaccard(s, t) ≥ J`, then under any fixed symbol order the first
//! `p(|s|)` symbols of `s` and the first `p(|t|)` symbols of `t` share a
//! symbol, with
//!
//! ```text
//! p(n) = floor((1 - J)·n + ε) + 1
//! ```
//!
//! Only prefix symbols need to be indexed and probed. The epsilon keeps exact
//! boundaries such as `(1 - 0.9)·10 = 1` from flooring to 0.

use crate::config::FilterConfig;
use crate::contracts::check_prefix_length_bounds;
use crate::error::{Error, Result};
use crate::types::CanonicalSet;

/// Computes prefix lengths and prefixes for one threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrefixFilter {
    threshold: f64,
    epsilon: f64,
}

impl PrefixFilter {
    /// Filter for a validated config.
    pub fn new(config: &FilterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            threshold: config.threshold,
            epsilon: config.epsilon,
        })
    }

    /// The Jaccard threshold `J`.
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// The rounding tolerance.
    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Prefix length for a set of `len` symbols.
    ///
    /// Always in `1..=len`. Fails on an empty set, where no prefix can
    /// guarantee an overlap.
    pub fn prefix_length(&self, len: usize) -> Result<usize> {
        if len == 0 {
            return Err(Error::EmptySet);
        }
        let excess = ((1.0 - self.threshold) * len as f64 + self.epsilon).floor() as usize;
        let prefix_len = (excess + 1).min(len);
        check_prefix_length_bounds(len, prefix_len);
        Ok(prefix_len)
    }

    /// The first `prefix_length(|set|)` symbols of `set`.
    pub fn prefix<'s, S>(&self, set: &'s CanonicalSet<S>) -> Result<&'s [S]> {
        let prefix_len = self.prefix_length(set.len())?;
        Ok(&set.as_slice()[..prefix_len])
    }
}
