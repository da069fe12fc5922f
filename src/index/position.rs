// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix+position index.
//!
//! Let the first symbol shared by query `s` and indexed `t` sit at position
//! `i` in `s` and `j` in `t`. The `i - 1` symbols of `s` and `j - 1` symbols of
//! `t` before it are not shared, so
//!
//! ```text
//! |s ∩ t| ≤ |s| - i + 1        |s ∪ t| ≥ |s| + j - 1
//! ```
//!
//! and `Jaccard ≥ J` forces `j ≤ (|s|·(1 - J) - i + 1 + J) / J`.

use super::{FilterIndex, KeyScheme};
use crate::prefix::PrefixFilter;
use crate::repr::Chars;
use crate::types::{KeyExtent, PositionKey, Symbol};

/// Largest position `j` at which an indexed string can carry the query's
/// prefix symbol from position `i` and still reach the threshold.
///
/// `floor((len·(1 - J) - i + 1 + J) / J + ε)`, never negative.
pub fn max_position(filter: &PrefixFilter, position: usize, len: usize) -> usize {
    let threshold = filter.threshold();
    let bound = (len as f64 * (1.0 - threshold) - position as f64 + 1.0 + threshold) / threshold
        + filter.epsilon();
    bound.floor().max(0.0) as usize
}

/// Keys are `(symbol, position)`; a query symbol at position `i` probes
/// positions `1..=max_position(i, |s|)`, cut at the deepest stored position.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionKeys;

impl<S: Symbol> KeyScheme<S> for PositionKeys {
    type Key = PositionKey<S>;

    fn index_keys(&self, prefix: &[S], _len: usize, mut emit: impl FnMut(PositionKey<S>)) {
        for (offset, symbol) in prefix.iter().enumerate() {
            emit(PositionKey::new(symbol.clone(), offset + 1));
        }
    }

    fn key_extent(key: &PositionKey<S>) -> KeyExtent {
        KeyExtent::new(key.position, 0)
    }

    fn admissible_keys(
        &self,
        filter: &PrefixFilter,
        prefix: &[S],
        len: usize,
        limit: KeyExtent,
        mut visit: impl FnMut(&PositionKey<S>),
    ) {
        for (offset, symbol) in prefix.iter().enumerate() {
            let mut key = PositionKey::new(symbol.clone(), 0);
            let last = max_position(filter, offset + 1, len).min(limit.position);
            for j in 1..=last {
                key.position = j;
                visit(&key);
            }
        }
    }
}

/// Index keyed by `(symbol, position in prefix)`.
pub type PrefixPositionIndex<'a, T, R = Chars> = FilterIndex<'a, T, R, PositionKeys>;
