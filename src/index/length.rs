// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix+position+length index.
//!
//! Each key also records the suffix length after the symbol. Let the first
//! shared symbol sit at position `i` in query `s` (suffix `p = |s| - i`) and at
//! position `j` in indexed `t` (suffix `q`). Then
//!
//! - `q ≤ p`: `|s ∩ t| ≤ q + 1` and `|s ∪ t| ≥ |s| + j - 1`
//! - `q > p`: `|s ∩ t| ≤ p + 1` and `|s ∪ t| ≥ i + j - 1 + q`
//!
//! For each prefix symbol of the query, both regimes are walked outward from
//! `q = p` until no position `j ≥ 1` satisfies the bound. Against a built
//! index the walk also stops at the largest stored `j` and `q`; without that
//! cut a small `J` makes it run for about `|s| / J` steps.

use super::{FilterIndex, KeyScheme};
use crate::prefix::PrefixFilter;
use crate::repr::Chars;
use crate::types::{KeyExtent, PositionLengthKey, Symbol};

/// Indexed suffix `q` no longer than the query's: `(q + 1) ≥ J·(|s| + j - 1)`.
fn admits_shorter_suffix(filter: &PrefixFilter, len: usize, suffix: usize, j: usize) -> bool {
    (suffix + 1) as f64 >= filter.threshold() * (len + j - 1) as f64
}

/// Indexed suffix `q` longer than the query's: `(|s| - i + 1 + ε) ≥ J·(i + j - 1 + q)`.
fn admits_longer_suffix(
    filter: &PrefixFilter,
    len: usize,
    position: usize,
    suffix: usize,
    j: usize,
) -> bool {
    (len - position + 1) as f64 + filter.epsilon()
        >= filter.threshold() * (position + j - 1 + suffix) as f64
}

/// Keys are `(symbol, position, suffix length)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionLengthKeys;

impl<S: Symbol> KeyScheme<S> for PositionLengthKeys {
    type Key = PositionLengthKey<S>;

    fn index_keys(&self, prefix: &[S], len: usize, mut emit: impl FnMut(PositionLengthKey<S>)) {
        for (offset, symbol) in prefix.iter().enumerate() {
            let position = offset + 1;
            emit(PositionLengthKey::new(symbol.clone(), position, len - position));
        }
    }

    fn key_extent(key: &PositionLengthKey<S>) -> KeyExtent {
        KeyExtent::new(key.position, key.suffix_len)
    }

    fn admissible_keys(
        &self,
        filter: &PrefixFilter,
        prefix: &[S],
        len: usize,
        limit: KeyExtent,
        mut visit: impl FnMut(&PositionLengthKey<S>),
    ) {
        for (offset, symbol) in prefix.iter().enumerate() {
            let position = offset + 1;
            let own_suffix = len - position;
            let mut key = PositionLengthKey::new(symbol.clone(), 0, 0);

            // Both bounds tighten as the suffix moves away from `own_suffix`,
            // so the first suffix with no admissible `j` ends the walk.
            for suffix in (0..=own_suffix.min(limit.suffix_len)).rev() {
                if !admits_shorter_suffix(filter, len, suffix, 1) {
                    break;
                }
                key.suffix_len = suffix;
                let mut j = 1;
                while j <= limit.position && admits_shorter_suffix(filter, len, suffix, j) {
                    key.position = j;
                    visit(&key);
                    j += 1;
                }
            }

            for suffix in own_suffix + 1..=limit.suffix_len {
                if !admits_longer_suffix(filter, len, position, suffix, 1) {
                    break;
                }
                key.suffix_len = suffix;
                let mut j = 1;
                while j <= limit.position && admits_longer_suffix(filter, len, position, suffix, j) {
                    key.position = j;
                    visit(&key);
                    j += 1;
                }
            }
        }
    }
}

/// Index keyed by `(symbol, position in prefix, symbols after it)`.
pub type PrefixPositionLengthIndex<'a, T, R = Chars> = FilterIndex<'a, T, R, PositionLengthKeys>;
