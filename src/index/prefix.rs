// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix index: one key per prefix symbol.

use super::{FilterIndex, KeyScheme};
use crate::prefix::PrefixFilter;
use crate::repr::Chars;
use crate::types::{KeyExtent, Symbol};

/// Keys are the prefix symbols themselves; a query probes its own prefix
/// symbols.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolKeys;

impl<S: Symbol> KeyScheme<S> for SymbolKeys {
    type Key = S;

    fn index_keys(&self, prefix: &[S], _len: usize, mut emit: impl FnMut(S)) {
        for symbol in prefix {
            emit(symbol.clone());
        }
    }

    fn admissible_keys(
        &self,
        _filter: &PrefixFilter,
        prefix: &[S],
        _len: usize,
        _limit: KeyExtent,
        visit: impl FnMut(&S),
    ) {
        prefix.iter().for_each(visit);
    }
}

/// Index keyed by prefix symbol.
///
/// ```
/// use prefix_join::{FilterConfig, PrefixIndex, SimilarityIndex};
///
/// let corpus = ["bcdefghij", "abcdefghij"];
/// let mut index = PrefixIndex::new(&corpus, FilterConfig::new(0.9)?)?;
/// index.build_many_to_one()?;
///
/// let found = index.candidates("aefghijklmno")?;
/// assert_eq!(found.ids.into_iter().collect::<Vec<_>>(), vec![1]);
/// assert_eq!(found.keys.into_iter().collect::<Vec<_>>(), vec!['a']);
/// # Ok::<(), prefix_join::Error>(())
/// ```
pub type PrefixIndex<'a, T, R = Chars> = FilterIndex<'a, T, R, SymbolKeys>;
