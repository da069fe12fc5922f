// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Similarity indexes: map prefix-derived keys to the documents that
//! produced them.
//!
//! Three variants, each more selective than the last:
//! - **Prefix**: key = symbol
//! - **Prefix + position**: key = (symbol, position in prefix)
//! - **Prefix + position + length**: key = (symbol, position, suffix length)
//!
//! They share one engine, [`FilterIndex`], and differ only in their
//! [`KeyScheme`]: which keys a string stores, and which keys a query is
//! allowed to probe.

mod filter;
mod inverted;
mod length;
mod position;
mod prefix;

use std::fmt::Debug;
use std::hash::Hash;

pub use filter::FilterIndex;
pub use inverted::InvertedIndex;
pub use length::{PositionLengthKeys, PrefixPositionLengthIndex};
pub use position::{max_position, PositionKeys, PrefixPositionIndex};
pub use prefix::{PrefixIndex, SymbolKeys};

use crate::error::Result;
use crate::prefix::PrefixFilter;
use crate::types::{CandidatePairs, Candidates, KeyExtent, Mode, Symbol};

/// Key derivation and admissibility for one index variant.
pub trait KeyScheme<S: Symbol>: Default {
    /// Key type stored in the inverted index.
    type Key: Clone + Eq + Hash + Ord + Debug;

    /// Emit the keys stored for a string with the given prefix and set size.
    fn index_keys(&self, prefix: &[S], len: usize, emit: impl FnMut(Self::Key));

    /// Position and suffix length a key contributes to its index's extent.
    ///
    /// Schemes whose keys carry neither keep the default.
    fn key_extent(_key: &Self::Key) -> KeyExtent {
        KeyExtent::default()
    }

    /// Visit every key a query with the given prefix and set size may match,
    /// skipping keys outside `limit`.
    ///
    /// Any string with Jaccard ≥ `J` to the query must have stored at least
    /// one of the visited keys, provided its keys lie within `limit`.
    fn admissible_keys(
        &self,
        filter: &PrefixFilter,
        prefix: &[S],
        len: usize,
        limit: KeyExtent,
        visit: impl FnMut(&Self::Key),
    );
}

/// Candidate generation over a corpus.
///
/// An index starts in [`Mode::Unset`] and is built exactly once, by one of the
/// two builders.
pub trait SimilarityIndex {
    /// Key type of the underlying inverted index.
    type Key;

    /// Which builder populated the index, if any.
    fn mode(&self) -> Mode;

    /// Index the whole corpus up front for repeated [`candidates`] queries.
    ///
    /// [`candidates`]: SimilarityIndex::candidates
    fn build_many_to_one(&mut self) -> Result<()>;

    /// Self-join the corpus in one streaming pass and return every candidate
    /// pair. Each unordered pair appears once; no document is paired with
    /// itself.
    fn build_many_to_many(&mut self) -> Result<CandidatePairs>;

    /// Corpus documents that may reach the threshold with `query`.
    ///
    /// Only valid after [`build_many_to_one`].
    ///
    /// [`build_many_to_one`]: SimilarityIndex::build_many_to_one
    fn candidates(&self, query: &str) -> Result<Candidates<Self::Key>>;
}
