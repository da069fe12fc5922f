// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a similarity index.
//!
//! | Type                 | Purpose                                         |
//! |----------------------|-------------------------------------------------|
//! | `CanonicalSet`       | A string as an ordered, duplicate-free set      |
//! | `PositionKey`        | Index key: symbol + position in prefix          |
//! | `PositionLengthKey`  | Index key: symbol + position + suffix length    |
//! | `KeyExtent`          | Largest position and suffix length stored       |
//! | `Pair`               | Unordered candidate pair, stored `(low, high)`  |
//! | `Candidates`         | Result of a many-to-one query                   |
//! | `Mode`               | Which builder populated the index               |
//!
//! # Invariants
//!
//! - **CanonicalSet**: no symbol appears twice; symbols are sorted by the order
//!   the set was built with.
//! - **Pair**: `low < high`. A pair of a document with itself cannot be built.
//! - **Key positions** are 1-based and never exceed the prefix length of the
//!   string that produced them.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::order::SymbolOrder;

/// Corpus position of a string (0-based insertion index).
pub type DocId = usize;

/// Set of documents associated with an index key.
pub type PostingSet = BTreeSet<DocId>;

/// Candidate pairs from a self-join, in sorted order.
pub type CandidatePairs = BTreeSet<Pair>;

/// What a symbol needs to be usable as an index key component.
pub trait Symbol: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T: Clone + Eq + Hash + Ord + fmt::Debug> Symbol for T {}

// =============================================================================
// CANONICAL SETS
// =============================================================================

/// A string represented as the set of its symbols, sorted by a global order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalSet<S> {
    symbols: Vec<S>,
}

impl<S: Symbol> CanonicalSet<S> {
    /// Deduplicate `symbols` (first occurrence wins) and sort them by `order`.
    ///
    /// The sort is stable, so an order that ties two distinct symbols still
    /// yields the same sequence every time.
    pub fn from_symbols<I, O>(symbols: I, order: &O) -> Self
    where
        I: IntoIterator<Item = S>,
        O: SymbolOrder<S> + ?Sized,
    {
        let mut seen = HashSet::new();
        let mut symbols: Vec<S> = symbols
            .into_iter()
            .filter(|s| seen.insert(s.clone()))
            .collect();
        symbols.sort_by(|a, b| order.compare(a, b));
        Self { symbols }
    }
}

impl<S> CanonicalSet<S> {
    /// Number of distinct symbols, `|s|`.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True if the set has no symbols.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The ordered symbols.
    #[inline]
    pub fn as_slice(&self) -> &[S] {
        &self.symbols
    }

    /// Iterate over the symbols in order.
    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.symbols.iter()
    }

    /// Take the ordered symbols.
    pub fn into_vec(self) -> Vec<S> {
        self.symbols
    }
}

impl<'a, S> IntoIterator for &'a CanonicalSet<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

// =============================================================================
// INDEX KEYS
// =============================================================================

/// Key of the prefix+position index.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PositionKey<S> {
    /// Prefix symbol.
    pub symbol: S,
    /// 1-based position of the symbol within the prefix.
    pub position: usize,
}

impl<S> PositionKey<S> {
    pub fn new(symbol: S, position: usize) -> Self {
        Self { symbol, position }
    }
}

/// Key of the prefix+position+length index.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PositionLengthKey<S> {
    /// Prefix symbol.
    pub symbol: S,
    /// 1-based position of the symbol within the prefix.
    pub position: usize,
    /// Symbols left after this one: `|s| - position`.
    pub suffix_len: usize,
}

impl<S> PositionLengthKey<S> {
    pub fn new(symbol: S, position: usize, suffix_len: usize) -> Self {
        Self {
            symbol,
            position,
            suffix_len,
        }
    }
}

/// Largest `position` and `suffix_len` over the keys stored in an index.
///
/// Keys beyond the extent cannot be present, so a probe stops there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyExtent {
    pub position: usize,
    pub suffix_len: usize,
}

impl KeyExtent {
    /// No limit: every admissible key is visited.
    pub const UNBOUNDED: Self = Self {
        position: usize::MAX,
        suffix_len: usize::MAX,
    };

    pub fn new(position: usize, suffix_len: usize) -> Self {
        Self {
            position,
            suffix_len,
        }
    }

    /// Grow to cover `other`.
    #[inline]
    pub fn include(&mut self, other: KeyExtent) {
        self.position = self.position.max(other.position);
        self.suffix_len = self.suffix_len.max(other.suffix_len);
    }
}

// =============================================================================
// PAIRS AND QUERY RESULTS
// =============================================================================

/// An unordered pair of distinct documents, stored with the smaller id first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pair {
    low: DocId,
    high: DocId,
}

impl Pair {
    /// Canonical pair of `a` and `b`, or `None` when `a == b`.
    #[inline]
    pub fn new(a: DocId, b: DocId) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { low: a, high: b }),
            std::cmp::Ordering::Greater => Some(Self { low: b, high: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// The smaller id.
    #[inline]
    pub fn low(self) -> DocId {
        self.low
    }

    /// The larger id.
    #[inline]
    pub fn high(self) -> DocId {
        self.high
    }

    /// `(low, high)`.
    #[inline]
    pub fn as_tuple(self) -> (DocId, DocId) {
        (self.low, self.high)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.low, self.high)
    }
}

/// Candidates for one query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates<K> {
    /// Corpus documents that may reach the threshold.
    pub ids: PostingSet,
    /// Probe keys that were present in the index.
    pub keys: BTreeSet<K>,
}

impl<K> Candidates<K> {
    /// True if no document survived.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

// =============================================================================
// MODE
// =============================================================================

/// Which builder populated an index.
///
/// `Unset` moves to exactly one of the other two; both are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Nothing built yet.
    #[default]
    Unset,
    /// Whole corpus indexed up front; answers repeated queries.
    ManyToOne,
    /// Single streaming self-join pass.
    ManyToMany,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Unset => "unset",
            Mode::ManyToOne => "many_to_one",
            Mode::ManyToMany => "many_to_many",
        })
    }
}
