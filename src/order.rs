// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Global symbol orders.
//!
//! The prefix filter is correct under *any* fixed total order, but the order
//! decides which symbols land in prefixes and therefore how selective the
//! index is. Rare-first orders give the shortest posting lists.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// A total order over symbols, used to canonicalize sets.
pub trait SymbolOrder<S> {
    /// Compare two symbols.
    fn compare(&self, a: &S, b: &S) -> Ordering;
}

/// Rank of a character in the default order: its code point shifted so that
/// `'a'` ranks 1.
#[inline]
pub fn ordinal_rank(c: char) -> i64 {
    c as i64 - 96
}

/// Default order for characters, by [`ordinal_rank`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ordinal;

impl SymbolOrder<char> for Ordinal {
    fn compare(&self, a: &char, b: &char) -> Ordering {
        ordinal_rank(*a).cmp(&ordinal_rank(*b))
    }
}

/// Natural `Ord` of the symbol type. For string shingles this is
/// lexicographic order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lexicographic;

impl<S: Ord> SymbolOrder<S> for Lexicographic {
    fn compare(&self, a: &S, b: &S) -> Ordering {
        a.cmp(b)
    }
}

/// Order by a stable 64-bit hash, ties broken by natural order.
///
/// Behaves like a pseudo-random permutation of the alphabet, which spreads
/// frequent symbols across prefixes instead of always placing `a` first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByHash;

impl<S: Hash + Ord> SymbolOrder<S> for ByHash {
    fn compare(&self, a: &S, b: &S) -> Ordering {
        stable_hash(a)
            .cmp(&stable_hash(b))
            .then_with(|| a.cmp(b))
    }
}

/// Order by a caller-supplied ranking function.
///
/// ```
/// use prefix_join::order::{ByKey, SymbolOrder};
///
/// // Vowels first, then everything else alphabetically.
/// let order = ByKey(|c: &char| (!"aeiou".contains(*c), *c));
/// assert!(order.compare(&'u', &'b').is_lt());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<S, K, F> SymbolOrder<S> for ByKey<F>
where
    F: Fn(&S) -> K,
    K: Ord,
{
    fn compare(&self, a: &S, b: &S) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}

/// A small stable 64-bit FNV-1a hasher.
///
/// `std`'s `DefaultHasher` makes no stability guarantee across releases, and
/// symbol order must not change between builds of the same corpus.
pub(crate) struct Fnv1a64 {
    state: u64,
}

impl Fnv1a64 {
    pub(crate) fn new() -> Self {
        // FNV offset basis
        Self {
            state: 0xcbf29ce484222325,
        }
    }
}

impl Hasher for Fnv1a64 {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        const PRIME: u64 = 0x00000100000001B3;
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(PRIME);
        }
    }
}

/// Hash a value with [`Fnv1a64`].
pub(crate) fn stable_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = Fnv1a64::new();
    value.hash(&mut hasher);
    hasher.finish()
}
