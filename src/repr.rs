// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Set representations: how a string becomes a [`CanonicalSet`].
//!
//! The indexes treat this as a black box. Anything that maps a string to an
//! ordered, duplicate-free symbol sequence works; three are provided:
//!
//! - [`Chars`]: the distinct characters of the string (default).
//! - [`Shingles`]: the distinct character n-grams, as `String`s.
//! - [`HashedShingles`]: the same n-grams, hashed to `u64`.
//!
//! Shingles are computed on Unicode scalar values (`char`), not bytes. A
//! string shorter than the shingle width has no shingles at all, and its set
//! is empty.

use std::collections::HashSet;

use crate::order::{stable_hash, Lexicographic, Ordinal, SymbolOrder};
use crate::types::{CanonicalSet, Symbol};
use crate::utils::normalize;

/// Shingle width used when none is given.
pub const DEFAULT_SHINGLE_WIDTH: usize = 3;

/// Maps a string to its canonical set of symbols.
pub trait SetRepr {
    /// Symbol type of the produced sets.
    type Symbol: Symbol;

    /// Build the ordered, duplicate-free symbol sequence of `text`.
    fn canonicalize(&self, text: &str) -> CanonicalSet<Self::Symbol>;
}

/// Distinct characters, sorted by a character order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Chars<O = Ordinal> {
    order: O,
}

impl Chars {
    /// Characters in [`Ordinal`] order.
    pub fn new() -> Self {
        Self { order: Ordinal }
    }
}

impl<O> Chars<O> {
    /// Characters sorted by `order`.
    pub fn with_order(order: O) -> Self {
        Self { order }
    }
}

impl<O: SymbolOrder<char>> SetRepr for Chars<O> {
    type Symbol = char;

    fn canonicalize(&self, text: &str) -> CanonicalSet<char> {
        CanonicalSet::from_symbols(text.chars(), &self.order)
    }
}

/// Distinct character n-grams, sorted by a string order.
#[derive(Debug, Clone, Copy)]
pub struct Shingles<O = Lexicographic> {
    width: usize,
    order: O,
    normalize: bool,
}

impl Shingles<Lexicographic> {
    /// Shingles of `width` characters in lexicographic order.
    pub fn new(width: usize) -> Self {
        Self::with_order(width, Lexicographic)
    }
}

impl Default for Shingles<Lexicographic> {
    fn default() -> Self {
        Self::new(DEFAULT_SHINGLE_WIDTH)
    }
}

impl<O> Shingles<O> {
    /// Shingles of `width` characters sorted by `order`.
    pub fn with_order(width: usize, order: O) -> Self {
        Self {
            width,
            order,
            normalize: false,
        }
    }

    /// Run [`normalize`] on the text before shingling.
    pub fn normalized(mut self) -> Self {
        self.normalize = true;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

impl<O: SymbolOrder<String>> SetRepr for Shingles<O> {
    type Symbol = String;

    fn canonicalize(&self, text: &str) -> CanonicalSet<String> {
        let text = prepare(text, self.normalize);
        CanonicalSet::from_symbols(shingle_iter(&text, self.width), &self.order)
    }
}

/// Character n-grams hashed to `u64`, sorted by hash value.
///
/// Cheaper keys than [`Shingles`]; distinct shingles that collide merge into
/// one symbol, which can only add candidates, never remove them.
#[derive(Debug, Clone, Copy)]
pub struct HashedShingles {
    width: usize,
    normalize: bool,
}

impl HashedShingles {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            normalize: false,
        }
    }

    /// Run [`normalize`] on the text before shingling.
    pub fn normalized(mut self) -> Self {
        self.normalize = true;
        self
    }
}

impl Default for HashedShingles {
    fn default() -> Self {
        Self::new(DEFAULT_SHINGLE_WIDTH)
    }
}

impl SetRepr for HashedShingles {
    type Symbol = u64;

    fn canonicalize(&self, text: &str) -> CanonicalSet<u64> {
        let text = prepare(text, self.normalize);
        let hashes = shingle_iter(&text, self.width).map(|s| stable_hash(s.as_str()));
        CanonicalSet::from_symbols(hashes, &Lexicographic)
    }
}

/// The set of distinct `width`-character shingles of `text`.
///
/// Empty when `width` is 0 or the text has fewer than `width` characters.
pub fn shingles(text: &str, width: usize) -> HashSet<String> {
    shingle_iter(text, width).collect()
}

fn shingle_iter(text: &str, width: usize) -> impl Iterator<Item = String> {
    let chars: Vec<char> = text.chars().collect();
    let count = if width == 0 {
        0
    } else {
        (chars.len() + 1).saturating_sub(width)
    };
    (0..count).map(move |start| chars[start..start + width].iter().collect())
}

fn prepare(text: &str, normalized: bool) -> std::borrow::Cow<'_, str> {
    if normalized {
        std::borrow::Cow::Owned(normalize(text))
    } else {
        std::borrow::Cow::Borrowed(text)
    }
}
