// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Candidate-pair generation for Jaccard similarity joins.
//!
//! Each string is modeled as the set of its distinct symbols, sorted under a
//! fixed global order. Two sets with Jaccard similarity ≥ `J` must share a
//! symbol inside their short, length-bounded prefixes, so an inverted index
//! over prefix symbols finds every pair that could reach `J` without comparing
//! all pairs. Exact similarity of the survivors is left to the caller
//! ([`verify_pairs`] helps).
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌──────────────────────┐
//! │   repr.rs    │────▶│   prefix.rs   │────▶│    index/filter.rs   │
//! │ (SetRepr:    │     │ (PrefixFilter:│     │ (FilterIndex engine, │
//! │  str → set)  │     │  p(n), prefix)│     │  mode state machine) │
//! └──────────────┘     └───────────────┘     └──────────────────────┘
//!        │                                              │
//!        ▼                                              ▼
//! ┌──────────────┐                  ┌────────────────────────────────────┐
//! │   order.rs   │                  │  KeyScheme: prefix / position /    │
//! │ (SymbolOrder)│                  │  length  ──▶  InvertedIndex<Key>   │
//! └──────────────┘                  └────────────────────────────────────┘
//! ```
//!
//! # Index variants
//!
//! | Alias                         | Key                              | Prunes by                  |
//! |-------------------------------|----------------------------------|----------------------------|
//! | [`PrefixIndex`]               | symbol                           | shared prefix symbol       |
//! | [`PrefixPositionIndex`]       | (symbol, position)               | + position of that symbol  |
//! | [`PrefixPositionLengthIndex`] | (symbol, position, suffix len)   | + symbols left after it    |
//!
//! Every variant returns a superset of the truly similar pairs. Each is at
//! least as selective as the one above it.
//!
//! # Usage
//!
//! ```
//! use prefix_join::{verify_pairs, Chars, FilterConfig, PrefixPositionLengthIndex, SimilarityIndex};
//!
//! let corpus = ["bcdefghij", "abcdefghij", "cdefghijklm", "aefghijkluvw"];
//! let config = FilterConfig::new(0.8)?;
//!
//! // Self-join in one pass.
//! let mut index = PrefixPositionLengthIndex::new(&corpus, config)?;
//! let pairs = index.build_many_to_many()?;
//! let similar = verify_pairs(&corpus, &Chars::new(), &pairs, 0.8);
//! assert_eq!(similar.len(), 1);
//!
//! // Or index once and query repeatedly.
//! let mut index = PrefixPositionLengthIndex::new(&corpus, config)?;
//! index.build_many_to_one()?;
//! let found = index.candidates("aefghijklmno")?;
//! assert_eq!(found.ids.into_iter().collect::<Vec<_>>(), vec![1, 3]);
//! # Ok::<(), prefix_join::Error>(())
//! ```
//!
//! # Logging
//!
//! Builds emit a `debug` event with the key and pair counts; every probe emits
//! a `trace` event. Install any `tracing` subscriber to see them.

mod config;
pub mod contracts;
mod error;
mod index;
mod jaccard;
pub mod order;
mod prefix;
mod repr;
mod types;
mod utils;

// Re-exports for public API
pub use config::FilterConfig;
pub use error::{Error, ErrorKind, Result};
pub use index::{
    max_position, FilterIndex, InvertedIndex, KeyScheme, PositionKeys, PositionLengthKeys,
    PrefixIndex, PrefixPositionIndex, PrefixPositionLengthIndex, SimilarityIndex, SymbolKeys,
};
pub use jaccard::{jaccard_similarity, verify_pairs};
pub use prefix::PrefixFilter;
pub use repr::{shingles, Chars, HashedShingles, SetRepr, Shingles, DEFAULT_SHINGLE_WIDTH};
pub use types::{
    CandidatePairs, Candidates, CanonicalSet, DocId, KeyExtent, Mode, Pair, PositionKey,
    PositionLengthKey, PostingSet, Symbol,
};
pub use utils::normalize;
