// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for prefix filtering and the built indexes.
//!
//! These are debug-mode assertions. They:
//!
//! 1. Are **zero-cost in release builds** (`debug_assert!`, and whole-index
//!    walks are skipped unless `debug_assertions` is on)
//! 2. Fail early during development and in tests
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function              | Property                                   |
//! |--------------------------------|--------------------------------------------|
//! | `check_prefix_length_bounds`   | `1 ≤ p(n) ≤ n`                             |
//! | `check_postings_well_formed`   | every posting set non-empty, ids in corpus |
//! | `check_pairs_canonical`        | `low < high`, both ids in corpus          |

use crate::index::InvertedIndex;
use crate::types::CandidatePairs;

// ============================================================================
// PREFIX CONTRACTS
// ============================================================================

/// Check that a prefix length lies in `1..=len`.
///
/// # Panics (debug builds only)
/// Panics if the computed prefix is empty or longer than the set.
#[inline]
pub fn check_prefix_length_bounds(len: usize, prefix_len: usize) {
    debug_assert!(
        prefix_len >= 1 && prefix_len <= len,
        "Contract violation: prefix length {} outside 1..={}",
        prefix_len,
        len
    );
}

// ============================================================================
// INDEX CONTRACTS
// ============================================================================

/// Check that every posting set is non-empty and only names corpus documents.
///
/// # Panics (debug builds only)
/// Panics on an empty posting set or an id `>= corpus_len`.
#[inline]
pub fn check_postings_well_formed<K: std::fmt::Debug>(index: &InvertedIndex<K>, corpus_len: usize) {
    if !cfg!(debug_assertions) {
        return;
    }
    for (key, postings) in index.iter() {
        debug_assert!(
            !postings.is_empty(),
            "Contract violation: empty posting set for key {:?}",
            key
        );
        if let Some(&last) = postings.iter().next_back() {
            debug_assert!(
                last < corpus_len,
                "Contract violation: key {:?} posts doc {} but corpus has {} strings",
                key,
                last,
                corpus_len
            );
        }
    }
}

/// Check that self-join pairs are canonical and within the corpus.
///
/// # Panics (debug builds only)
/// Panics if a pair has `low >= high` or `high >= corpus_len`.
#[inline]
pub fn check_pairs_canonical(pairs: &CandidatePairs, corpus_len: usize) {
    if !cfg!(debug_assertions) {
        return;
    }
    for pair in pairs {
        debug_assert!(
            pair.low() < pair.high(),
            "Contract violation: pair {} is not canonical",
            pair
        );
        debug_assert!(
            pair.high() < corpus_len,
            "Contract violation: pair {} outside corpus of {} strings",
            pair,
            corpus_len
        );
    }
}
