// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact Jaccard similarity, for checking candidates after filtering.

use std::collections::HashSet;

use tracing::debug;

use crate::repr::SetRepr;
use crate::types::{CandidatePairs, Pair, Symbol};

/// `|a ∩ b| / |a ∪ b|` over the distinct symbols of `a` and `b`.
///
/// Two empty sets are identical (1.0); one empty set shares nothing (0.0).
pub fn jaccard_similarity<S: Symbol>(a: &[S], b: &[S]) -> f64 {
    let a: HashSet<&S> = a.iter().collect();
    let b: HashSet<&S> = b.iter().collect();
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(&b).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}

/// Keep the candidate pairs whose exact similarity reaches `threshold`.
///
/// Pairs referring outside `corpus` are dropped. Output follows pair order.
pub fn verify_pairs<T, R>(
    corpus: &[T],
    repr: &R,
    pairs: &CandidatePairs,
    threshold: f64,
) -> Vec<(Pair, f64)>
where
    T: AsRef<str>,
    R: SetRepr,
{
    let verified: Vec<(Pair, f64)> = pairs
        .iter()
        .filter_map(|&pair| {
            let low = repr.canonicalize(corpus.get(pair.low())?.as_ref());
            let high = repr.canonicalize(corpus.get(pair.high())?.as_ref());
            let similarity = jaccard_similarity(low.as_slice(), high.as_slice());
            (similarity >= threshold).then_some((pair, similarity))
        })
        .collect();

    debug!(
        candidates = pairs.len(),
        verified = verified.len(),
        threshold,
        "verified candidate pairs"
    );
    verified
}
