//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::collections::{BTreeSet, HashSet};
use std::sync::Once;

use prefix_join::{CandidatePairs, FilterConfig};

// ============================================================================
// FIXTURES
// ============================================================================

/// Six strings whose many-to-many candidates differ across all three variants.
pub const SIX_STRINGS: [&str; 6] = [
    "bcdefghij",
    "abcdefghij",
    "abcdefghvwxyz",
    "cdefghijklm",
    "aefghijkluvw",
    "cdefghlmnopq",
];

/// Seven strings, including a very short one.
pub const SEVEN_STRINGS: [&str; 7] = [
    "bcdefghij",
    "cd",
    "abcdefghij",
    "bcdefghijmno",
    "cdefghijklm",
    "aefghijkluvw",
    "aefghijlmnopq",
];

/// Four-string corpus used for many-to-one queries.
pub const FOUR_STRINGS: [&str; 4] = ["bcdefghij", "abcdefghij", "cdefghijklm", "aefghijkluvw"];

/// Queries run against [`FOUR_STRINGS`].
pub const QUERIES: [&str; 3] = ["aefghijklmno", "defghijklmno", "acdefghijk"];

// ============================================================================
// HELPERS
// ============================================================================

pub fn config(threshold: f64) -> FilterConfig {
    FilterConfig::new(threshold).expect("valid threshold")
}

/// Pairs as sorted `(low, high)` tuples.
pub fn tuples(pairs: &CandidatePairs) -> Vec<(usize, usize)> {
    pairs.iter().map(|p| p.as_tuple()).collect()
}

/// Install a test-writer subscriber once; honors `RUST_LOG`.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "warn".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// ORACLES
// ============================================================================

/// Jaccard similarity over distinct characters, computed directly.
pub fn oracle_jaccard(a: &str, b: &str) -> f64 {
    let a: HashSet<char> = a.chars().collect();
    let b: HashSet<char> = b.chars().collect();
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let shared = a.intersection(&b).count();
    let union = a.union(&b).count();
    shared as f64 / union as f64
}

/// Every pair `(i, j)`, `i < j`, whose character sets reach `threshold`.
pub fn oracle_similar_pairs(corpus: &[String], threshold: f64) -> BTreeSet<(usize, usize)> {
    let mut pairs = BTreeSet::new();
    for i in 0..corpus.len() {
        for j in i + 1..corpus.len() {
            if oracle_jaccard(&corpus[i], &corpus[j]) >= threshold {
                pairs.insert((i, j));
            }
        }
    }
    pairs
}

/// Corpus documents whose character sets reach `threshold` with `query`.
pub fn oracle_similar_docs(corpus: &[String], query: &str, threshold: f64) -> BTreeSet<usize> {
    corpus
        .iter()
        .enumerate()
        .filter(|(_, text)| oracle_jaccard(text, query) >= threshold)
        .map(|(doc_id, _)| doc_id)
        .collect()
}

/// Distinct character n-grams of `text`, computed directly.
pub fn oracle_shingles(text: &str, width: usize) -> HashSet<String> {
    let chars: Vec<char> = text.chars().collect();
    if width == 0 || chars.len() < width {
        return HashSet::new();
    }
    chars.windows(width).map(|w| w.iter().collect()).collect()
}
