// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text folding applied before a string is cut into shingles.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Fold text so that trivially different spellings shingle the same way.
///
/// - "Café  au lait" → "cafe au lait"
/// - "  naïve\tTEXT " → "naive text"
///
/// Runs of whitespace become one space and are trimmed at both ends. With the
/// `unicode-normalization` feature, text is NFD-decomposed first and
/// combining marks are dropped, which strips most Latin diacritics.
pub fn normalize(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut pending_space = false;

    for c in decompose(value) {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if is_combining_mark(c) {
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.extend(c.to_lowercase());
    }
    out
}

#[cfg(feature = "unicode-normalization")]
fn decompose(value: &str) -> impl Iterator<Item = char> + '_ {
    value.nfd()
}

#[cfg(not(feature = "unicode-normalization"))]
fn decompose(value: &str) -> impl Iterator<Item = char> + '_ {
    value.chars()
}

/// Combining marks (category Mn) in the blocks we strip.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Supplement
        '\u{20D0}'..='\u{20FF}' |  // for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Half Marks
    )
}

/// Without decomposition, precomposed letters are kept as they are.
#[cfg(not(feature = "unicode-normalization"))]
fn is_combining_mark(_c: char) -> bool {
    false
}
