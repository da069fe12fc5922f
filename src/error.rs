// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors raised by the prefix filter and the similarity indexes.
//!
//! Everything here is a local precondition violation. There is no I/O and no
//! transient failure, so nothing is retried: the caller fixes the input or the
//! call sequence.

use crate::types::Mode;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad argument: threshold out of range, empty set, ...
    InvalidInput,
    /// Operation not allowed in the index's current mode.
    InvalidState,
}

/// Errors for prefix filtering and index construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The Jaccard threshold is not a finite number in `(0, 1]`.
    #[error("invalid threshold {0}: must lie in (0, 1]")]
    InvalidThreshold(f64),

    /// The rounding tolerance is negative or not finite.
    #[error("invalid epsilon {0}: must be finite and non-negative")]
    InvalidEpsilon(f64),

    /// Prefix length was requested for a set with no symbols.
    #[error("prefix length is undefined for an empty set")]
    EmptySet,

    /// A corpus string canonicalized to an empty set.
    #[error("document {doc_id} has an empty set representation")]
    EmptyDocument {
        /// Corpus position of the offending string.
        doc_id: usize,
    },

    /// `candidates` was called on an index that was not built for queries.
    #[error("index cannot answer queries in {mode} mode (build it with build_many_to_one first)")]
    NotQueryable {
        /// Mode the index was in.
        mode: Mode,
    },

    /// A build was requested on an index that is already built.
    #[error("index already built in {mode} mode")]
    AlreadyBuilt {
        /// Mode the index was in.
        mode: Mode,
    },
}

impl Error {
    /// Whether this is a bad-input or a bad-call-sequence error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidThreshold(_)
            | Error::InvalidEpsilon(_)
            | Error::EmptySet
            | Error::EmptyDocument { .. } => ErrorKind::InvalidInput,
            Error::NotQueryable { .. } | Error::AlreadyBuilt { .. } => ErrorKind::InvalidState,
        }
    }
}
