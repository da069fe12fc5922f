// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The build/query engine shared by all index variants.
//!
//! # Mode state machine
//!
//! ```text
//!            build_many_to_one            candidates(q) ...
//!   Unset ──────────────────────▶ ManyToOne ─────────────┐
//!     │                                ▲                 │
//!     │                                └─────────────────┘
//!     │      build_many_to_many
//!     └──────────────────────────▶ ManyToMany (pairs returned once)
//! ```
//!
//! Any other transition is an error. A build that fails leaves the index
//! untouched in `Unset`: the new inverted index is assembled locally and only
//! committed once every document has been processed.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use super::{InvertedIndex, KeyScheme, SimilarityIndex};
use crate::config::FilterConfig;
use crate::contracts::{check_pairs_canonical, check_postings_well_formed};
use crate::error::{Error, Result};
use crate::prefix::PrefixFilter;
use crate::repr::{Chars, SetRepr};
use crate::types::{CandidatePairs, Candidates, DocId, KeyExtent, Mode, Pair};

/// Prefix-filter index over a borrowed corpus.
///
/// `R` turns strings into canonical sets; `A` decides key shape and which keys
/// a query probes. Use the [`PrefixIndex`], [`PrefixPositionIndex`] and
/// [`PrefixPositionLengthIndex`] aliases rather than naming `A` directly.
///
/// A built `ManyToOne` index is only read by [`SimilarityIndex::candidates`],
/// so it can be shared across threads behind a plain reference.
///
/// [`PrefixIndex`]: super::PrefixIndex
/// [`PrefixPositionIndex`]: super::PrefixPositionIndex
/// [`PrefixPositionLengthIndex`]: super::PrefixPositionLengthIndex
pub struct FilterIndex<'a, T, R, A>
where
    R: SetRepr,
    A: KeyScheme<R::Symbol>,
{
    corpus: &'a [T],
    filter: PrefixFilter,
    repr: R,
    scheme: A,
    mode: Mode,
    index: InvertedIndex<A::Key>,
    extent: KeyExtent,
}

impl<'a, T, A> FilterIndex<'a, T, Chars, A>
where
    T: AsRef<str>,
    A: KeyScheme<char>,
{
    /// Index over the distinct characters of each string, in ordinal order.
    pub fn new(corpus: &'a [T], config: FilterConfig) -> Result<Self> {
        Self::with_repr(corpus, config, Chars::new())
    }
}

impl<'a, T, R, A> FilterIndex<'a, T, R, A>
where
    T: AsRef<str>,
    R: SetRepr,
    A: KeyScheme<R::Symbol>,
{
    /// Index over a custom set representation.
    pub fn with_repr(corpus: &'a [T], config: FilterConfig, repr: R) -> Result<Self> {
        Ok(Self {
            corpus,
            filter: PrefixFilter::new(&config)?,
            repr,
            scheme: A::default(),
            mode: Mode::Unset,
            index: InvertedIndex::new(),
            extent: KeyExtent::default(),
        })
    }

    /// The indexed corpus.
    pub fn corpus(&self) -> &'a [T] {
        self.corpus
    }

    /// Corpus string for a document id.
    pub fn text(&self, doc_id: DocId) -> Option<&'a str> {
        self.corpus.get(doc_id).map(AsRef::as_ref)
    }

    pub fn filter(&self) -> &PrefixFilter {
        &self.filter
    }

    pub fn repr(&self) -> &R {
        &self.repr
    }

    /// The inverted index. Empty until a build succeeds.
    pub fn inverted_index(&self) -> &InvertedIndex<A::Key> {
        &self.index
    }

    /// Largest position and suffix length among the stored keys.
    pub fn key_extent(&self) -> KeyExtent {
        self.extent
    }

    /// Every key a query for `text` would probe, whether or not it is indexed.
    ///
    /// Does not need a built index, and is not cut to the index's extent.
    pub fn admissible_keys(&self, text: &str) -> Result<BTreeSet<A::Key>> {
        let set = self.repr.canonicalize(text);
        let prefix = self.filter.prefix(&set)?;
        let mut keys = BTreeSet::new();
        self.scheme.admissible_keys(
            &self.filter,
            prefix,
            set.len(),
            KeyExtent::UNBOUNDED,
            |key| {
                keys.insert(key.clone());
            },
        );
        Ok(keys)
    }

    fn ensure_unset(&self) -> Result<()> {
        match self.mode {
            Mode::Unset => Ok(()),
            mode => Err(Error::AlreadyBuilt { mode }),
        }
    }

    /// Admissible keys present in `index`, whose keys lie within `extent`.
    fn probe(
        &self,
        prefix: &[R::Symbol],
        len: usize,
        index: &InvertedIndex<A::Key>,
        extent: KeyExtent,
        hits: &mut BTreeSet<A::Key>,
    ) {
        self.scheme
            .admissible_keys(&self.filter, prefix, len, extent, |key| {
                if index.contains_key(key) {
                    hits.insert(key.clone());
                }
            });
    }
}

impl<'a, T, R, A> SimilarityIndex for FilterIndex<'a, T, R, A>
where
    T: AsRef<str>,
    R: SetRepr,
    A: KeyScheme<R::Symbol>,
{
    type Key = A::Key;

    fn mode(&self) -> Mode {
        self.mode
    }

    fn build_many_to_one(&mut self) -> Result<()> {
        self.ensure_unset()?;

        let mut index = InvertedIndex::new();
        let mut extent = KeyExtent::default();
        for (doc_id, text) in self.corpus.iter().enumerate() {
            let set = self.repr.canonicalize(text.as_ref());
            let prefix = self
                .filter
                .prefix(&set)
                .map_err(|_| Error::EmptyDocument { doc_id })?;
            self.scheme.index_keys(prefix, set.len(), |key| {
                extent.include(A::key_extent(&key));
                index.insert(key, doc_id);
            });
        }

        check_postings_well_formed(&index, self.corpus.len());
        debug!(
            mode = %Mode::ManyToOne,
            documents = self.corpus.len(),
            keys = index.len(),
            "built similarity index"
        );

        self.index = index;
        self.extent = extent;
        self.mode = Mode::ManyToOne;
        Ok(())
    }

    fn build_many_to_many(&mut self) -> Result<CandidatePairs> {
        self.ensure_unset()?;

        let mut index = InvertedIndex::new();
        let mut extent = KeyExtent::default();
        let mut pairs = CandidatePairs::new();
        let mut hits = BTreeSet::new();

        for (doc_id, text) in self.corpus.iter().enumerate() {
            let set = self.repr.canonicalize(text.as_ref());
            let prefix = self
                .filter
                .prefix(&set)
                .map_err(|_| Error::EmptyDocument { doc_id })?;

            // Probe only the documents inserted before this one, then insert
            // it: each pair is found once, by its later member.
            hits.clear();
            self.probe(prefix, set.len(), &index, extent, &mut hits);
            let matched = index.union(&hits);
            pairs.extend(matched.iter().filter_map(|&other| Pair::new(other, doc_id)));

            trace!(
                doc_id,
                prefix_len = prefix.len(),
                keys = hits.len(),
                matched = matched.len(),
                "self-join probe"
            );

            self.scheme.index_keys(prefix, set.len(), |key| {
                extent.include(A::key_extent(&key));
                index.insert(key, doc_id);
            });
        }

        check_postings_well_formed(&index, self.corpus.len());
        check_pairs_canonical(&pairs, self.corpus.len());
        debug!(
            mode = %Mode::ManyToMany,
            documents = self.corpus.len(),
            keys = index.len(),
            pairs = pairs.len(),
            "built similarity index"
        );

        self.index = index;
        self.extent = extent;
        self.mode = Mode::ManyToMany;
        Ok(pairs)
    }

    fn candidates(&self, query: &str) -> Result<Candidates<A::Key>> {
        if self.mode != Mode::ManyToOne {
            return Err(Error::NotQueryable { mode: self.mode });
        }

        let set = self.repr.canonicalize(query);
        let prefix = self.filter.prefix(&set)?;

        let mut keys = BTreeSet::new();
        self.probe(prefix, set.len(), &self.index, self.extent, &mut keys);
        let ids = self.index.union(&keys);

        trace!(
            prefix_len = prefix.len(),
            keys = keys.len(),
            candidates = ids.len(),
            "many-to-one query"
        );

        Ok(Candidates { ids, keys })
    }
}
