// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index: key → posting set.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **NON_EMPTY**: every key has at least one posting
//! 2. **MONOTONIC**: keys and postings are only ever added

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::types::{DocId, PostingSet};

/// Map from index key to the documents whose prefix produced it.
#[derive(Debug, Clone)]
pub struct InvertedIndex<K> {
    postings: HashMap<K, PostingSet>,
}

impl<K> Default for InvertedIndex<K> {
    fn default() -> Self {
        Self {
            postings: HashMap::new(),
        }
    }
}

impl<K> InvertedIndex<K> {
    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.postings.keys()
    }

    /// `(key, postings)` in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &PostingSet)> {
        self.postings.iter()
    }
}

impl<K: Eq + Hash> InvertedIndex<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `doc_id` to the postings of `key`. Returns false if it was there.
    pub fn insert(&mut self, key: K, doc_id: DocId) -> bool {
        self.postings.entry(key).or_default().insert(doc_id)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&PostingSet>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.postings.get(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.postings.contains_key(key)
    }

    /// Union of the posting sets of `keys`. Absent keys contribute nothing.
    pub fn union<'k, I>(&self, keys: I) -> PostingSet
    where
        I: IntoIterator<Item = &'k K>,
        K: 'k,
    {
        let mut ids = PostingSet::new();
        for key in keys {
            if let Some(postings) = self.postings.get(key) {
                ids.extend(postings.iter().copied());
            }
        }
        ids
    }
}

impl<K: Ord + Clone> InvertedIndex<K> {
    /// Sorted copy of the whole index, for inspection and comparison.
    pub fn snapshot(&self) -> BTreeMap<K, PostingSet> {
        self.postings
            .iter()
            .map(|(key, postings)| (key.clone(), postings.clone()))
            .collect()
    }
}
