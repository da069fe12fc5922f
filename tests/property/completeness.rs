//! No similar pair is ever filtered out.

use super::common::{config, oracle_shingles, oracle_similar_docs, oracle_similar_pairs};
use super::{
    corpus_strategy, query_ids, self_join, text_strategy, threshold_strategy, wide_corpus_strategy,
    wide_text_strategy,
};
use prefix_join::{
    verify_pairs, PrefixIndex, PrefixPositionIndex, PrefixPositionLengthIndex, Shingles,
    SimilarityIndex,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: every self-join pair at or above the threshold is a candidate.
    #[test]
    fn prop_self_join_is_complete(corpus in corpus_strategy(), threshold in threshold_strategy()) {
        let truth = oracle_similar_pairs(&corpus, threshold);

        let prefix = self_join(PrefixIndex::new(&corpus, config(threshold)).unwrap());
        let position = self_join(PrefixPositionIndex::new(&corpus, config(threshold)).unwrap());
        let length = self_join(PrefixPositionLengthIndex::new(&corpus, config(threshold)).unwrap());

        prop_assert!(truth.is_subset(&prefix), "prefix missed {:?}", truth.difference(&prefix).collect::<Vec<_>>());
        prop_assert!(truth.is_subset(&position), "position missed {:?}", truth.difference(&position).collect::<Vec<_>>());
        prop_assert!(truth.is_subset(&length), "length missed {:?}", truth.difference(&length).collect::<Vec<_>>());
    }

    /// Property: every corpus document similar to a query is a candidate.
    #[test]
    fn prop_queries_are_complete(
        corpus in corpus_strategy(),
        queries in prop::collection::vec(text_strategy(), 1..6),
        threshold in threshold_strategy()
    ) {
        let mut prefix = PrefixIndex::new(&corpus, config(threshold)).unwrap();
        prefix.build_many_to_one().unwrap();
        let mut position = PrefixPositionIndex::new(&corpus, config(threshold)).unwrap();
        position.build_many_to_one().unwrap();
        let mut length = PrefixPositionLengthIndex::new(&corpus, config(threshold)).unwrap();
        length.build_many_to_one().unwrap();

        for query in &queries {
            let truth = oracle_similar_docs(&corpus, query, threshold);
            prop_assert!(truth.is_subset(&query_ids(&prefix, query)), "prefix, query {}", query);
            prop_assert!(truth.is_subset(&query_ids(&position, query)), "position, query {}", query);
            prop_assert!(truth.is_subset(&query_ids(&length, query)), "length, query {}", query);
        }
    }

    /// Property: completeness holds for larger sets, where prefixes reach
    /// deep positions and suffix lengths differ widely.
    #[test]
    fn prop_wide_self_join_is_complete(corpus in wide_corpus_strategy(), threshold in threshold_strategy()) {
        let truth = oracle_similar_pairs(&corpus, threshold);

        let position = self_join(PrefixPositionIndex::new(&corpus, config(threshold)).unwrap());
        let length = self_join(PrefixPositionLengthIndex::new(&corpus, config(threshold)).unwrap());

        prop_assert!(truth.is_subset(&position), "position missed {:?}", truth.difference(&position).collect::<Vec<_>>());
        prop_assert!(truth.is_subset(&length), "length missed {:?}", truth.difference(&length).collect::<Vec<_>>());
    }

    /// Property: wide queries find every similar document.
    #[test]
    fn prop_wide_queries_are_complete(
        corpus in wide_corpus_strategy(),
        queries in prop::collection::vec(wide_text_strategy(), 1..4),
        threshold in threshold_strategy()
    ) {
        let mut length = PrefixPositionLengthIndex::new(&corpus, config(threshold)).unwrap();
        length.build_many_to_one().unwrap();

        for query in queries.iter().chain(corpus.iter()) {
            let truth = oracle_similar_docs(&corpus, query, threshold);
            prop_assert!(truth.is_subset(&query_ids(&length, query)), "length, query {}", query);
        }
    }

    /// Property: completeness holds for shingle sets too.
    #[test]
    fn prop_shingle_self_join_is_complete(
        corpus in prop::collection::vec("[a-d]{2,9}", 1..10),
        threshold in threshold_strategy()
    ) {
        let repr = Shingles::new(2);
        let mut truth = BTreeSet::new();
        for i in 0..corpus.len() {
            for j in i + 1..corpus.len() {
                let a = oracle_shingles(&corpus[i], 2);
                let b = oracle_shingles(&corpus[j], 2);
                let similarity = a.intersection(&b).count() as f64 / a.union(&b).count() as f64;
                if similarity >= threshold {
                    truth.insert((i, j));
                }
            }
        }

        let mut index = PrefixPositionLengthIndex::<_, Shingles>::with_repr(&corpus, config(threshold), repr).unwrap();
        let pairs = index.build_many_to_many().unwrap();
        let found: BTreeSet<(usize, usize)> = pairs.iter().map(|p| p.as_tuple()).collect();
        prop_assert!(truth.is_subset(&found));

        // Verification keeps exactly the truly similar pairs.
        let verified: BTreeSet<(usize, usize)> = verify_pairs(&corpus, &repr, &pairs, threshold)
            .into_iter()
            .map(|(p, _)| p.as_tuple())
            .collect();
        prop_assert_eq!(verified, truth);
    }
}
