//! Build/query state machine through the public API.

use std::fmt::Debug;

use super::common::{config, init_tracing, FOUR_STRINGS};
use prefix_join::{
    Error, ErrorKind, FilterConfig, Mode, PrefixIndex, PrefixPositionIndex,
    PrefixPositionLengthIndex, SimilarityIndex,
};

/// Runs the same lifecycle checks against any variant.
fn check_lifecycle<I>(mut fresh: impl FnMut() -> I)
where
    I: SimilarityIndex,
    I::Key: Debug,
{
    let index = fresh();
    assert_eq!(index.mode(), Mode::Unset);
    assert_eq!(
        index.candidates("abc").unwrap_err(),
        Error::NotQueryable { mode: Mode::Unset }
    );

    let mut index = fresh();
    index.build_many_to_one().unwrap();
    assert_eq!(index.mode(), Mode::ManyToOne);
    assert!(index.candidates("abcdefghij").is_ok());
    assert!(index.candidates("zzz").unwrap().is_empty());
    assert_eq!(
        index.build_many_to_many().unwrap_err(),
        Error::AlreadyBuilt {
            mode: Mode::ManyToOne
        }
    );
    assert_eq!(index.mode(), Mode::ManyToOne);

    let mut index = fresh();
    index.build_many_to_many().unwrap();
    assert_eq!(index.mode(), Mode::ManyToMany);
    let err = index.candidates("abcdefghij").unwrap_err();
    assert_eq!(err, Error::NotQueryable { mode: Mode::ManyToMany });
    assert_eq!(err.kind(), ErrorKind::InvalidState);
    assert!(index.build_many_to_one().is_err());
}

#[test]
fn lifecycle_all_variants() {
    init_tracing();
    check_lifecycle(|| PrefixIndex::new(&FOUR_STRINGS, config(0.8)).unwrap());
    check_lifecycle(|| PrefixPositionIndex::new(&FOUR_STRINGS, config(0.8)).unwrap());
    check_lifecycle(|| PrefixPositionLengthIndex::new(&FOUR_STRINGS, config(0.8)).unwrap());
}

#[test]
fn empty_query_is_invalid_input() {
    let mut index = PrefixPositionIndex::new(&FOUR_STRINGS, config(0.9)).unwrap();
    index.build_many_to_one().unwrap();
    let err = index.candidates("").unwrap_err();
    assert_eq!(err, Error::EmptySet);
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn bad_corpus_never_builds() {
    let corpus = ["abc", "abd", ""];
    let mut index = PrefixIndex::new(&corpus, config(0.5)).unwrap();
    for _ in 0..2 {
        assert_eq!(
            index.build_many_to_many(),
            Err(Error::EmptyDocument { doc_id: 2 })
        );
        assert_eq!(index.mode(), Mode::Unset);
    }
    assert_eq!(
        index.build_many_to_one(),
        Err(Error::EmptyDocument { doc_id: 2 })
    );
    assert!(index.inverted_index().is_empty());
}

#[test]
fn threshold_validation() {
    assert_eq!(FilterConfig::new(0.0), Err(Error::InvalidThreshold(0.0)));
    assert!(matches!(
        FilterConfig::new(f64::NAN),
        Err(Error::InvalidThreshold(_))
    ));
    assert_eq!(
        FilterConfig::new(0.8).unwrap().with_epsilon(-1.0),
        Err(Error::InvalidEpsilon(-1.0))
    );
    assert_eq!(
        FilterConfig::new(1.5).unwrap_err().to_string(),
        "invalid threshold 1.5: must lie in (0, 1]"
    );
}

#[test]
fn threshold_one_pairs_only_identical_sets() {
    let corpus = ["abc", "cba", "abcd", "bca", "xyz"];
    let mut index = PrefixPositionLengthIndex::new(&corpus, config(1.0)).unwrap();
    let pairs: Vec<_> = index
        .build_many_to_many()
        .unwrap()
        .iter()
        .map(|p| p.as_tuple())
        .collect();
    assert_eq!(pairs, vec![(0, 1), (0, 3), (1, 3)]);
}

#[test]
fn corpus_of_owned_strings() {
    let corpus: Vec<String> = FOUR_STRINGS.iter().map(|s| s.to_string()).collect();
    let mut index = PrefixIndex::new(&corpus, config(0.9)).unwrap();
    index.build_many_to_one().unwrap();
    let found = index.candidates("aefghijklmno").unwrap();
    let texts: Vec<&str> = found.ids.iter().filter_map(|&id| index.text(id)).collect();
    assert_eq!(texts, vec!["abcdefghij", "aefghijkluvw"]);
}
