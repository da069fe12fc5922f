//! Prefix length and position bounds.

use prefix_join::{max_position, FilterConfig, PrefixFilter};
use proptest::prelude::*;

proptest! {
    /// Property: `1 ≤ p(n) ≤ n` for every valid threshold.
    #[test]
    fn prop_prefix_length_in_range(threshold in 0.001f64..=1.0, len in 1usize..1000) {
        let filter = PrefixFilter::new(&FilterConfig::new(threshold).unwrap()).unwrap();
        let prefix_len = filter.prefix_length(len).unwrap();
        prop_assert!(prefix_len >= 1);
        prop_assert!(prefix_len <= len);
    }

    /// Property: prefixes never shrink as sets grow.
    #[test]
    fn prop_prefix_length_monotonic(threshold in 0.001f64..=1.0, len in 1usize..1000) {
        let filter = PrefixFilter::new(&FilterConfig::new(threshold).unwrap()).unwrap();
        prop_assert!(filter.prefix_length(len).unwrap() <= filter.prefix_length(len + 1).unwrap());
    }

    /// Property: the first query symbol may always match position 1.
    #[test]
    fn prop_first_position_admissible(threshold in 0.001f64..=1.0, len in 1usize..200) {
        let filter = PrefixFilter::new(&FilterConfig::new(threshold).unwrap()).unwrap();
        prop_assert!(max_position(&filter, 1, len) >= 1);
    }
}
