//! Property tests for the count-up badge.

use std::time::Duration;

use gamerie_core::{Counter, CounterConfig, format_count};
use proptest::prelude::*;

proptest! {
    #[test]
    fn lands_on_target_exactly_once(target in 0u64..5_000_000, steps in 1u32..500) {
        let config = CounterConfig::new(target, Duration::from_millis(2_000), steps).unwrap();
        let frames: Vec<u64> = Counter::new(config).unwrap().frames().collect();

        prop_assert_eq!(frames.last().copied(), Some(target));
        prop_assert_eq!(frames.iter().filter(|v| **v == target).count(), 1);
        prop_assert!(frames.iter().all(|v| *v <= target));
    }

    #[test]
    fn never_needs_more_than_steps_ticks(target in 1u64..5_000_000, steps in 1u32..500) {
        let config = CounterConfig::new(target, Duration::from_millis(2_000), steps).unwrap();
        let frames: Vec<u64> = Counter::new(config).unwrap().frames().collect();

        prop_assert!(frames.len() <= steps as usize);
        prop_assert!(frames.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn formatting_only_adds_separators(n in any::<u64>()) {
        let formatted = format_count(n);
        prop_assert_eq!(formatted.replace(',', ""), n.to_string());
        prop_assert!(formatted.split(',').skip(1).all(|group| group.len() == 3));
    }
}
