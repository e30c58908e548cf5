//! Property-based tests for the sequence and number helpers.

use feature_showcase::core::command::{handle_command, Command, FALLBACK_MESSAGE};
use feature_showcase::core::fibonacci::MAX_TERMS;
use feature_showcase::{fibonacci, process_numbers, Fibonacci};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Both producers return exactly `count` terms.
    #[test]
    fn fibonacci_has_requested_length(count in 0usize..=MAX_TERMS) {
        prop_assert_eq!(fibonacci(count).unwrap().len(), count);
        prop_assert_eq!(Fibonacci::new(count).count(), count);
    }

    /// Every term after the seeds is the sum of the two before it.
    #[test]
    fn fibonacci_recurrence(count in 3usize..=MAX_TERMS) {
        let terms = fibonacci(count).unwrap();
        prop_assert_eq!(&terms[..2], &[0u64, 1]);
        for window in terms.windows(3) {
            prop_assert_eq!(window[2], window[0] + window[1]);
        }
    }

    /// The lazy and eager producers agree.
    #[test]
    fn lazy_matches_eager(count in 0usize..=MAX_TERMS) {
        let lazy: Vec<u64> = Fibonacci::new(count).collect();
        prop_assert_eq!(lazy, fibonacci(count).unwrap());
    }

    /// Each field of the result matches a direct computation.
    #[test]
    fn process_numbers_fields(numbers in prop::collection::vec(any::<i64>(), 0..50)) {
        let result = process_numbers(&numbers);

        prop_assert_eq!(result.squared.len(), numbers.len());
        prop_assert_eq!(result.doubled.len(), numbers.len());
        for (i, &x) in numbers.iter().enumerate() {
            prop_assert_eq!(result.squared[i], i128::from(x) * i128::from(x));
            prop_assert_eq!(result.doubled[i], i128::from(x) * 2);
        }
        prop_assert!(result.evens.iter().all(|x| x % 2 == 0));
        prop_assert_eq!(
            result.evens.len(),
            numbers.iter().filter(|x| *x % 2 == 0).count()
        );
        prop_assert_eq!(result.total, numbers.iter().map(|&x| i128::from(x)).sum::<i128>());
    }

    /// Text that does not start with a known verb falls back.
    #[test]
    fn unknown_verbs_fall_back(verb in "[a-z]{1,8}", arg in "[a-z]{1,8}") {
        prop_assume!(!["quit", "exit", "move", "attack"].contains(&verb.as_str()));
        let command: Command = format!("{} {}", verb, arg).parse().unwrap();
        prop_assert_eq!(handle_command(&command), FALLBACK_MESSAGE);
    }
}
