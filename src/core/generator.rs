//! Pure sequence computation. Formatting and output live in the pipeline.

/// The first `count` natural numbers, starting at 1. Empty for count 0.
pub fn first_n(count: u64) -> Vec<u64> {
    (1..=count).collect()
}

/// Closed form count*(count+1)/2. Equals the fold over `first_n(count)`;
/// callers keep count within `validation::MAX_COUNT` so this cannot overflow.
pub fn triangular_sum(count: u64) -> u64 {
    count * (count + 1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Sequence;
    use proptest::prelude::*;

    #[test]
    fn test_first_n_default_scenario() {
        assert_eq!(first_n(8), vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(triangular_sum(8), 36);
    }

    #[test]
    fn test_first_n_degenerate_counts() {
        assert_eq!(first_n(0), Vec::<u64>::new());
        assert_eq!(first_n(1), vec![1]);
        assert_eq!(triangular_sum(0), 0);
        assert_eq!(triangular_sum(1), 1);
    }

    proptest! {
        #[test]
        fn prop_length_and_elements(count in 0u64..5_000) {
            let values = first_n(count);
            prop_assert_eq!(values.len() as u64, count);
            for (i, value) in values.iter().enumerate() {
                prop_assert_eq!(*value, i as u64 + 1);
            }
        }

        #[test]
        fn prop_closed_form_matches_fold(count in 0u64..5_000) {
            let sequence = Sequence {
                values: first_n(count),
            };
            prop_assert_eq!(triangular_sum(count), sequence.sum());
        }

        #[test]
        fn prop_generation_is_idempotent(count in 0u64..5_000) {
            prop_assert_eq!(first_n(count), first_n(count));
        }
    }
}
