//! Property-based tests for scoring and elimination.

use proptest::prelude::*;

use bulls_cows::core::{Digits, Hint, score};
use bulls_cows::solver::CandidatePool;

/// Strategy: two numbers of the same length with distinct digits each.
fn pair_strategy(max_len: usize) -> impl Strategy<Value = (Digits, Digits)> {
    (1..=max_len).prop_flat_map(|n| {
        let digits: Vec<u8> = (0..10).collect();
        (
            Just(digits.clone()).prop_shuffle(),
            Just(digits).prop_shuffle(),
        )
            .prop_map(move |(a, b)| {
                (
                    Digits::from_values(&a[..n]).unwrap(),
                    Digits::from_values(&b[..n]).unwrap(),
                )
            })
    })
}

proptest! {
    // 1. Counts stay within the digit length
    #[test]
    fn hint_within_bounds((guess, answer) in pair_strategy(10)) {
        let hint = score(&guess, &answer);
        let n = guess.len();
        prop_assert!(usize::from(hint.bulls()) + usize::from(hint.cows()) <= n);
        prop_assert!(hint.check_len(n).is_ok());
    }

    // 2. A number scored against itself is all bulls
    #[test]
    fn self_score_is_solved((guess, _) in pair_strategy(10)) {
        let n = guess.len();
        prop_assert_eq!(score(&guess, &guess), Hint::solved(n));
    }

    // 3. Scoring does not depend on which side is the answer
    #[test]
    fn score_is_symmetric((a, b) in pair_strategy(10)) {
        prop_assert_eq!(score(&a, &b), score(&b, &a));
    }

    // 4. Bulls plus cows is the number of shared digits
    #[test]
    fn matches_count_shared_digits((a, b) in pair_strategy(10)) {
        let hint = score(&a, &b);
        let shared = (a.mask() & b.mask()).count_ones() as usize;
        prop_assert_eq!(usize::from(hint.bulls()) + usize::from(hint.cows()), shared);
    }

    // 5. Only a perfect score is solved
    #[test]
    fn solved_only_when_equal((a, b) in pair_strategy(10)) {
        let hint = score(&a, &b);
        prop_assert_eq!(hint.is_solved(a.len()), a == b);
    }

    // 6. Rendered hints parse back to the same hint (single-digit counts only)
    #[test]
    fn hint_text_parses((a, b) in pair_strategy(9)) {
        let hint = score(&a, &b);
        prop_assert_eq!(hint.to_string().parse::<Hint>(), Ok(hint));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    // 7. After a truthful hint every survivor would have produced the same
    //    hint, the secret survives, and the pool never grows
    #[test]
    fn elimination_is_consistent(
        (secret, _) in pair_strategy(4),
        seed in any::<u64>(),
    ) {
        let n = secret.len();
        let mut pool = CandidatePool::seeded(n, seed).unwrap();

        while let Some(guess) = pool.guess() {
            let before = pool.len();
            let hint = score(&guess, &secret);
            let after = pool.eliminate(hint).unwrap();

            prop_assert!(after <= before);
            prop_assert!(after >= 1);
            prop_assert!(pool.candidates().contains(&secret));
            for candidate in pool.candidates() {
                prop_assert_eq!(score(&guess, candidate), hint);
            }
            if hint.is_solved(n) {
                break;
            }
        }

        prop_assert_eq!(pool.solution(), Some(&secret));
    }

    // 8. Candidates keep ascending order through elimination
    #[test]
    fn elimination_preserves_order(
        (secret, _) in pair_strategy(5),
        seed in any::<u64>(),
    ) {
        let mut pool = CandidatePool::seeded(secret.len(), seed).unwrap();
        if let Some(guess) = pool.guess() {
            pool.eliminate(score(&guess, &secret)).unwrap();
        }
        prop_assert!(pool.candidates().windows(2).all(|w| w[0] < w[1]));
    }
}
