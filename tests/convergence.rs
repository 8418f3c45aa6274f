//! End-to-end games: generation sizes, self-play convergence and fixed scenarios.

use bulls_cows::core::{Digits, Hint, score};
use bulls_cows::session::{BotSession, BotTurn};
use bulls_cows::solver::{CandidatePool, PoolError, SecretHolder, candidate_count, generate_all};
use rayon::prelude::*;

fn digits(text: &str) -> Digits {
    Digits::new(text).unwrap()
}

/// Rounds until the pool holds only the secret, or `None` past `cap`
fn rounds_to_determine(secret: Digits, seed: u64, cap: usize) -> Option<usize> {
    let mut pool = CandidatePool::seeded(secret.len(), seed).unwrap();
    let mut holder = SecretHolder::new(secret);

    for round in 1..=cap {
        let guess = pool.guess()?;
        let hint = holder.get_hint(&guess).unwrap();
        pool.eliminate(hint).unwrap();
        if pool.len() == 1 {
            assert_eq!(pool.solution(), Some(&secret));
            return Some(round);
        }
    }
    None
}

#[test]
fn candidate_counts_match_permutations() {
    let expected = [10, 90, 720, 5040, 30240, 151_200];
    for (n, &count) in (1..=6).zip(&expected) {
        let all = generate_all(n).unwrap();
        assert_eq!(all.len(), count, "n={n}");
        assert_eq!(candidate_count(n), count);
        assert!(all.windows(2).all(|w| w[0] < w[1]), "n={n} not ascending");
    }
}

#[test]
fn every_four_digit_secret_is_found_within_ten_rounds() {
    let secrets = generate_all(4).unwrap();

    let worst = secrets
        .par_iter()
        .enumerate()
        .map(|(i, &secret)| {
            rounds_to_determine(secret, i as u64, 10)
                .unwrap_or_else(|| panic!("secret {secret} not determined within 10 rounds"))
        })
        .max()
        .unwrap();

    assert!(worst <= 10);
}

#[test]
fn small_games_converge_for_every_secret() {
    for n in 1..=3 {
        for (i, &secret) in generate_all(n).unwrap().iter().enumerate() {
            assert!(
                rounds_to_determine(secret, i as u64, 10).is_some(),
                "n={n} secret={secret}"
            );
        }
    }
}

#[test]
fn classic_scoring_scenarios() {
    assert_eq!(score(&digits("1234"), &digits("1243")).to_string(), "2A2B");
    assert_eq!(score(&digits("1234"), &digits("5678")).to_string(), "0A0B");
    assert_eq!(score(&digits("1234"), &digits("1234")).to_string(), "4A0B");
}

#[test]
fn no_match_hint_removes_every_guessed_digit() {
    let mut pool = CandidatePool::seeded(4, 21).unwrap();
    let guess = pool.guess().unwrap();

    let left = pool.eliminate(Hint::NONE).unwrap();

    // Six unused digits fill four places
    assert_eq!(left, 6 * 5 * 4 * 3);
    assert!(
        pool.candidates()
            .iter()
            .all(|c| c.mask() & guess.mask() == 0)
    );
}

#[test]
fn winning_hint_leaves_only_the_guess() {
    let mut pool = CandidatePool::seeded(4, 8).unwrap();
    let guess = pool.guess().unwrap();

    assert_eq!(pool.eliminate(Hint::solved(4)).unwrap(), 1);
    assert_eq!(pool.solution(), Some(&guess));
}

#[test]
fn contradictory_hints_empty_the_pool() {
    let mut pool = CandidatePool::seeded(4, 3).unwrap();
    pool.guess().unwrap();
    pool.eliminate(Hint::new(3, 0)).unwrap();
    pool.guess().unwrap();

    assert_eq!(pool.eliminate(Hint::NONE).unwrap(), 0);
    assert!(pool.is_empty());
    assert_eq!(pool.guess(), None);
}

#[test]
fn eliminate_needs_a_guess() {
    let mut pool = CandidatePool::seeded(4, 0).unwrap();
    assert_eq!(pool.eliminate(Hint::NONE), Err(PoolError::NoPreviousGuess));
}

#[test]
fn bot_session_plays_a_full_game() {
    let secret = digits("7031");
    let mut session = BotSession::new(CandidatePool::seeded(4, 99).unwrap());

    let mut turn = session.start().unwrap();
    let rounds = loop {
        match turn {
            BotTurn::Guess { guess, .. } => {
                turn = session.submit_hint(score(&guess, &secret)).unwrap();
            }
            BotTurn::Solved { answer, rounds } => {
                assert_eq!(answer, secret);
                break rounds;
            }
            BotTurn::Contradiction { .. } => panic!("truthful hints cannot contradict"),
        }
    };

    assert!((1..=11).contains(&rounds));
    assert!(session.is_finished());
}

#[test]
fn secret_holder_counts_rounds() {
    let mut holder = SecretHolder::new(digits("5049"));
    assert_eq!(holder.get_hint(&digits("1234")).unwrap().to_string(), "0A1B");
    assert_eq!(holder.get_hint(&digits("5049")).unwrap(), Hint::solved(4));
    assert_eq!(holder.round(), 2);
}
