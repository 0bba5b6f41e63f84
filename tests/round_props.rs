use hangman::{Difficulty, GameStatus, GuessResult, Round, RoundOptions};
use proptest::prelude::*;

fn any_difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Normal),
        Just(Difficulty::Hard),
    ]
}

fn any_word() -> impl Strategy<Value = String> {
    // plain words plus the occasional hyphenated one
    prop_oneof![
        3 => "[a-z]{1,12}",
        1 => "[a-z]{1,6}-[a-z]{1,6}",
    ]
}

fn any_guesses() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::char::range('a', 'z'), 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// The wrong count stays within the budget for the whole lifetime of a
    /// round, and `Lost` happens exactly when the budget is exhausted.
    #[test]
    fn wrong_count_stays_in_budget(
        word in any_word(),
        difficulty in any_difficulty(),
        guesses in any_guesses(),
    ) {
        let mut round = Round::new(&word, difficulty, RoundOptions::default()).unwrap();
        for c in guesses {
            round.guess(c).unwrap();
            prop_assert!(round.wrong() <= round.max_wrong());
            match round.status() {
                GameStatus::Lost => prop_assert_eq!(round.wrong(), round.max_wrong()),
                GameStatus::Won | GameStatus::InProgress => {
                    prop_assert!(round.wrong() < round.max_wrong())
                }
            }
        }
    }

    /// Submitting the same letter twice produces the same round state after
    /// the second call as after the first.
    #[test]
    fn repeat_guesses_are_idempotent(
        word in any_word(),
        difficulty in any_difficulty(),
        guesses in any_guesses(),
    ) {
        let mut round = Round::new(&word, difficulty, RoundOptions::default()).unwrap();
        for c in guesses {
            let first = round.guess(c).unwrap();
            let after_first = round.clone();
            let second = round.guess(c).unwrap();
            prop_assert_eq!(&round, &after_first);
            if first == GuessResult::Hit || first == GuessResult::Miss {
                if round.is_finished() {
                    prop_assert_eq!(second, GuessResult::GameOver);
                } else {
                    prop_assert_eq!(second, GuessResult::Repeat);
                }
            }
        }
    }

    /// Once terminal, no guess changes any field of the round.
    #[test]
    fn terminal_rounds_never_mutate(
        word in any_word(),
        difficulty in any_difficulty(),
        guesses in any_guesses(),
        extra in any_guesses(),
    ) {
        let mut round = Round::new(&word, difficulty, RoundOptions::default()).unwrap();
        for c in guesses {
            round.guess(c).unwrap();
            if round.is_finished() {
                break;
            }
        }
        prop_assume!(round.is_finished());
        let frozen = round.clone();
        for c in extra {
            prop_assert_eq!(round.guess(c).unwrap(), GuessResult::GameOver);
            prop_assert_eq!(&round, &frozen);
        }
    }

    /// `Won` holds exactly when every guessable position is revealed, and
    /// the mask never leaks an unrevealed letter while in progress.
    #[test]
    fn won_iff_every_position_revealed(
        word in any_word(),
        difficulty in any_difficulty(),
        guesses in any_guesses(),
    ) {
        let mut round = Round::new(&word, difficulty, RoundOptions::default()).unwrap();
        for c in guesses {
            round.guess(c).unwrap();
            let mask = round.masked_word();
            match round.status() {
                GameStatus::Won => {
                    prop_assert!(!mask.contains('_'));
                    prop_assert_eq!(mask.as_str(), word.as_str());
                }
                GameStatus::InProgress => {
                    prop_assert!(mask.contains('_'));
                    // revealed positions agree with the secret
                    for (m, w) in mask.chars().zip(word.chars()) {
                        prop_assert!(m == '_' || m == w);
                    }
                }
                GameStatus::Lost => prop_assert_eq!(mask.as_str(), word.as_str()),
            }
        }
    }
}
