//! Property-based tests for the game session state machine.

use proptest::prelude::*;

use scoreline_engine::{
    GameConfig, GameError, GameSession, SessionState, SourceSeed, SyntheticSource,
};

fn new_game(seed: u128, rounds: usize) -> GameSession<SyntheticSource> {
    GameSession::new(
        GameConfig::new(rounds),
        SyntheticSource::with_seed(SourceSeed::from(seed)),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// The best score never falls behind the running total, within and across games.
    #[test]
    fn prop_best_score_dominates_total(
        seed in any::<u128>(),
        rounds in 1usize..8,
        guesses in prop::collection::vec((0u32..6, 0u32..6), 1..40),
    ) {
        let mut game = new_game(seed, rounds);
        game.start_game().unwrap();
        let mut best_seen = 0;

        for (home, away) in guesses {
            match game.state() {
                SessionState::AwaitingPrediction => {
                    game.submit_prediction(home, away).unwrap();
                    prop_assert!(game.best_score() >= game.total_score());
                    prop_assert!(game.best_score() >= best_seen);
                    best_seen = game.best_score();
                }
                SessionState::AwaitingNext => game.advance().unwrap(),
                SessionState::Finished => {
                    game.start_game().unwrap();
                    prop_assert_eq!(game.best_score(), best_seen);
                }
                SessionState::NotStarted => prop_assert!(false, "game was started"),
            }
            prop_assert!(game.round_index() <= game.max_rounds());
        }
    }

    /// Playing every round of a game always ends in the finished state.
    #[test]
    fn prop_full_game_finishes(
        seed in any::<u128>(),
        rounds in 1usize..10,
        guess in (0u32..5, 0u32..5),
    ) {
        let mut game = new_game(seed, rounds);
        game.start_game().unwrap();

        for round in 1..=rounds {
            prop_assert!(game.state().is_awaiting_prediction());
            game.submit_prediction(guess.0, guess.1).unwrap();
            prop_assert_eq!(game.round_index(), round);
            if round < rounds {
                prop_assert!(game.state().is_awaiting_next());
                game.advance().unwrap();
            }
        }

        prop_assert!(game.state().is_finished());
        prop_assert_eq!(game.round_index(), rounds);
        prop_assert_eq!(game.round_scores().len(), rounds);
        let sum: u32 = game.round_scores().iter().map(|score| score.points()).sum();
        prop_assert_eq!(sum, game.total_score());
    }

    /// Out-of-order operations are rejected without touching the session.
    #[test]
    fn prop_invalid_operations_do_not_mutate(seed in any::<u128>(), guess in (0u32..5, 0u32..5)) {
        let mut game = new_game(seed, 3);
        game.start_game().unwrap();

        prop_assert!(
            matches!(game.advance(), Err(GameError::InvalidState { .. })),
            "advance before submit must fail"
        );
        let truth = game.ground_truth();
        game.submit_prediction(guess.0, guess.1).unwrap();
        let total = game.total_score();

        prop_assert!(
            matches!(
                game.submit_prediction(guess.0, guess.1),
                Err(GameError::InvalidState { .. })
            ),
            "second submit must fail"
        );
        prop_assert_eq!(game.total_score(), total);
        prop_assert_eq!(game.round_index(), 1);
        prop_assert_eq!(game.ground_truth(), truth);
    }
}
