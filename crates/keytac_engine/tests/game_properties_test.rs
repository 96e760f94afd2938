//! Properties that hold across randomly generated input sequences.

use keytac_engine::invariants::{GameInvariants, InvariantSet};
use keytac_engine::rules::scan_winner;
use keytac_engine::{
    Controller, Direction, Directive, GameOutcome, GameState, InputEvent, Playable,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEEDS: u64 = 200;
const EVENTS_PER_GAME: usize = 120;

fn random_event(rng: &mut StdRng) -> InputEvent {
    match rng.random_range(0..6) {
        0 => InputEvent::Move(Direction::Up),
        1 => InputEvent::Move(Direction::Down),
        2 => InputEvent::Move(Direction::Left),
        3 => InputEvent::Move(Direction::Right),
        4 => InputEvent::Select,
        _ => InputEvent::Other,
    }
}

#[test]
fn test_random_play_preserves_properties() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Controller::new(GameState::new(&mut rng));

        for _ in 0..EVENTS_PER_GAME {
            if game.is_over() {
                break;
            }
            let before = game.state().clone();
            let directive = game.handle_input(random_event(&mut rng));
            let after = game.state();

            let cell = after.cursor().cell();
            assert!(cell.row() <= 2 && cell.col() <= 2, "seed {seed}: cursor left board");

            assert_eq!(
                usize::from(after.move_count()),
                after.board().occupied_count(),
                "seed {seed}: move count drifted from board"
            );

            let placed = after.move_count() == before.move_count() + 1;
            if placed {
                assert_eq!(after.turn(), before.turn().opponent(), "seed {seed}");
                assert!(matches!(directive, Directive::Redraw | Directive::Finish));
            } else {
                assert_eq!(after.move_count(), before.move_count(), "seed {seed}");
                assert_eq!(after.turn(), before.turn(), "seed {seed}: turn flipped without a move");
                assert_eq!(after.board(), before.board(), "seed {seed}");
            }

            let outcome = after.evaluate();
            assert_eq!(outcome, after.evaluate(), "seed {seed}: evaluate not idempotent");
            match outcome {
                GameOutcome::Win(_) => assert!(after.move_count() >= 5, "seed {seed}: early win"),
                GameOutcome::Tie => assert_eq!(after.move_count(), 9, "seed {seed}: early tie"),
                GameOutcome::InProgress => assert!(after.move_count() < 9, "seed {seed}"),
            }

            assert!(GameInvariants::check_all(after).is_ok(), "seed {seed}");
        }
    }
}

#[test]
fn test_incremental_check_agrees_with_full_scan() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Controller::new(GameState::new(&mut rng));

        while !game.is_over() {
            game.handle_input(random_event(&mut rng));
            let state = game.state();
            assert_eq!(
                state.evaluate().winner(),
                scan_winner(state.board()),
                "seed {seed}: incremental and full scan disagree\n{}",
                state.board()
            );
        }
    }
}

#[test]
fn test_every_random_game_terminates() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Controller::new(GameState::new(&mut rng));
        let mut steps = 0;
        while !game.is_over() {
            game.handle_input(random_event(&mut rng));
            steps += 1;
            assert!(steps < 10_000, "seed {seed}: game never ended");
        }
        assert!(game.view().lifecycle.is_over());
    }
}
