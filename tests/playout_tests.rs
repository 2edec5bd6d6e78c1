//! Randomized rule checks over seeded random games.
//!
//! Every seed plays a full game through the click state machine and checks
//! board invariants after each applied action.

use std::collections::HashSet;

use checkers_rust::board::{Board, Color, Rank};
use checkers_rust::config::Rules;
use checkers_rust::constants::{MAX_PLAYOUT_PLIES, PIECES_PER_SIDE};
use checkers_rust::game::{GameResult, GameState, has_any_legal_action};
use checkers_rust::moves::{is_capture_valid, is_simple_move};
use checkers_rust::playout::random_playout;

const SEEDS: u64 = 12;

fn check_invariants(state: &GameState) {
    let board = state.board();

    // At most one live piece per cell, all in bounds.
    let mut seen = HashSet::new();
    for p in board.pieces().iter().filter(|p| p.alive) {
        assert!(Board::is_in_bounds(p.position), "{p:?} off the board");
        assert!(seen.insert(p.position), "two pieces on {:?}", p.position);
    }

    // Captures on one side match losses on the other.
    for color in [Color::Light, Color::Dark] {
        let lost = PIECES_PER_SIDE - board.count_alive(color);
        assert_eq!(board.captured_by(color.opponent()) as usize, lost);
    }

    // Men never stand on their own promotion row.
    for p in board.pieces().iter().filter(|p| p.alive && p.rank == Rank::Man) {
        assert_ne!(p.position.1, board.promotion_row(p.color), "{p:?} not promoted");
    }

    // Simple moves and captures never overlap.
    for p in board.pieces().iter().filter(|p| p.alive) {
        for cell in Board::cells() {
            assert!(!(is_simple_move(board, p, cell) && is_capture_valid(board, p, cell)));
        }
    }

    match state.result() {
        GameResult::InProgress => {
            assert!(has_any_legal_action(board, state.side_to_move()));
            assert!(!state.legal_actions().is_empty());
        }
        GameResult::Won(winner) => {
            assert_eq!(winner, state.side_to_move().opponent());
            assert!(!has_any_legal_action(board, state.side_to_move()));
        }
    }
}

fn play_checked(seed: u64, player: Color, rules: Rules) -> GameState {
    let mut state = GameState::new(player, rules);
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut kings_seen = HashSet::new();

    while !state.is_over() && state.plies() < MAX_PLAYOUT_PLIES {
        let before = state.plies();
        random_playout(&mut state, &mut rng, 1);
        assert_eq!(state.plies(), before + 1);
        check_invariants(&state);

        // Promotion is permanent.
        for (i, p) in state.board().pieces().iter().enumerate() {
            if kings_seen.contains(&i) {
                assert_eq!(p.rank, Rank::King);
            } else if p.rank == Rank::King {
                kings_seen.insert(i);
            }
        }
    }
    state
}

#[test]
fn test_random_games_keep_invariants() {
    let mut finished = 0;
    for seed in 0..SEEDS {
        let player = if seed % 2 == 0 { Color::Light } else { Color::Dark };
        if play_checked(seed, player, Rules::default()).is_over() {
            finished += 1;
        }
    }
    assert!(finished > 0, "no random game finished within the ply limit");
}

#[test]
fn test_random_games_with_variant_rules() {
    let rules = Rules {
        long_range_continuation: false,
        strict_squares: true,
    };
    for seed in 0..SEEDS / 2 {
        play_checked(seed, Color::Light, rules);
    }
}
