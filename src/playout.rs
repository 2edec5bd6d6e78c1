//! Random playouts (seeded random game simulation).
//!
//! A playout repeatedly picks a uniformly random legal action for the side
//! to move and plays it the way a front end would: click the piece, then
//! click the target. It is used by the `demo` command and by randomized
//! tests, not as an opponent.

use crate::game::{GameResult, GameState};
use crate::selection::ClickOutcome;

/// Play random actions until the game ends or `max_plies` more actions have
/// been applied. Returns the result at that point.
pub fn random_playout(
    state: &mut GameState,
    rng: &mut fastrand::Rng,
    max_plies: usize,
) -> GameResult {
    let limit = state.plies() + max_plies;

    while !state.is_over() && state.plies() < limit {
        let mut actions = state.legal_actions();
        if actions.is_empty() {
            // Unreachable while in progress: the termination check would have fired.
            break;
        }
        let action = actions.swap_remove(rng.usize(..actions.len()));

        // A piece locked into a capture sequence is already selected.
        if state.selected() != Some(action.piece()) {
            let from = action.from();
            let picked = state.click(from);
            debug_assert_eq!(picked, ClickOutcome::Selected(action.piece()));
        }
        let moved = state.click(action.to());
        debug_assert!(matches!(moved, ClickOutcome::Moved { .. }));
    }

    state.result()
}
