//! Click-driven selection state machine.
//!
//! A front end turns each pointer press into a board cell and hands it to
//! [`GameState::click`]. The first click picks up a piece of the side to
//! move, the second either retargets the selection, moves the piece through
//! the turn engine, or drops the selection.

use crate::board::Point;
use crate::game::{GameState, TurnOutcome};
use crate::moves::{LegalAction, MoveRecord};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    Selected(usize),
}

/// What a click did.
#[derive(Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing changed.
    Ignored,
    /// The piece at this index is now selected.
    Selected(usize),
    /// The selection was dropped.
    Deselected,
    /// The selected piece acted.
    Moved { record: MoveRecord, turn: TurnOutcome },
}

impl GameState {
    /// Feed one clicked cell into the state machine.
    ///
    /// No transition happens once the game is over. While a capture sequence
    /// is pending, only a further capture by the locked piece is accepted.
    pub fn click(&mut self, cell: Point) -> ClickOutcome {
        if self.is_over() {
            return ClickOutcome::Ignored;
        }

        if let Some(locked) = self.continuation() {
            return match self.validate(locked, cell) {
                Some(action) => self.act(action),
                None => ClickOutcome::Ignored,
            };
        }

        let own = self
            .board()
            .piece_at(cell)
            .filter(|&i| self.board().piece(i).color == self.side_to_move());

        match (self.selection, own) {
            (Selection::Idle, Some(i)) => {
                self.selection = Selection::Selected(i);
                ClickOutcome::Selected(i)
            }
            (Selection::Idle, None) => ClickOutcome::Ignored,
            (Selection::Selected(current), Some(i)) if i == current => {
                self.selection = Selection::Idle;
                ClickOutcome::Deselected
            }
            (Selection::Selected(_), Some(i)) => {
                self.selection = Selection::Selected(i);
                ClickOutcome::Selected(i)
            }
            (Selection::Selected(current), None) => match self.validate(current, cell) {
                Some(action) => self.act(action),
                None => {
                    self.selection = Selection::Idle;
                    ClickOutcome::Deselected
                }
            },
        }
    }

    fn act(&mut self, action: LegalAction) -> ClickOutcome {
        let record = action.record();
        match self.apply(action) {
            Some(turn) => ClickOutcome::Moved { record, turn },
            None => ClickOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Color, Rank};
    use crate::config::Rules;
    use crate::game::GameResult;

    #[test]
    fn test_select_and_move() {
        let mut state = GameState::new(Color::Light, Rules::default());
        assert_eq!(state.click((1, 2)), ClickOutcome::Selected(8));
        assert_eq!(state.selection(), Selection::Selected(8));

        match state.click((0, 3)) {
            ClickOutcome::Moved { record, turn } => {
                assert_eq!(record.piece, 8);
                assert_eq!(record.from, (1, 2));
                assert_eq!(record.to, (0, 3));
                assert_eq!(turn, TurnOutcome::Passed);
            }
            other => panic!("expected a move, got {other:?}"),
        }
        assert_eq!(state.selection(), Selection::Idle);
        assert_eq!(state.side_to_move(), Color::Dark);
    }

    #[test]
    fn test_idle_ignores_empty_and_opponent() {
        let mut state = GameState::new(Color::Light, Rules::default());
        assert_eq!(state.click((0, 3)), ClickOutcome::Ignored);
        assert_eq!(state.click((0, 5)), ClickOutcome::Ignored);
        assert_eq!(state.click((-4, 20)), ClickOutcome::Ignored);
        assert_eq!(state.selection(), Selection::Idle);
    }

    #[test]
    fn test_reclick_deselects() {
        let mut state = GameState::new(Color::Light, Rules::default());
        state.click((1, 2));
        assert_eq!(state.click((1, 2)), ClickOutcome::Deselected);
        assert_eq!(state.selection(), Selection::Idle);
    }

    #[test]
    fn test_switch_selection() {
        let mut state = GameState::new(Color::Light, Rules::default());
        state.click((1, 2));
        assert_eq!(state.click((3, 2)), ClickOutcome::Selected(9));
        assert_eq!(state.selected(), Some(9));
    }

    #[test]
    fn test_invalid_target_deselects() {
        let mut state = GameState::new(Color::Light, Rules::default());
        state.click((1, 2));
        assert_eq!(state.click((1, 4)), ClickOutcome::Deselected);
        assert_eq!(state.click((9, 9)), ClickOutcome::Ignored);
        assert_eq!(state.side_to_move(), Color::Light);
    }

    #[test]
    fn test_capture_sequence_locks_piece() {
        let mut board = Board::empty();
        board.place((0, 0), Color::Light, Rank::Man).unwrap();
        board.place((1, 1), Color::Dark, Rank::Man).unwrap();
        board.place((3, 3), Color::Dark, Rank::Man).unwrap();
        board.place((6, 0), Color::Light, Rank::Man).unwrap();
        board.place((7, 7), Color::Dark, Rank::Man).unwrap();
        let mut state = GameState::from_board(board, Color::Light);

        state.click((0, 0));
        match state.click((2, 2)) {
            ClickOutcome::Moved { turn, .. } => assert_eq!(turn, TurnOutcome::Continue),
            other => panic!("expected a capture, got {other:?}"),
        }
        assert_eq!(state.selected(), Some(0));

        // Neither deselecting nor switching pieces is allowed mid-sequence.
        assert_eq!(state.click((2, 2)), ClickOutcome::Ignored);
        assert_eq!(state.click((6, 0)), ClickOutcome::Ignored);
        assert_eq!(state.click((1, 3)), ClickOutcome::Ignored);
        assert_eq!(state.selected(), Some(0));

        match state.click((4, 4)) {
            ClickOutcome::Moved { turn, .. } => assert_eq!(turn, TurnOutcome::Passed),
            other => panic!("expected a capture, got {other:?}"),
        }
        assert_eq!(state.side_to_move(), Color::Dark);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_no_transitions_after_game_over() {
        let mut board = Board::empty();
        board.place((7, 7), Color::Light, Rank::Man).unwrap();
        board.place((0, 6), Color::Dark, Rank::Man).unwrap();
        let mut state = GameState::from_board(board, Color::Light);
        assert_eq!(state.result(), GameResult::Won(Color::Dark));
        assert_eq!(state.click((7, 7)), ClickOutcome::Ignored);
        assert_eq!(state.selection(), Selection::Idle);
    }
}
