//! Game state, turn engine, and termination check.
//!
//! [`GameState`] is the one value a front end owns per game. It is changed
//! only through [`GameState::apply`], usually by way of `GameState::click`
//! in [`crate::selection`], and read through [`GameState::snapshot`].

use crate::board::{Board, Color, Point, Rank};
use crate::config::Rules;
use crate::constants::PROBE_RADIUS;
use crate::moves::{self, ActionKind, LegalAction};
use crate::selection::Selection;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    Won(Color),
}

/// Whether the turn passed after an applied action.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The other color is now to move.
    Passed,
    /// The piece that just captured must capture again.
    Continue,
}

/// A live piece as seen by a renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PieceView {
    pub x: i32,
    pub y: i32,
    pub color: Color,
    pub rank: Rank,
    pub selected: bool,
}

/// Owned, read-only copy of everything a renderer needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub pieces: Vec<PieceView>,
    pub light_captures: u32,
    pub dark_captures: u32,
    pub side_to_move: Color,
    pub result: GameResult,
}

#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    pub(crate) selection: Selection,
    /// Piece locked into a capture sequence.
    chain: Option<usize>,
    result: GameResult,
    /// Actions applied so far.
    plies: usize,
}

impl GameState {
    /// Start a game. The player's color takes the top rows and moves first.
    pub fn new(player: Color, rules: Rules) -> Self {
        Self::from_board(Board::starting(player, rules), player)
    }

    /// Resume from a custom position.
    ///
    /// The termination check runs immediately, so a side to move without
    /// legal actions has already lost.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        let mut state = Self {
            board,
            side_to_move,
            selection: Selection::Idle,
            chain: None,
            result: GameResult::InProgress,
            plies: 0,
        };
        state.check_for_win();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected(&self) -> Option<usize> {
        match self.selection {
            Selection::Idle => None,
            Selection::Selected(i) => Some(i),
        }
    }

    /// The piece that must keep capturing before the turn can pass.
    pub fn continuation(&self) -> Option<usize> {
        self.chain
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn is_over(&self) -> bool {
        self.result != GameResult::InProgress
    }

    pub fn plies(&self) -> usize {
        self.plies
    }

    /// Validate an action of the piece at `index` in the current turn.
    ///
    /// On top of [`moves::validate`], the game must be in progress, the
    /// piece must belong to the side to move, and during a capture sequence
    /// only captures by the locked piece are accepted.
    pub fn validate(&self, index: usize, target: Point) -> Option<LegalAction> {
        if self.is_over() {
            return None;
        }
        if self.board.get(index)?.color != self.side_to_move {
            return None;
        }
        if self.chain.is_some_and(|locked| locked != index) {
            return None;
        }
        let action = moves::validate(&self.board, index, target)?;
        if self.chain.is_some() && !action.is_capture() {
            return None;
        }
        Some(action)
    }

    /// Every action the side to move may take now.
    pub fn legal_actions(&self) -> Vec<LegalAction> {
        if self.is_over() {
            return Vec::new();
        }
        let pieces: Vec<usize> = match self.chain {
            Some(locked) => vec![locked],
            None => self
                .board
                .live_pieces(self.side_to_move)
                .map(|(i, _)| i)
                .collect(),
        };
        pieces
            .into_iter()
            .flat_map(|i| Board::cells().filter_map(move |cell| self.validate(i, cell)))
            .collect()
    }

    /// Apply a validated action and settle the turn.
    ///
    /// Removes the captured piece, moves, promotes, then either keeps the
    /// piece selected for a further capture or passes the turn. Finishes
    /// with the termination check.
    ///
    /// The action is checked against this state before anything changes.
    /// One validated on another state, or before the board moved on, is
    /// refused with `None` and the state is left untouched.
    pub fn apply(&mut self, action: LegalAction) -> Option<TurnOutcome> {
        let index = action.piece();
        if self.validate(index, action.to()).as_ref() != Some(&action) {
            return None;
        }
        let color = self.board.piece(index).color;

        if let ActionKind::Capture { victim } = action.kind() {
            self.board.remove(victim, color);
        }
        self.board.relocate(index, action.to());

        if self.board.piece(index).rank == Rank::Man
            && action.to().1 == self.board.promotion_row(color)
        {
            self.board.promote(index);
        }
        self.plies += 1;

        let outcome = if action.is_capture() && moves::can_capture_again(&self.board, index) {
            self.selection = Selection::Selected(index);
            self.chain = Some(index);
            TurnOutcome::Continue
        } else {
            self.selection = Selection::Idle;
            self.chain = None;
            self.side_to_move = color.opponent();
            TurnOutcome::Passed
        };

        self.check_for_win();
        Some(outcome)
    }

    /// End the game if the side to move is stuck. Returns the result.
    pub fn check_for_win(&mut self) -> GameResult {
        if self.result == GameResult::InProgress
            && !has_any_legal_action(&self.board, self.side_to_move)
        {
            self.result = GameResult::Won(self.side_to_move.opponent());
            self.selection = Selection::Idle;
            self.chain = None;
        }
        self.result
    }

    pub fn snapshot(&self) -> Snapshot {
        let selected = self.selected();
        let pieces = self
            .board
            .pieces()
            .iter()
            .enumerate()
            .filter(|(_, p)| p.alive)
            .map(|(i, p)| PieceView {
                x: p.position.0,
                y: p.position.1,
                color: p.color,
                rank: p.rank,
                selected: selected == Some(i),
            })
            .collect();
        Snapshot {
            pieces,
            light_captures: self.board.captured_by(Color::Light),
            dark_captures: self.board.captured_by(Color::Dark),
            side_to_move: self.side_to_move,
            result: self.result,
        }
    }
}

/// Check whether any live piece of `color` has a simple move or capture
/// within [`PROBE_RADIUS`] cells.
pub fn has_any_legal_action(board: &Board, color: Color) -> bool {
    let span = -PROBE_RADIUS..=PROBE_RADIUS;
    board.live_pieces(color).any(|(_, piece)| {
        let (x, y) = piece.position;
        span.clone().any(|dx| {
            span.clone().any(|dy| {
                let target = (x + dx, y + dy);
                moves::is_simple_move(board, piece, target)
                    || moves::is_capture_valid(board, piece, target)
            })
        })
    })
}
