//! Move and capture validation.
//!
//! Two independent predicates decide legality: [`is_simple_move`] and
//! [`is_capture_valid`]. They never both hold for the same piece and target,
//! so the kind of an action is known before anything is mutated.
//!
//! [`validate`] is the only way to obtain a [`LegalAction`], and a
//! `LegalAction` is the only input the turn engine accepts.
//!
//! Rules summary:
//! - A man steps one cell diagonally forward, or jumps two cells diagonally
//!   forward over a live opponent piece.
//! - A king slides any distance diagonally with at most one occupied cell on
//!   the way. If that single piece is an opponent, the slide is a capture.

use crate::board::{Board, Piece, Point, Rank};
use crate::constants::{DIAGONALS, JUMP_DISTANCE, N};

/// What a legal action does besides moving the piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Step,
    Capture { victim: usize },
}

/// Plain description of an action, kept after the action itself is spent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    /// Index of the moving piece.
    pub piece: usize,
    pub from: Point,
    pub to: Point,
    pub kind: ActionKind,
}

/// A validated action. Fields are private: only [`validate`] builds one.
///
/// Not `Copy` or `Clone`: [`crate::game::GameState::apply`] consumes it, so
/// one validation yields at most one application.
#[derive(Debug, PartialEq, Eq)]
pub struct LegalAction {
    record: MoveRecord,
}

impl LegalAction {
    /// Index of the moving piece.
    pub fn piece(&self) -> usize {
        self.record.piece
    }

    pub fn from(&self) -> Point {
        self.record.from
    }

    pub fn to(&self) -> Point {
        self.record.to
    }

    pub fn kind(&self) -> ActionKind {
        self.record.kind
    }

    pub fn is_capture(&self) -> bool {
        matches!(self.record.kind, ActionKind::Capture { .. })
    }

    pub fn record(&self) -> MoveRecord {
        self.record
    }
}

/// Unit step and distance from `from` to `to`, if they share a diagonal.
fn diagonal(from: Point, to: Point) -> Option<(i32, i32, i32)> {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    if dx == 0 || dx.abs() != dy.abs() {
        return None;
    }
    Some((dx.signum(), dy.signum(), dx.abs()))
}

/// Cells strictly between the start and the end of a diagonal line.
fn path(from: Point, (sx, sy, dist): (i32, i32, i32)) -> impl Iterator<Item = Point> {
    (1..dist).map(move |i| (from.0 + i * sx, from.1 + i * sy))
}

/// Check whether `piece` can move to `target` without capturing.
pub fn is_simple_move(board: &Board, piece: &Piece, target: Point) -> bool {
    if !board.is_playable(target) || board.piece_at(target).is_some() {
        return false;
    }
    let Some(line) = diagonal(piece.position, target) else {
        return false;
    };
    let (_, sy, dist) = line;

    match piece.rank {
        Rank::Man => dist == 1 && sy == board.forward(piece.color),
        Rank::King => {
            let mut blockers = path(piece.position, line).filter_map(|c| board.piece_at(c));
            match (blockers.next(), blockers.next()) {
                (None, _) => true,
                // A lone opponent in the way turns the slide into a capture.
                (Some(only), None) => board.piece(only).color == piece.color,
                (Some(_), Some(_)) => false,
            }
        }
    }
}

/// Check whether `piece` can capture by moving to `target`.
pub fn is_capture_valid(board: &Board, piece: &Piece, target: Point) -> bool {
    capture_victim(board, piece, target).is_some()
}

/// The piece that a capture of `piece` onto `target` would remove.
fn capture_victim(board: &Board, piece: &Piece, target: Point) -> Option<usize> {
    if !board.is_playable(target) || board.piece_at(target).is_some() {
        return None;
    }
    let line = diagonal(piece.position, target)?;
    let (sx, sy, dist) = line;

    match piece.rank {
        Rank::Man => {
            if dist != JUMP_DISTANCE || sy != board.forward(piece.color) {
                return None;
            }
            let mid = (piece.position.0 + sx, piece.position.1 + sy);
            let victim = board.piece_at(mid)?;
            (board.piece(victim).color != piece.color).then_some(victim)
        }
        Rank::King => {
            let mut victim = None;
            for cell in path(piece.position, line) {
                if let Some(i) = board.piece_at(cell) {
                    if board.piece(i).color == piece.color || victim.is_some() {
                        return None;
                    }
                    victim = Some(i);
                }
            }
            victim
        }
    }
}

/// Check whether the piece at `index` has a capture available right now.
///
/// Jumps of distance two are always probed. Kings are probed at every
/// distance when [`crate::config::Rules::long_range_continuation`] is on.
pub fn can_capture_again(board: &Board, index: usize) -> bool {
    let Some(piece) = board.get(index).filter(|p| p.alive) else {
        return false;
    };
    let reach = if piece.is_king() && board.rules().long_range_continuation {
        N - 1
    } else {
        JUMP_DISTANCE
    };
    let (x, y) = piece.position;

    DIAGONALS.iter().any(|&(dx, dy)| {
        (JUMP_DISTANCE..=reach).any(|d| is_capture_valid(board, piece, (x + d * dx, y + d * dy)))
    })
}

/// Validate moving the piece at `index` to `target`.
///
/// Returns `None` for dead or unknown pieces and for illegal targets.
/// Turn order is not checked here, see [`crate::game::GameState::validate`].
pub fn validate(board: &Board, index: usize, target: Point) -> Option<LegalAction> {
    let piece = board.get(index).filter(|p| p.alive)?;

    let kind = if let Some(victim) = capture_victim(board, piece, target) {
        ActionKind::Capture { victim }
    } else if is_simple_move(board, piece, target) {
        ActionKind::Step
    } else {
        return None;
    };

    Some(LegalAction {
        record: MoveRecord {
            piece: index,
            from: piece.position,
            to: target,
            kind,
        },
    })
}

/// Every legal action of the piece at `index`, in board order of targets.
pub fn legal_actions(board: &Board, index: usize) -> Vec<LegalAction> {
    Board::cells()
        .filter_map(|cell| validate(board, index, cell))
        .collect()
}
