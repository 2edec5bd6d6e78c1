//! Constants for board geometry, setup, and engine limits.
//!
//! The board is a fixed 8x8 grid addressed by `(x, y)` with `0 <= x, y < N`.
//! Row 0 is printed first. Which color starts on rows `0..HOME_ROWS` depends
//! on the color the player picked, see [`crate::board::Board::starting`].

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: i32 = 8;

/// Number of rows each side fills at the start of a game.
pub const HOME_ROWS: i32 = 3;

/// Pieces per side in the starting position (`HOME_ROWS * N / 2`).
pub const PIECES_PER_SIDE: usize = 12;

/// Arena capacity. Pieces are never reallocated during a game.
pub const MAX_PIECES: usize = 2 * PIECES_PER_SIDE;

/// Unit steps along the four diagonals.
/// Order: NW, NE, SE, SW (y grows downward in the printed board)
pub const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (1, -1), (1, 1), (-1, 1)];

// =============================================================================
// Rule Parameters
// =============================================================================

/// Distance of a man's jump (and of the short continuation probe).
pub const JUMP_DISTANCE: i32 = 2;

/// Half-width of the square probed by the termination check.
///
/// Radius two is enough for kings as well: a long king action always implies
/// a legal action within two cells along the same diagonal.
pub const PROBE_RADIUS: i32 = 2;

// =============================================================================
// Demo / Playout Limits
// =============================================================================

/// Default cap on applied actions in a random playout.
/// Kings can shuffle forever, and there is no draw rule.
pub const MAX_PLAYOUT_PLIES: usize = 400;

// =============================================================================
// Piece Glyphs (for the ASCII board)
// =============================================================================

/// Light man.
pub const GLYPH_LIGHT_MAN: char = 'w';

/// Light king.
pub const GLYPH_LIGHT_KING: char = 'W';

/// Dark man.
pub const GLYPH_DARK_MAN: char = 'b';

/// Dark king.
pub const GLYPH_DARK_KING: char = 'B';

/// Empty cell.
pub const GLYPH_EMPTY: char = '.';
