//! Board model: pieces, colors, and the coordinate system.
//!
//! Pieces live in a fixed-capacity arena. A piece's index is its identity for
//! the whole game, so captured pieces are tombstoned (`alive = false`) rather
//! than removed. This module only stores and looks things up; legality is
//! decided in [`crate::moves`].

use std::fmt;

use crate::config::Rules;
use crate::constants::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Parse a color name. Accepts `light`/`white` and `dark`/`black`,
    /// case-insensitively, and their first letters.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "light" | "white" | "l" | "w" => Some(Color::Light),
            "dark" | "black" | "d" | "b" => Some(Color::Dark),
            _ => None,
        }
    }

    fn slot(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "light"),
            Color::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rank {
    Man,
    King,
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Man => write!(f, "man"),
            Rank::King => write!(f, "king"),
        }
    }
}

/// A cell `(x, y)`. Signed so that clicks and probes past the edge can be
/// represented and rejected by [`Board::is_in_bounds`].
pub type Point = (i32, i32);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub position: Point,
    pub color: Color,
    pub rank: Rank,
    pub alive: bool,
}

impl Piece {
    fn new(position: Point, color: Color, rank: Rank) -> Self {
        Self {
            position,
            color,
            rank,
            alive: true,
        }
    }

    pub fn is_king(&self) -> bool {
        self.rank == Rank::King
    }

    fn glyph(&self) -> char {
        match (self.color, self.rank) {
            (Color::Light, Rank::Man) => GLYPH_LIGHT_MAN,
            (Color::Light, Rank::King) => GLYPH_LIGHT_KING,
            (Color::Dark, Rank::Man) => GLYPH_DARK_MAN,
            (Color::Dark, Rank::King) => GLYPH_DARK_KING,
        }
    }
}

/// The piece arena plus per-color capture counters.
///
/// `top` is the color whose home rows are `0..HOME_ROWS`; it advances toward
/// increasing `y`. The other color advances toward decreasing `y`.
#[derive(Clone, Debug)]
pub struct Board {
    pieces: Vec<Piece>,
    captures: [u32; 2],
    top: Color,
    rules: Rules,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// An empty board with Light on top and default rules.
    pub fn empty() -> Self {
        Self::with_rules(Color::Light, Rules::default())
    }

    /// An empty board with the given orientation and rules.
    pub fn with_rules(top: Color, rules: Rules) -> Self {
        Self {
            pieces: Vec::with_capacity(MAX_PIECES),
            captures: [0; 2],
            top,
            rules,
        }
    }

    /// The starting position for a game where the player picked `player`.
    ///
    /// The player's pieces fill rows `0..HOME_ROWS`, the opponent's the last
    /// `HOME_ROWS` rows. Only squares with odd `x + y` are used.
    pub fn starting(player: Color, rules: Rules) -> Self {
        let mut board = Self::with_rules(player, rules);
        for (color, first_row) in [(player, 0), (player.opponent(), N - HOME_ROWS)] {
            for y in first_row..first_row + HOME_ROWS {
                for x in ((y + 1) % 2..N).step_by(2) {
                    board.pieces.push(Piece::new((x, y), color, Rank::Man));
                }
            }
        }
        board
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Place a live piece for a custom position.
    ///
    /// Returns the new piece's index, or `None` if the cell is out of
    /// bounds, already holds a live piece, or the arena is full.
    pub fn place(&mut self, at: Point, color: Color, rank: Rank) -> Option<usize> {
        if !Self::is_in_bounds(at) || self.piece_at(at).is_some() {
            return None;
        }
        if self.pieces.len() >= MAX_PIECES {
            return None;
        }
        self.pieces.push(Piece::new(at, color, rank));
        Some(self.pieces.len() - 1)
    }

    /// All pieces, tombstoned ones included, in index order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn get(&self, index: usize) -> Option<&Piece> {
        self.pieces.get(index)
    }

    /// The piece at `index`.
    ///
    /// # Panics
    /// If `index` was not handed out by this board.
    pub fn piece(&self, index: usize) -> &Piece {
        &self.pieces[index]
    }

    /// Index of the live piece on `at`, if any.
    pub fn piece_at(&self, at: Point) -> Option<usize> {
        self.pieces
            .iter()
            .position(|p| p.alive && p.position == at)
    }

    pub fn is_in_bounds((x, y): Point) -> bool {
        (0..N).contains(&x) && (0..N).contains(&y)
    }

    /// Whether a piece may end an action on `at` under the active rules.
    pub fn is_playable(&self, at: Point) -> bool {
        Self::is_in_bounds(at) && (!self.rules.strict_squares || (at.0 + at.1) % 2 == 1)
    }

    /// Every cell of the board, row by row.
    pub fn cells() -> impl Iterator<Item = Point> {
        (0..N).flat_map(|y| (0..N).map(move |x| (x, y)))
    }

    /// Live pieces of `color` with their indices.
    pub fn live_pieces(&self, color: Color) -> impl Iterator<Item = (usize, &Piece)> + '_ {
        self.pieces
            .iter()
            .enumerate()
            .filter(move |(_, p)| p.alive && p.color == color)
    }

    pub fn count_alive(&self, color: Color) -> usize {
        self.live_pieces(color).count()
    }

    /// Number of opponent pieces `color` has captured this game.
    pub fn captured_by(&self, color: Color) -> u32 {
        self.captures[color.slot()]
    }

    /// Row direction `color`'s men advance in: `1` or `-1`.
    pub fn forward(&self, color: Color) -> i32 {
        if color == self.top { 1 } else { -1 }
    }

    /// The row on which a man of `color` is promoted.
    pub fn promotion_row(&self, color: Color) -> i32 {
        if color == self.top { N - 1 } else { 0 }
    }

    pub(crate) fn remove(&mut self, victim: usize, by: Color) {
        self.pieces[victim].alive = false;
        self.captures[by.slot()] += 1;
    }

    pub(crate) fn relocate(&mut self, index: usize, to: Point) {
        self.pieces[index].position = to;
    }

    pub(crate) fn promote(&mut self, index: usize) {
        self.pieces[index].rank = Rank::King;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for x in 0..N {
            write!(f, "{x} ")?;
        }
        writeln!(f)?;
        for y in 0..N {
            write!(f, "{y} ")?;
            for x in 0..N {
                let ch = match self.piece_at((x, y)) {
                    Some(i) => self.pieces[i].glyph(),
                    None => GLYPH_EMPTY,
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
