//! Checkers-Rust: a rules engine for 8x8 checkers.
//!
//! The engine keeps the board, validates simple moves and captures
//! (including multi-jump sequences and promotion), and decides when a game
//! is over. Rendering and input devices are left to a front end, which
//! feeds clicked cells in and reads snapshots out.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions and engine limits
//! - [`config`] - Rule toggles
//! - [`board`] - Pieces, colors, and the board arena
//! - [`moves`] - Move and capture validation
//! - [`game`] - Turn engine, termination check, snapshots
//! - [`selection`] - Click-driven selection state machine
//! - [`protocol`] - Text protocol for external front ends
//! - [`playout`] - Seeded random games
//!
//! ## Example
//!
//! ```
//! use checkers_rust::board::Color;
//! use checkers_rust::game::{GameResult, GameState};
//! use checkers_rust::selection::ClickOutcome;
//!
//! // Light picks first and fills rows 0-2
//! let mut game = GameState::new(Color::Light, Default::default());
//!
//! // Select a man on the third row, then step it forward
//! assert_eq!(game.click((1, 2)), ClickOutcome::Selected(8));
//! assert!(matches!(game.click((0, 3)), ClickOutcome::Moved { .. }));
//!
//! assert_eq!(game.side_to_move(), Color::Dark);
//! assert_eq!(game.result(), GameResult::InProgress);
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod game;
pub mod moves;
pub mod playout;
pub mod protocol;
pub mod selection;
