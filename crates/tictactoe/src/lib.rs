//! Tic-tac-toe rules engine.
//!
//! A small, deterministic state machine: a square board of any size, the
//! winning lines derived from it, move validation, win/tie detection and
//! a repeating turn order over any number of players.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Game, Turn};
//!
//! let mut game = Game::default();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
//!     game.play(row, col).unwrap();
//! }
//! let turn = game.play(0, 2).unwrap();
//! assert!(matches!(turn, Turn::Won { .. }));
//! assert_eq!(game.winning_combination().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod combinations;
mod error;
mod game;
pub mod invariants;
pub mod rules;
mod types;

pub use board::Board;
pub use combinations::{Combination, winning_combinations};
pub use error::{MoveError, SetupError};
pub use game::{Game, Turn};
pub use types::{Cell, DEFAULT_BOARD_SIZE, Mark, Move, Player, PlayerColor, Square};
