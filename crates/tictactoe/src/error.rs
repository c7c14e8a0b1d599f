//! Error types for game setup and move validation.

use crate::types::{Cell, Mark};

/// Reason a move cannot be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinate lies outside the board.
    #[display("Cell {cell} is outside the {size}x{size} board")]
    OutOfBounds {
        /// Requested cell.
        cell: Cell,
        /// Board side length.
        size: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    Occupied(Cell),

    /// A winner has been declared; the board is frozen.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Reason a game cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SetupError {
    /// The player sequence is empty.
    #[display("At least one player is required")]
    NoPlayers,

    /// The board side length is zero.
    #[display("Board size must be at least 1, got {_0}")]
    BoardTooSmall(usize),

    /// Two players share a mark, so cell ownership would be ambiguous.
    #[display("Mark {_0} is used by more than one player")]
    DuplicateMark(Mark),
}

impl std::error::Error for SetupError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_messages() {
        let err = MoveError::OutOfBounds {
            cell: Cell::new(3, 0),
            size: 3,
        };
        assert_eq!(err.to_string(), "Cell (3, 0) is outside the 3x3 board");
        assert_eq!(
            MoveError::Occupied(Cell::new(0, 1)).to_string(),
            "Cell (0, 1) is already occupied"
        );
    }

    #[test]
    fn test_setup_error_messages() {
        assert_eq!(
            SetupError::BoardTooSmall(0).to_string(),
            "Board size must be at least 1, got 0"
        );
        assert_eq!(
            SetupError::DuplicateMark(Mark::new('X')).to_string(),
            "Mark X is used by more than one player"
        );
    }
}
