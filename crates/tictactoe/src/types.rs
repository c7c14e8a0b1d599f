//! Core domain types for tic-tac-toe.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Board size used when no other size is configured.
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Single-character label a player stamps onto the cells they occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mark(char);

impl Mark {
    /// Creates a mark from a character.
    pub const fn new(label: char) -> Self {
        Self(label)
    }

    /// Returns the underlying character.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display color associated with a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerColor {
    /// Black.
    Black,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Blue.
    Blue,
    /// Purple.
    Purple,
    /// Cyan.
    Cyan,
    /// White.
    White,
    /// Maroon.
    Maroon,
}

/// A participant in the game: a mark plus the color it is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct Player {
    /// Mark stamped on every cell this player occupies.
    label: Mark,
    /// Color the mark is drawn in.
    color: PlayerColor,
}

impl Player {
    /// The classic pair: X in purple moves first, O in green second.
    pub fn defaults() -> Vec<Player> {
        vec![
            Player::new(Mark::new('X'), PlayerColor::Purple),
            Player::new(Mark::new('O'), PlayerColor::Green),
        ]
    }
}

/// A (row, column) coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Cell {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Contents of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// No move has been played here yet.
    #[default]
    Empty,
    /// Cell occupied by the player carrying this mark.
    Occupied(Mark),
}

impl Square {
    /// Checks if no mark has been placed.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }

    /// Returns the occupying mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Square::Empty => write!(f, " "),
            Square::Occupied(mark) => write!(f, "{}", mark),
        }
    }
}

/// A cell coordinate together with what occupies it.
///
/// The board stores one `Move` per cell; an unplayed cell holds
/// [`Square::Empty`]. Candidate moves built by a caller carry the
/// current player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Target cell.
    pub cell: Cell,
    /// Mark placed on the cell.
    pub square: Square,
}

impl Move {
    /// Creates a move placing `mark` at `(row, col)`.
    pub fn new(row: usize, col: usize, mark: Mark) -> Self {
        Self {
            cell: Cell::new(row, col),
            square: Square::Occupied(mark),
        }
    }

    /// Creates the unplayed placeholder for `(row, col)`.
    pub fn empty(row: usize, col: usize) -> Self {
        Self {
            cell: Cell::new(row, col),
            square: Square::Empty,
        }
    }

    /// Returns the target row.
    pub fn row(&self) -> usize {
        self.cell.row
    }

    /// Returns the target column.
    pub fn col(&self) -> usize {
        self.cell.col
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.square {
            Square::Empty => write!(f, "empty -> {}", self.cell),
            Square::Occupied(mark) => write!(f, "{} -> {}", mark, self.cell),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_defaults_are_x_then_o() {
        let players = Player::defaults();
        assert_eq!(players.len(), 2);
        assert_eq!(*players[0].label(), Mark::new('X'));
        assert_eq!(*players[0].color(), PlayerColor::Purple);
        assert_eq!(*players[1].label(), Mark::new('O'));
        assert_eq!(*players[1].color(), PlayerColor::Green);
    }

    #[test]
    fn test_color_parses_lowercase_names() {
        assert_eq!(PlayerColor::from_str("maroon"), Ok(PlayerColor::Maroon));
        assert_eq!(PlayerColor::Purple.to_string(), "purple");
        assert!(PlayerColor::from_str("chartreuse").is_err());
    }

    #[test]
    fn test_player_serializes_with_plain_label() {
        let player = Player::new(Mark::new('X'), PlayerColor::Purple);
        let json = serde_json::to_value(player).unwrap();
        assert_eq!(json, serde_json::json!({ "label": "X", "color": "purple" }));
    }

    #[test]
    fn test_empty_move_has_no_mark() {
        let mv = Move::empty(1, 2);
        assert_eq!(mv.row(), 1);
        assert_eq!(mv.col(), 2);
        assert!(mv.square.is_empty());
        assert_eq!(mv.square.mark(), None);
    }
}
