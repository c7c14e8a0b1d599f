//! Square grid of moves.

use crate::error::MoveError;
use crate::types::{Cell, Move, Square};
use serde::{Deserialize, Serialize};

/// `size x size` grid, one [`Move`] per cell.
///
/// Every slot carries its own coordinates, so a row of the grid is also
/// the list of cells making up that row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    pub(crate) moves: Vec<Vec<Move>>,
}

impl Board {
    /// Creates an empty board with coordinates filled in.
    pub fn new(size: usize) -> Self {
        let moves = (0..size)
            .map(|row| (0..size).map(|col| Move::empty(row, col)).collect())
            .collect();
        Self { size, moves }
    }

    /// Returns the side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Checks whether `cell` lies on the board.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// Gets the move stored at `cell`.
    pub fn get(&self, cell: Cell) -> Option<&Move> {
        self.moves.get(cell.row)?.get(cell.col)
    }

    /// Gets the square at `cell`.
    pub fn square(&self, cell: Cell) -> Option<Square> {
        self.get(cell).map(|mv| mv.square)
    }

    /// Checks if the cell exists and holds no mark.
    pub fn is_empty(&self, cell: Cell) -> bool {
        matches!(self.square(cell), Some(Square::Empty))
    }

    /// Overwrites the slot addressed by `mv.cell` with `mv`.
    pub(crate) fn set(&mut self, mv: Move) -> Result<(), MoveError> {
        let size = self.size;
        let slot = self
            .moves
            .get_mut(mv.cell.row)
            .and_then(|row| row.get_mut(mv.cell.col))
            .ok_or(MoveError::OutOfBounds {
                cell: mv.cell,
                size,
            })?;
        *slot = mv;
        Ok(())
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Move]> {
        self.moves.iter().map(Vec::as_slice)
    }

    /// Iterates over every slot in row-major order.
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter().flatten()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let separator = vec!["-"; self.size].join("+");
        for (idx, row) in self.rows().enumerate() {
            if idx > 0 {
                writeln!(f)?;
                writeln!(f, "{}", separator)?;
            }
            let line = row
                .iter()
                .map(|mv| mv.square.to_string())
                .collect::<Vec<_>>()
                .join("|");
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_new_board_is_empty_with_coordinates() {
        let board = Board::new(3);
        assert_eq!(board.moves().count(), 9);
        for (row_idx, row) in board.rows().enumerate() {
            for (col_idx, mv) in row.iter().enumerate() {
                assert_eq!(mv.cell, Cell::new(row_idx, col_idx));
                assert_eq!(mv.square, Square::Empty);
            }
        }
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new(3);
        board.set(Move::new(1, 2, Mark::new('X'))).unwrap();
        assert_eq!(
            board.square(Cell::new(1, 2)),
            Some(Square::Occupied(Mark::new('X')))
        );
        assert!(!board.is_empty(Cell::new(1, 2)));
        assert!(board.is_empty(Cell::new(0, 0)));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut board = Board::new(3);
        let result = board.set(Move::new(3, 0, Mark::new('X')));
        assert!(matches!(result, Err(MoveError::OutOfBounds { size: 3, .. })));
        assert!(!board.contains(Cell::new(0, 3)));
        assert_eq!(board.square(Cell::new(0, 3)), None);
    }

    #[test]
    fn test_display_layout() {
        let mut board = Board::new(2);
        board.set(Move::new(0, 0, Mark::new('X'))).unwrap();
        board.set(Move::new(1, 1, Mark::new('O'))).unwrap();
        assert_eq!(board.to_string(), "X| \n-+-\n |O");
    }
}
