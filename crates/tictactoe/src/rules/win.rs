//! Win detection logic.

use crate::board::Board;
use crate::combinations::Combination;
use crate::types::{Cell, Mark, Square};
use std::collections::HashSet;
use tracing::instrument;

/// Returns the mark occupying every cell of `combination`.
///
/// The distinct squares along the line must collapse to exactly one,
/// and that one must not be [`Square::Empty`].
pub fn line_owner(board: &Board, combination: &[Cell]) -> Option<Mark> {
    let squares: HashSet<Square> = combination
        .iter()
        .filter_map(|cell| board.square(*cell))
        .collect();

    if squares.len() != 1 {
        return None;
    }
    squares.into_iter().next().and_then(Square::mark)
}

/// Finds the first fully claimed combination, in enumeration order.
#[instrument(skip_all)]
pub fn find_winning_combination<'a>(
    board: &Board,
    combinations: &'a [Combination],
) -> Option<&'a Combination> {
    combinations
        .iter()
        .find(|combination| line_owner(board, combination).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinations::winning_combinations;
    use crate::types::Move;

    fn board_with(size: usize, moves: &[(usize, usize, char)]) -> Board {
        let mut board = Board::new(size);
        for &(row, col, label) in moves {
            board.set(Move::new(row, col, Mark::new(label))).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new(3);
        let combos = winning_combinations(&board);
        assert_eq!(find_winning_combination(&board, &combos), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(3, &[(0, 0, 'X'), (0, 1, 'X'), (0, 2, 'X')]);
        let combos = winning_combinations(&board);
        let found = find_winning_combination(&board, &combos).unwrap();
        assert_eq!(found, &combos[0]);
        assert_eq!(line_owner(&board, found), Some(Mark::new('X')));
    }

    #[test]
    fn test_winner_secondary_diagonal() {
        let board = board_with(3, &[(0, 2, 'O'), (1, 1, 'O'), (2, 0, 'O')]);
        let combos = winning_combinations(&board);
        let found = find_winning_combination(&board, &combos).unwrap();
        assert_eq!(
            found,
            &vec![Cell::new(0, 2), Cell::new(1, 1), Cell::new(2, 0)]
        );
    }

    #[test]
    fn test_mixed_line_has_no_owner() {
        let board = board_with(3, &[(0, 0, 'X'), (0, 1, 'O'), (0, 2, 'X')]);
        let row: Vec<Cell> = (0..3).map(|c| Cell::new(0, c)).collect();
        assert_eq!(line_owner(&board, &row), None);
    }

    #[test]
    fn test_incomplete_line_has_no_owner() {
        let board = board_with(3, &[(0, 0, 'X'), (0, 1, 'X')]);
        let combos = winning_combinations(&board);
        assert_eq!(find_winning_combination(&board, &combos), None);
    }

    #[test]
    fn test_first_in_order_wins_when_lines_overlap() {
        // Row 0 and column 0 are both complete; rows are enumerated first.
        let board = board_with(
            3,
            &[(0, 0, 'X'), (0, 1, 'X'), (0, 2, 'X'), (1, 0, 'X'), (2, 0, 'X')],
        );
        let combos = winning_combinations(&board);
        assert_eq!(find_winning_combination(&board, &combos), Some(&combos[0]));
    }
}
