//! Winning line enumeration.

use crate::board::Board;
use crate::types::Cell;
use tracing::instrument;

/// Ordered cells forming one winning line.
pub type Combination = Vec<Cell>;

/// Derives every winning line from the board's own coordinates.
///
/// Lines come out in a fixed order: rows top to bottom, columns left to
/// right, the primary diagonal, then the secondary diagonal. A board of
/// side `n` always yields `2n + 2` lines.
#[instrument(skip(board), fields(size = board.size()))]
pub fn winning_combinations(board: &Board) -> Vec<Combination> {
    let rows: Vec<Combination> = board
        .rows()
        .map(|row| row.iter().map(|mv| mv.cell).collect())
        .collect();

    let columns: Vec<Combination> = (0..board.size())
        .map(|col| rows.iter().map(|row| row[col]).collect())
        .collect();

    let primary: Combination = rows.iter().enumerate().map(|(i, row)| row[i]).collect();
    let secondary: Combination = columns
        .iter()
        .rev()
        .enumerate()
        .map(|(j, col)| col[j])
        .collect();

    rows.into_iter()
        .chain(columns)
        .chain([primary, secondary])
        .collect()
}
