//! Full-board detection.

use crate::board::Board;
use tracing::instrument;

/// Checks if every cell holds a mark.
///
/// A full board with no winner is a tie.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.moves().all(|mv| !mv.square.is_empty())
}
