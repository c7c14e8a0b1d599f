//! Board slots carry their own coordinates.

use super::Invariant;
use crate::Game;
use crate::types::Cell;

/// Invariant: the move stored at grid position (r, c) is addressed to (r, c).
pub struct CoordinatesMatchGrid;

impl Invariant<Game> for CoordinatesMatchGrid {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        board.rows().count() == board.size()
            && board.rows().enumerate().all(|(row, moves)| {
                moves.len() == board.size()
                    && moves
                        .iter()
                        .enumerate()
                        .all(|(col, mv)| mv.cell == Cell::new(row, col))
            })
    }

    fn description() -> &'static str {
        "Each board slot holds a move addressed to that slot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Move, Player};

    #[test]
    fn test_fresh_board_holds() {
        for size in 1..=5 {
            let game = Game::new(Player::defaults(), size).unwrap();
            assert!(CoordinatesMatchGrid::holds(&game));
        }
    }

    #[test]
    fn test_misplaced_move_violates() {
        let mut game = Game::default();
        game.board.moves[1][1] = Move::new(0, 2, Mark::new('X'));
        assert!(!CoordinatesMatchGrid::holds(&game));
    }
}
