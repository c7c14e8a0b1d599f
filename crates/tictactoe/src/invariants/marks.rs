//! Every occupied cell belongs to a known player.

use super::Invariant;
use crate::Game;

/// Invariant: each mark on the board is the label of one of the players.
pub struct MarksBelongToPlayers;

impl Invariant<Game> for MarksBelongToPlayers {
    fn holds(game: &Game) -> bool {
        game.board()
            .moves()
            .filter_map(|mv| mv.square.mark())
            .all(|mark| game.players().iter().any(|p| *p.label() == mark))
    }

    fn description() -> &'static str {
        "Every mark on the board belongs to a player"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Move};

    #[test]
    fn test_new_game_holds() {
        assert!(MarksBelongToPlayers::holds(&Game::default()));
    }

    #[test]
    fn test_player_marks_hold() {
        let mut game = Game::default();
        game.play(1, 1).unwrap();
        game.play(0, 0).unwrap();
        assert!(MarksBelongToPlayers::holds(&game));
    }

    #[test]
    fn test_foreign_mark_violates() {
        let mut game = Game::default();
        game.board.set(Move::new(1, 1, Mark::new('Q'))).unwrap();
        assert!(!MarksBelongToPlayers::holds(&game));
    }
}
