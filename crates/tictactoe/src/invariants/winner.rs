//! The winner flag agrees with the recorded combination.

use super::Invariant;
use crate::Game;
use crate::rules::line_owner;

/// Invariant: `has_winner` is set exactly when a non-empty winning
/// combination is recorded and one mark fills it.
pub struct WinnerMatchesCombination;

impl Invariant<Game> for WinnerMatchesCombination {
    fn holds(game: &Game) -> bool {
        let combination = game.winning_combination();
        if game.has_winner() {
            !combination.is_empty() && line_owner(game.board(), combination).is_some()
        } else {
            combination.is_empty()
        }
    }

    fn description() -> &'static str {
        "Winner flag matches a fully claimed winning combination"
    }
}
