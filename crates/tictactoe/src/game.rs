//! Rules engine for tic-tac-toe on a square board.

use crate::board::Board;
use crate::combinations::{Combination, winning_combinations};
use crate::error::{MoveError, SetupError};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::rules::{find_winning_combination, is_full};
use crate::types::{Cell, DEFAULT_BOARD_SIZE, Move, Player};
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

/// Outcome of one [`Game::play`] transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// Game continues with `next` to move.
    Continue {
        /// Player whose mark goes on the next move.
        next: Player,
    },
    /// The move completed a line.
    Won {
        /// Player who completed the line.
        player: Player,
        /// Cells of the completed line.
        combination: Combination,
    },
    /// The board filled up with no winner.
    Tied,
}

/// Tic-tac-toe game engine.
///
/// Owns the board, the precomputed winning lines and the turn order.
/// Players take turns in sequence order and the sequence repeats
/// indefinitely. The engine only gates moves on occupancy and on whether
/// a winner exists; stamping a move with the right player's mark is the
/// caller's job (or use [`Game::play`], which does it).
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) players: Vec<Player>,
    pub(crate) current: usize,
    pub(crate) board: Board,
    pub(crate) combinations: Vec<Combination>,
    pub(crate) has_winner: bool,
    pub(crate) winning_combination: Combination,
}

impl Game {
    /// Creates a game for `players` on a `board_size x board_size` board.
    ///
    /// The first player in the sequence moves first.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] if `players` is empty, if `board_size` is
    /// zero, or if two players share a mark.
    #[instrument(skip(players), fields(players = players.len()))]
    pub fn new(players: Vec<Player>, board_size: usize) -> Result<Self, SetupError> {
        if players.is_empty() {
            return Err(SetupError::NoPlayers);
        }
        if board_size < 1 {
            return Err(SetupError::BoardTooSmall(board_size));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = players.iter().find(|p| !seen.insert(*p.label())) {
            return Err(SetupError::DuplicateMark(*dup.label()));
        }

        Ok(Self::build(players, board_size))
    }

    fn build(players: Vec<Player>, board_size: usize) -> Self {
        let mut game = Self {
            players,
            current: 0,
            board: Board::new(board_size),
            combinations: Vec::new(),
            has_winner: false,
            winning_combination: Vec::new(),
        };
        game.setup_board();
        game
    }

    /// Clears the grid and recomputes the winning combinations.
    #[instrument(skip(self), fields(size = self.board.size()))]
    pub fn setup_board(&mut self) {
        self.board = Board::new(self.board.size());
        self.combinations = winning_combinations(&self.board);
        debug!(lines = self.combinations.len(), "Board set up");
    }

    /// Starts a new playthrough with the same players and board size.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.setup_board();
        self.has_winner = false;
        self.winning_combination.clear();
        self.current = 0;
        info!("Game reset");
    }

    /// Explains why `mv` cannot be played, if it cannot.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once a winner exists
    /// - [`MoveError::OutOfBounds`] if the cell is off the board
    /// - [`MoveError::Occupied`] if the cell already holds a mark
    #[instrument(skip(self), fields(cell = %mv.cell))]
    pub fn check_move(&self, mv: &Move) -> Result<(), MoveError> {
        if self.has_winner {
            return Err(MoveError::GameOver);
        }
        if !self.board.contains(mv.cell) {
            return Err(MoveError::OutOfBounds {
                cell: mv.cell,
                size: self.board.size(),
            });
        }
        if !self.board.is_empty(mv.cell) {
            return Err(MoveError::Occupied(mv.cell));
        }
        Ok(())
    }

    /// Returns true if the target cell is free and no one has won yet.
    ///
    /// The mark carried by `mv` is not compared against the current
    /// player.
    pub fn is_valid(&self, mv: &Move) -> bool {
        self.check_move(mv).is_ok()
    }

    /// Writes `mv` onto the board and checks for a win.
    ///
    /// Combinations are scanned in enumeration order and the first one
    /// held entirely by a single mark is recorded.
    ///
    /// The caller must check [`Game::is_valid`] first; `apply` does not
    /// re-validate and will overwrite an occupied cell. A move addressed
    /// off the board is logged and dropped. A mark that belongs to no
    /// player is written anyway and reported as an invariant violation.
    #[instrument(skip_all, fields(mv = %mv))]
    pub fn apply(&mut self, mv: Move) {
        if let Err(e) = self.board.set(mv) {
            warn!(error = %e, "Dropping move addressed off the board");
            return;
        }
        debug!(board = %self.board, "Move applied");

        if let Some(combination) = find_winning_combination(&self.board, &self.combinations) {
            info!(?combination, "Winning combination found");
            self.has_winner = true;
            self.winning_combination = combination.clone();
        }

        if let Err(violations) = GameInvariants::check_all(self) {
            warn!(count = violations.len(), "Board state breaks engine invariants");
        }
    }

    /// Returns true once a winning combination has been found.
    pub fn has_winner(&self) -> bool {
        self.has_winner
    }

    /// Cells of the winning line; empty until someone wins.
    pub fn winning_combination(&self) -> &[Cell] {
        &self.winning_combination
    }

    /// Player whose mark fills the winning line.
    pub fn winner(&self) -> Option<&Player> {
        let first = self.winning_combination.first()?;
        let mark = self.board.square(*first)?.mark()?;
        self.players.iter().find(|p| *p.label() == mark)
    }

    /// Returns true if the board is full and nobody has won.
    #[instrument(skip(self))]
    pub fn is_tied(&self) -> bool {
        !self.has_winner && is_full(&self.board)
    }

    /// Returns true once the game has been won or tied.
    pub fn is_over(&self) -> bool {
        self.has_winner || self.is_tied()
    }

    /// Hands the turn to the next player in sequence, wrapping around.
    ///
    /// Once the game is won or tied this is a no-op.
    #[instrument(skip(self), fields(from = %self.current_player().label()))]
    pub fn advance_turn(&mut self) {
        if self.is_over() {
            debug!("Game is over; turn not advanced");
            return;
        }
        self.current = (self.current + 1) % self.players.len();
    }

    /// Stamps the current player's mark on `(row, col)` and runs the
    /// whole move transaction.
    ///
    /// Validates, applies, then reports a tie, a win, or hands the turn
    /// to the next player.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] from [`Game::check_move`]; the game is
    /// left untouched.
    #[instrument(skip(self), fields(player = %self.current_player().label()))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<Turn, MoveError> {
        let player = *self.current_player();
        let mv = Move::new(row, col, *player.label());
        self.check_move(&mv)?;
        self.apply(mv);

        if self.is_tied() {
            info!("Game tied");
            return Ok(Turn::Tied);
        }
        if self.has_winner {
            info!(winner = %player.label(), "Game won");
            return Ok(Turn::Won {
                player,
                combination: self.winning_combination.clone(),
            });
        }

        self.advance_turn();
        Ok(Turn::Continue {
            next: *self.current_player(),
        })
    }

    /// Player whose mark goes on the next move.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Board side length.
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// All winning lines, in enumeration order.
    pub fn winning_combinations(&self) -> &[Combination] {
        &self.combinations
    }
}

impl Default for Game {
    /// X (purple) and O (green) on a 3x3 board.
    fn default() -> Self {
        Self::build(Player::defaults(), DEFAULT_BOARD_SIZE)
    }
}
