//! Application state and event handling.

use crate::input::move_cursor;
use crate::ui;
use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tictactoe::{Cell, Game, PlayerColor, Turn};
use tracing::{debug, instrument};

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Status line text and its color; `None` uses the terminal default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    /// Message shown under the board.
    pub message: String,
    /// Color of the message.
    pub color: Option<PlayerColor>,
}

impl Status {
    fn plain(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            color: None,
        }
    }

    fn ready() -> Self {
        Self::plain("Ready?")
    }
}

/// Main application state.
pub struct App {
    game: Game,
    cursor: Cell,
    status: Status,
}

impl App {
    /// Creates an application around a freshly built game.
    pub fn new(game: Game) -> Self {
        Self {
            game,
            cursor: Cell::new(0, 0),
            status: Status::ready(),
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the cursor cell.
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// Gets the current status line.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Plays the current player's mark at `cell`.
    ///
    /// A rejected move (occupied cell, finished game) is ignored and the
    /// status line stays as it was. Returns whether the move was played.
    #[instrument(skip(self), fields(cell = %cell))]
    pub fn play_at(&mut self, cell: Cell) -> bool {
        match self.game.play(cell.row, cell.col) {
            Ok(Turn::Tied) => {
                self.status = Status {
                    message: "It's a tie!".to_string(),
                    color: Some(PlayerColor::Maroon),
                };
            }
            Ok(Turn::Won { player, .. }) => {
                self.status = Status {
                    message: format!("Player \"{}\" won!", player.label()),
                    color: Some(*player.color()),
                };
            }
            Ok(Turn::Continue { next }) => {
                self.status = Status::plain(format!("{}'s turn", next.label()));
            }
            Err(e) => {
                debug!(error = %e, "Ignoring move");
                return false;
            }
        }
        true
    }

    /// Plays at the cursor cell.
    pub fn play_cursor(&mut self) -> bool {
        self.play_at(self.cursor)
    }

    /// Starts a new game with the same players and board.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.cursor = Cell::new(0, 0);
        self.status = Status::ready();
    }

    /// Handles one terminal event.
    ///
    /// `area` is the full terminal area, used to map mouse clicks onto
    /// board cells the same way the board is drawn. Moves are refused
    /// while the board is too large to show in `area`.
    pub fn handle_event(&mut self, event: Event, area: Rect) -> Control {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
                KeyCode::Char('r') => self.restart(),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if ui::board_fits(area, self.game.board_size()) {
                        self.play_cursor();
                    } else {
                        debug!(cursor = %self.cursor, "Board not on screen; move ignored");
                        self.status = Status::plain("Enlarge the terminal to play");
                    }
                }
                code => {
                    self.cursor = move_cursor(self.cursor, code, self.game.board_size());
                }
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let point = Position::new(mouse.column, mouse.row);
                if let Some(cell) = ui::cell_at(area, self.game.board_size(), point) {
                    self.cursor = cell;
                    self.play_at(cell);
                }
            }
            _ => {}
        }
        Control::Continue
    }
}
