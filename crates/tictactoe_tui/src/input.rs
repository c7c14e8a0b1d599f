//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe::Cell;

/// Moves the cursor one cell in the arrow's direction, stopping at the
/// board edge.
pub fn move_cursor(cursor: Cell, key: KeyCode, size: usize) -> Cell {
    let last = size.saturating_sub(1);
    match key {
        KeyCode::Up => Cell::new(cursor.row.saturating_sub(1), cursor.col),
        KeyCode::Down => Cell::new((cursor.row + 1).min(last), cursor.col),
        KeyCode::Left => Cell::new(cursor.row, cursor.col.saturating_sub(1)),
        KeyCode::Right => Cell::new(cursor.row, (cursor.col + 1).min(last)),
        _ => cursor,
    }
}
