//! Stateless UI rendering for the board.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tictactoe::{Cell, PlayerColor, Square};

/// Width of one board cell, borders included.
pub const CELL_WIDTH: u16 = 7;
/// Height of one board cell, borders included.
pub const CELL_HEIGHT: u16 = 3;

/// Terminal color used for an engine color.
pub fn color(color: PlayerColor) -> Color {
    match color {
        PlayerColor::Black => Color::Black,
        PlayerColor::Red => Color::Red,
        PlayerColor::Green => Color::Green,
        PlayerColor::Yellow => Color::Yellow,
        PlayerColor::Blue => Color::Blue,
        PlayerColor::Purple => Color::Rgb(128, 0, 128),
        PlayerColor::Cyan => Color::Cyan,
        PlayerColor::White => Color::White,
        PlayerColor::Maroon => Color::Rgb(128, 0, 0),
    }
}

/// Splits the terminal into title, board and status areas.
fn sections(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Board
            Constraint::Length(3), // Status
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Size of one cell when a `side x side` board is drawn in `board_area`.
///
/// Cells shrink from [`CELL_WIDTH`] x [`CELL_HEIGHT`] down to a single
/// character so the whole grid stays on screen. A zero dimension means
/// the board cannot be shown at all.
fn cell_size(board_area: Rect, side: u16) -> (u16, u16) {
    let width = board_area.width.checked_div(side).unwrap_or(0);
    let height = board_area.height.checked_div(side).unwrap_or(0);
    (width.min(CELL_WIDTH), height.min(CELL_HEIGHT))
}

/// Checks whether every cell of a `size x size` board gets at least one
/// character of `area`.
pub fn board_fits(area: Rect, size: usize) -> bool {
    let [_, board_area, _] = sections(area);
    let (width, height) = cell_size(board_area, side(size));
    width > 0 && height > 0
}

fn side(size: usize) -> u16 {
    u16::try_from(size).unwrap_or(u16::MAX)
}

/// Screen rectangle of every board cell, indexed `[row][col]`.
///
/// Rendering and mouse hit-testing both go through here, so a click
/// always lands on the cell drawn under the pointer. A board that does
/// not fit has no cells on screen.
pub fn cell_areas(area: Rect, size: usize) -> Vec<Vec<Rect>> {
    if !board_fits(area, size) {
        return Vec::new();
    }
    let [_, board_area, _] = sections(area);
    let side = side(size);
    let (width, height) = cell_size(board_area, side);
    let grid = center_rect(board_area, width * side, height * side);

    (0..side)
        .map(|row| {
            (0..side)
                .map(|col| Rect::new(grid.x + col * width, grid.y + row * height, width, height))
                .collect()
        })
        .collect()
}

/// Finds the board cell drawn under `point`.
pub fn cell_at(area: Rect, size: usize, point: Position) -> Option<Cell> {
    cell_areas(area, size)
        .iter()
        .enumerate()
        .find_map(|(row, rects)| {
            rects
                .iter()
                .position(|rect| rect.contains(point))
                .map(|col| Cell::new(row, col))
        })
}

/// Renders title, board and status line.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let [title_area, _, status_area] = sections(area);

    let title = Paragraph::new(vec![
        Line::from("Tic-Tac-Toe")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Line::from("arrows/click: select  enter/space: play  r: restart  q: quit")
            .style(Style::default().fg(Color::DarkGray)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    draw_board(frame, area, app);

    let status_style = match app.status().color {
        Some(c) => Style::default().fg(color(c)).add_modifier(Modifier::BOLD),
        None => Style::default(),
    };
    let status = Paragraph::new(app.status().message.as_str())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, status_area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let winning = game.winning_combination();

    if !board_fits(area, game.board_size()) {
        let [_, board_area, _] = sections(area);
        let size = game.board_size();
        let notice = Paragraph::new(format!("Enlarge the terminal to show the {size}x{size} board"))
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        frame.render_widget(notice, center_rect(board_area, board_area.width, 1));
        return;
    }

    for (row, rects) in cell_areas(area, game.board_size()).into_iter().enumerate() {
        for (col, rect) in rects.into_iter().enumerate() {
            let cell = Cell::new(row, col);
            let square = game.board().square(cell).unwrap_or_default();

            let mut style = match square {
                Square::Empty => Style::default().fg(Color::DarkGray),
                Square::Occupied(mark) => {
                    let player_color = game
                        .players()
                        .iter()
                        .find(|p| *p.label() == mark)
                        .map(|p| color(*p.color()))
                        .unwrap_or(Color::Reset);
                    Style::default().fg(player_color).add_modifier(Modifier::BOLD)
                }
            };
            if winning.contains(&cell) {
                style = style.bg(Color::DarkGray);
            }
            if cell == app.cursor() {
                style = style.add_modifier(Modifier::REVERSED);
            }

            let border = if winning.contains(&cell) {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let mut widget = Paragraph::new(square.to_string())
                .style(style)
                .alignment(Alignment::Center);
            // Borders only when there is room for the mark inside them.
            if rect.width >= 3 && rect.height >= 3 {
                widget = widget.block(Block::bordered().border_style(border));
            }
            frame.render_widget(widget, rect);
        }
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
