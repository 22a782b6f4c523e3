//! Board grid rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use tactix_engine::{Board, Cell, Mark};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Renders the board as a centered grid with separator lines.
///
/// The cell under `cursor` is drawn highlighted. Empty cells show their
/// 1-based number so the 3x3 digit shortcuts line up with what is on
/// screen.
pub fn render_board(frame: &mut Frame, area: Rect, board: &Board, cursor: usize) {
    let dim = board.size().dim() as u16;
    let width = dim * CELL_WIDTH + (dim - 1);
    let height = dim * CELL_HEIGHT + (dim - 1);
    let board_area = center_rect(area, width, height);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(grid_constraints(dim, CELL_HEIGHT))
        .split(board_area);

    for row in 0..dim {
        // Even chunks are cell rows, odd chunks are separator lines.
        render_row(frame, rows[(row * 2) as usize], board, row, cursor);
        if row < dim - 1 {
            render_separator(frame, rows[(row * 2 + 1) as usize]);
        }
    }
}

fn grid_constraints(dim: u16, cell_extent: u16) -> Vec<Constraint> {
    let mut constraints = Vec::with_capacity((dim * 2 - 1) as usize);
    for i in 0..dim {
        constraints.push(Constraint::Length(cell_extent));
        if i < dim - 1 {
            constraints.push(Constraint::Length(1));
        }
    }
    constraints
}

fn render_row(frame: &mut Frame, area: Rect, board: &Board, row: u16, cursor: usize) {
    let dim = board.size().dim() as u16;
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(grid_constraints(dim, CELL_WIDTH))
        .split(area);

    for col in 0..dim {
        let pos = (row * dim + col) as usize;
        render_cell(frame, cols[(col * 2) as usize], board, pos, cursor);
        if col < dim - 1 {
            render_vertical_sep(frame, cols[(col * 2 + 1) as usize]);
        }
    }
}

fn render_cell(frame: &mut Frame, area: Rect, board: &Board, pos: usize, cursor: usize) {
    let (text, mut style) = match board.get(pos) {
        Some(Cell::Taken(Mark::X)) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Cell::Taken(Mark::O)) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        _ => (
            format!("{}", pos + 1),
            Style::default().fg(Color::DarkGray),
        ),
    };
    if pos == cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Pad to the cell height so the highlight covers the whole box.
    let text = format!("\n{text}");
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn render_vertical_sep(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
