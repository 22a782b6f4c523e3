//! Game screen - the active board, turn indicator, and result line.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tactix_engine::{BoardSize, ComputerPlayer, GameState, Mark, Mode, Outcome};
use tracing::{debug, info, instrument, warn};

use crate::screen::{Screen, ScreenTransition};
use crate::ui;

/// State for the game screen.
#[derive(Debug, Getters)]
pub struct GameScreen {
    mode: Mode,
    state: GameState,
    cursor: usize,
    #[getter(skip)]
    computer: ComputerPlayer,
}

impl GameScreen {
    /// Creates a new game screen with a fresh game.
    #[instrument(skip(computer))]
    pub fn new(size: BoardSize, mode: Mode, computer: ComputerPlayer) -> Self {
        info!(size = size.dim(), mode = mode.code(), "Starting new game");
        Self {
            mode,
            state: GameState::new(size),
            cursor: 0,
            computer,
        }
    }

    /// Moves the cursor by one cell, clamped to the grid.
    fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let dim = self.state.size().dim() as isize;
        let row = (self.cursor as isize / dim + d_row).clamp(0, dim - 1);
        let col = (self.cursor as isize % dim + d_col).clamp(0, dim - 1);
        self.cursor = (row * dim + col) as usize;
    }

    /// Attempts a human move at `index`.
    ///
    /// Rejections are logged and otherwise ignored, so pressing an occupied
    /// cell or a cell after the game ended does nothing. In PvC the human
    /// only drives X; an accepted move hands the turn to the computer.
    #[instrument(skip(self))]
    fn try_move(&mut self, index: usize) {
        if self.mode == Mode::PvC && self.state.to_move() == Mark::O {
            return;
        }
        match self.state.apply_move(index) {
            Ok(next) => {
                debug!(index, "Move accepted");
                self.state = next;
                if self.mode == Mode::PvC {
                    self.computer_turn();
                }
            }
            Err(e) => {
                debug!(index, error = %e, "Move ignored");
            }
        }
    }

    /// Plays the computer's move if the game is still on and it is O's turn.
    ///
    /// Called exactly once per accepted human move; never chains further.
    fn computer_turn(&mut self) {
        if self.state.outcome() != Outcome::InProgress || self.state.to_move() != Mark::O {
            return;
        }
        let Some(index) = self.computer.select_move(self.state.board()) else {
            return;
        };
        match self.state.apply_move(index) {
            Ok(next) => {
                info!(index, "Computer move");
                self.state = next;
            }
            Err(e) => {
                // select_move only offers empty cells, so this is a bug.
                warn!(index, error = %e, "Computer move rejected");
            }
        }
    }

    /// Starts the game over, keeping size and mode.
    fn reset(&mut self) {
        info!("Resetting game");
        self.state = self.state.reset();
        self.cursor = 0;
    }

    /// Status line under the board.
    fn status_text(&self) -> String {
        match self.state.outcome() {
            Outcome::Won(mark) => format!("Player {mark} wins!"),
            Outcome::Draw => "It's a draw".to_string(),
            Outcome::InProgress => format!("Player {}'s turn", self.state.to_move()),
        }
    }
}

impl Screen for GameScreen {
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(7),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new(format!(
            "tactix — {} — {}",
            self.state.size().label(),
            self.mode.label()
        ))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        ui::render_board(frame, chunks[1], self.state.board(), self.cursor);

        let status_style = match self.state.outcome() {
            Outcome::InProgress => Style::default().fg(Color::Green),
            _ => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        };
        let status = Paragraph::new(self.status_text())
            .style(status_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[2]);

        let help = Paragraph::new("←↑↓→: Move | Enter: Place | r: Reset | m: Main Menu | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.move_cursor(-1, 0);
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.move_cursor(1, 0);
                ScreenTransition::Stay
            }
            KeyCode::Left => {
                self.move_cursor(0, -1);
                ScreenTransition::Stay
            }
            KeyCode::Right => {
                self.move_cursor(0, 1);
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.try_move(self.cursor);
                ScreenTransition::Stay
            }
            // Digit shortcuts mirror the on-screen cell numbers of the 3x3
            // board; the 4x4 grid is cursor-only.
            KeyCode::Char(c @ '1'..='9') if self.state.size() == BoardSize::Three => {
                let index = c as usize - '1' as usize;
                self.cursor = index;
                self.try_move(index);
                ScreenTransition::Stay
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.reset();
                ScreenTransition::Stay
            }
            KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Esc => {
                info!("Returning to main menu");
                ScreenTransition::GoToSizeSelect
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
