//! Mode selection screen - choose the opponent.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tactix_engine::{BoardSize, Mode};
use tracing::{debug, info, instrument};

use crate::screen::{Screen, ScreenTransition};

/// State for the mode selection screen.
#[derive(Debug, Getters)]
pub struct ModeSelectScreen {
    size: BoardSize,
    #[getter(skip)]
    list_state: ListState,
}

impl ModeSelectScreen {
    /// Creates a new mode selection screen for the chosen board size.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        debug!(size = size.dim(), "Initializing ModeSelectScreen");
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { size, list_state }
    }

    /// Moves selection up.
    fn select_previous(&mut self) {
        let count = Mode::ALL.len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Moves selection down.
    fn select_next(&mut self) {
        let count = Mode::ALL.len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Returns the currently selected mode.
    fn selected_mode(&self) -> Mode {
        let options = Mode::ALL;
        let idx = self.list_state.selected().unwrap_or(0);
        options[idx.min(options.len() - 1)]
    }
}

impl Screen for ModeSelectScreen {
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new(format!("Select Game Mode — {}", self.size.label()))
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = Mode::ALL
            .iter()
            .map(|mode| ListItem::new(mode.label()))
            .collect();

        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Opponent"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state.clone();
        frame.render_stateful_widget(menu, chunks[1], &mut list_state);

        let help = Paragraph::new("↑↓: Navigate | Enter: Select | Esc: Back | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let mode = self.selected_mode();
                info!(mode = mode.code(), "Game mode selected");
                ScreenTransition::GoToGame {
                    size: self.size,
                    mode,
                }
            }
            KeyCode::Esc => {
                info!("Returning to size selection");
                ScreenTransition::GoToSizeSelect
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
