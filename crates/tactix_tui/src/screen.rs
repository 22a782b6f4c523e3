//! Screen trait and transition type for the tactix screen state machine.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use tactix_engine::{BoardSize, Mode};

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`Controller`](crate::controller::Controller) state machine.
#[derive(Debug, Clone)]
pub enum ScreenTransition {
    /// Stay on the current screen - no state change.
    Stay,
    /// Navigate to mode selection for the chosen board size.
    GoToModeSelect {
        /// The board size picked on the size screen.
        size: BoardSize,
    },
    /// Start a game with the chosen size and mode.
    GoToGame {
        /// Board size for the new game.
        size: BoardSize,
        /// Opponent mode for the new game.
        mode: Mode,
    },
    /// Return to the size selection screen, discarding size and mode.
    GoToSizeSelect,
    /// Exit the application cleanly.
    Quit,
}

/// Trait implemented by each screen in the state machine.
///
/// Each screen owns its own state, renders its UI, and handles key events.
/// The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition;
}
