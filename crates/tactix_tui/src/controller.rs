//! Controller - the state machine driving the multi-screen TUI.

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use tactix_engine::{BoardSize, ComputerPlayer, Mode};
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument};

use crate::cli::Cli;
use crate::screen::{Screen, ScreenTransition};
use crate::screens::{GameScreen, ModeSelectScreen, SizeSelectScreen};

/// Active screen in the state machine.
#[derive(Debug)]
enum ActiveScreen {
    SizeSelect(SizeSelectScreen),
    ModeSelect(ModeSelectScreen),
    Game(GameScreen),
}

/// Controller that drives the screen state machine.
///
/// Call [`Controller::run`] to start the event loop.
#[derive(Debug)]
pub struct Controller {
    size: Option<BoardSize>,
    mode: Option<Mode>,
    seed: Option<u64>,
}

impl Controller {
    /// Creates a controller from the parsed command line.
    pub fn new(cli: &Cli) -> Self {
        Self {
            size: cli.size,
            mode: cli.mode,
            seed: cli.seed,
        }
    }

    /// Initial screen: CLI flags skip the menus they answer.
    fn initial_screen(&self) -> ActiveScreen {
        match (self.size, self.mode) {
            (Some(size), Some(mode)) => {
                ActiveScreen::Game(GameScreen::new(size, mode, self.computer()))
            }
            (Some(size), None) => ActiveScreen::ModeSelect(ModeSelectScreen::new(size)),
            _ => ActiveScreen::SizeSelect(SizeSelectScreen::new()),
        }
    }

    /// Builds the computer opponent for a new game.
    fn computer(&self) -> ComputerPlayer {
        match self.seed {
            Some(seed) => ComputerPlayer::seeded(seed),
            None => ComputerPlayer::new(),
        }
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting screen event loop");

        let mut screen = self.initial_screen();

        loop {
            terminal.draw(|frame| match &screen {
                ActiveScreen::SizeSelect(s) => s.render(frame),
                ActiveScreen::ModeSelect(s) => s.render(frame),
                ActiveScreen::Game(s) => s.render(frame),
            })?;

            // Poll for input with a short timeout to keep the loop responsive.
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                let transition = match &mut screen {
                    ActiveScreen::SizeSelect(s) => s.handle_key(key),
                    ActiveScreen::ModeSelect(s) => s.handle_key(key),
                    ActiveScreen::Game(s) => s.handle_key(key),
                };

                screen = match self.apply_transition(transition, screen) {
                    Some(next) => next,
                    None => {
                        info!("Quitting");
                        return Ok(());
                    }
                };
            }

            sleep(Duration::from_millis(10)).await;
        }
    }

    /// Applies a screen transition, returning the next screen or `None` to quit.
    #[instrument(skip(self, current))]
    fn apply_transition(
        &self,
        transition: ScreenTransition,
        current: ActiveScreen,
    ) -> Option<ActiveScreen> {
        debug!(transition = ?transition, "Applying screen transition");
        match transition {
            ScreenTransition::Stay => Some(current),

            ScreenTransition::GoToModeSelect { size } => {
                info!(size = size.dim(), "Navigating to mode select");
                Some(ActiveScreen::ModeSelect(ModeSelectScreen::new(size)))
            }

            ScreenTransition::GoToGame { size, mode } => {
                info!(size = size.dim(), mode = mode.code(), "Navigating to game");
                Some(ActiveScreen::Game(GameScreen::new(
                    size,
                    mode,
                    self.computer(),
                )))
            }

            ScreenTransition::GoToSizeSelect => {
                info!("Navigating to size select");
                Some(ActiveScreen::SizeSelect(SizeSelectScreen::new()))
            }

            ScreenTransition::Quit => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(size: Option<BoardSize>, mode: Option<Mode>) -> Controller {
        Controller {
            size,
            mode,
            seed: Some(1),
        }
    }

    #[test]
    fn test_initial_screen_follows_cli_flags() {
        assert!(matches!(
            controller(None, None).initial_screen(),
            ActiveScreen::SizeSelect(_)
        ));
        assert!(matches!(
            controller(Some(BoardSize::Four), None).initial_screen(),
            ActiveScreen::ModeSelect(_)
        ));
        assert!(matches!(
            controller(Some(BoardSize::Three), Some(Mode::PvC)).initial_screen(),
            ActiveScreen::Game(_)
        ));
    }

    #[test]
    fn test_mode_flag_alone_does_not_skip_size_menu() {
        assert!(matches!(
            controller(None, Some(Mode::PvP)).initial_screen(),
            ActiveScreen::SizeSelect(_)
        ));
    }

    #[test]
    fn test_transitions_walk_the_screen_flow() {
        let c = controller(None, None);
        let screen = ActiveScreen::SizeSelect(SizeSelectScreen::new());

        let screen = c
            .apply_transition(
                ScreenTransition::GoToModeSelect {
                    size: BoardSize::Three,
                },
                screen,
            )
            .unwrap();
        assert!(matches!(screen, ActiveScreen::ModeSelect(_)));

        let screen = c
            .apply_transition(
                ScreenTransition::GoToGame {
                    size: BoardSize::Three,
                    mode: Mode::PvP,
                },
                screen,
            )
            .unwrap();
        assert!(matches!(screen, ActiveScreen::Game(_)));

        let screen = c
            .apply_transition(ScreenTransition::GoToSizeSelect, screen)
            .unwrap();
        assert!(matches!(screen, ActiveScreen::SizeSelect(_)));

        assert!(c.apply_transition(ScreenTransition::Quit, screen).is_none());
    }
}
