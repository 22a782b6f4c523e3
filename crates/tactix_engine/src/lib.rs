//! Pure game logic for tactix.
//!
//! Tic-tac-toe generalized to 3x3 and 4x4 boards. This crate owns board
//! state, turn state, win/draw detection, and the random computer opponent.
//! It performs no I/O and knows nothing about terminals - the `tactix_tui`
//! crate provides the presentation layer.
//!
//! # Example
//!
//! ```
//! use tactix_engine::{BoardSize, GameState, Mark, Outcome};
//!
//! let game = GameState::new(BoardSize::Three);
//! let game = game.apply_move(4)?; // X takes the center
//! assert_eq!(game.to_move(), Mark::O);
//! assert_eq!(game.outcome(), Outcome::InProgress);
//! # Ok::<(), tactix_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod computer;
mod error;
pub mod rules;
mod state;
mod types;

pub use computer::{ComputerPlayer, select_move};
pub use error::MoveError;
pub use state::GameState;
pub use types::{Board, BoardSize, Cell, Mark, Mode, Outcome};
