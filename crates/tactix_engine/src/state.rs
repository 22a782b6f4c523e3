//! Game state reducer.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::MoveError;
use crate::rules;
use crate::types::{Board, BoardSize, Cell, Mark, Outcome};

/// Complete state of one game.
///
/// Values are immutable: [`GameState::apply_move`] returns a fresh state
/// and leaves the receiver untouched, so callers replace their value
/// wholesale on each transition. This keeps rejected moves trivially
/// side-effect free and makes replay a matter of re-applying `history`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Mark to move next.
    to_move: Mark,
    /// Outcome of the board as of the last accepted move.
    outcome: Outcome,
    /// Indices played so far, in order.
    history: Vec<usize>,
}

impl GameState {
    /// Creates a fresh game on an empty board of the given size.
    ///
    /// X always moves first.
    pub fn new(size: BoardSize) -> Self {
        Self {
            board: Board::new(size),
            to_move: Mark::X,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.board.size()
    }

    /// Returns the mark that moves next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the indices played so far.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Applies the current player's mark at `index`, returning the next state.
    ///
    /// The outcome of the new board is recomputed before the state is
    /// returned, and the turn flips exactly once per accepted move - also
    /// on the winning move.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] if the game is over, the index is out of
    /// range, or the cell is occupied. The receiver is left unchanged
    /// either way.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn apply_move(&self, index: usize) -> Result<GameState, MoveError> {
        if self.outcome != Outcome::InProgress {
            return Err(MoveError::GameOver);
        }
        let cells = self.size().cell_count();
        if index >= cells {
            return Err(MoveError::OutOfBounds { index, cells });
        }
        if !self.board.is_empty(index) {
            return Err(MoveError::CellOccupied { index });
        }

        let mut board = self.board.clone();
        board.set(index, Cell::Taken(self.to_move));
        let mut history = self.history.clone();
        history.push(index);
        let outcome = rules::evaluate(&board);

        Ok(GameState {
            board,
            to_move: self.to_move.opponent(),
            outcome,
            history,
        })
    }

    /// Starts the game over on an empty board of the same size.
    pub fn reset(&self) -> GameState {
        GameState::new(self.size())
    }
}
