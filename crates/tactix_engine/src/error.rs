//! Move rejection errors.

use derive_more::{Display, Error};

/// Reasons a move is rejected by [`GameState::apply_move`](crate::GameState::apply_move).
///
/// Rejections carry enough context for callers that surface them; the TUI
/// simply discards them, matching the silent-ignore behavior players expect
/// from tapping an occupied cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Index is outside the board.
    #[display("index {index} is out of bounds for a board of {cells} cells")]
    OutOfBounds {
        /// The rejected index.
        index: usize,
        /// Total cell count of the board.
        cells: usize,
    },
    /// Cell already holds a mark.
    #[display("cell {index} is already occupied")]
    CellOccupied {
        /// The rejected index.
        index: usize,
    },
    /// Game already reached a terminal outcome.
    #[display("the game is over; reset to play again")]
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MoveError::OutOfBounds { index: 16, cells: 9 };
        assert_eq!(
            err.to_string(),
            "index 16 is out of bounds for a board of 9 cells"
        );
        assert_eq!(
            MoveError::CellOccupied { index: 4 }.to_string(),
            "cell 4 is already occupied"
        );
    }
}
