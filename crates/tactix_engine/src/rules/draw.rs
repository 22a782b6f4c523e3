//! Draw detection logic.

use super::win::check_winner;
use crate::types::Board;

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Checks if the game is a draw: full board, no winner.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoardSize, Cell, Mark};

    fn fill(board: &mut Board, layout: &[Mark]) {
        for (pos, &mark) in layout.iter().enumerate() {
            board.set(pos, Cell::Taken(mark));
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new(BoardSize::Three)));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(BoardSize::Three);
        board.set(4, Cell::Taken(Mark::X));
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection_three() {
        // X O X / O X X / O X O - full with no uniform line.
        let mut board = Board::new(BoardSize::Three);
        fill(
            &mut board,
            &[
                Mark::X,
                Mark::O,
                Mark::X,
                Mark::O,
                Mark::X,
                Mark::X,
                Mark::O,
                Mark::X,
                Mark::O,
            ],
        );
        assert!(is_draw(&board));
    }

    #[test]
    fn test_draw_detection_four() {
        // Alternating checker layout; every row, column, and diagonal mixes
        // marks.
        let mut board = Board::new(BoardSize::Four);
        #[rustfmt::skip]
        fill(
            &mut board,
            &[
                Mark::X, Mark::O, Mark::X, Mark::O,
                Mark::O, Mark::X, Mark::O, Mark::X,
                Mark::O, Mark::X, Mark::O, Mark::X,
                Mark::X, Mark::O, Mark::X, Mark::O,
            ],
        );
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new(BoardSize::Three);
        fill(
            &mut board,
            &[
                Mark::X,
                Mark::X,
                Mark::X,
                Mark::O,
                Mark::O,
                Mark::X,
                Mark::O,
                Mark::X,
                Mark::O,
            ],
        );
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
