//! Win detection logic.

use crate::types::{Board, BoardSize, Cell, Mark};
use tracing::instrument;

/// Enumerates every winning line for the given board size.
///
/// A size-n board has `2n + 2` lines: n rows, n columns, the main
/// diagonal, and the anti-diagonal, in that order. Enumeration order is
/// deterministic so tests can rely on it; a legal board has at most one
/// simultaneous winner, so order never changes the result.
pub fn winning_lines(size: BoardSize) -> Vec<Vec<usize>> {
    let dim = size.dim();
    let mut lines = Vec::with_capacity(2 * dim + 2);
    for i in 0..dim {
        lines.push((0..dim).map(|k| i * dim + k).collect());
    }
    for i in 0..dim {
        lines.push((0..dim).map(|k| k * dim + i).collect());
    }
    lines.push((0..dim).map(|i| i * (dim + 1)).collect());
    // Anti-diagonal: row i, column dim - 1 - i.
    lines.push((0..dim).map(|i| i * dim + (dim - 1 - i)).collect());
    lines
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if that mark fills an entire line, `None`
/// otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    for line in winning_lines(board.size()) {
        if let Some(Cell::Taken(mark)) = board.get(line[0])
            && line.iter().all(|&pos| board.get(pos) == Some(Cell::Taken(mark)))
        {
            return Some(mark);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn take(board: &mut Board, positions: &[usize], mark: Mark) {
        for &pos in positions {
            board.set(pos, Cell::Taken(mark));
        }
    }

    #[test]
    fn test_line_counts() {
        assert_eq!(winning_lines(BoardSize::Three).len(), 8);
        assert_eq!(winning_lines(BoardSize::Four).len(), 10);
    }

    #[test]
    fn test_every_line_has_size_cells() {
        for size in BoardSize::ALL {
            for line in winning_lines(size) {
                assert_eq!(line.len(), size.dim());
                assert!(line.iter().all(|&pos| pos < size.cell_count()));
            }
        }
    }

    #[test]
    fn test_anti_diagonal_matches_row_col_definition() {
        // The closed form (i + 1) * (dim - 1) and the coordinate form
        // row i, col dim - 1 - i name the same cells.
        for size in BoardSize::ALL {
            let dim = size.dim();
            let lines = winning_lines(size);
            let anti = &lines[lines.len() - 1];
            let closed_form: Vec<usize> = (0..dim).map(|i| (i + 1) * (dim - 1)).collect();
            assert_eq!(*anti, closed_form);
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new(BoardSize::Three)), None);
        assert_eq!(check_winner(&Board::new(BoardSize::Four)), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new(BoardSize::Three);
        take(&mut board, &[0, 1, 2], Mark::X);
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new(BoardSize::Four);
        take(&mut board, &[1, 5, 9, 13], Mark::O);
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_winner_main_diagonal() {
        let mut board = Board::new(BoardSize::Three);
        take(&mut board, &[0, 4, 8], Mark::O);
        assert_eq!(check_winner(&board), Some(Mark::O));

        let mut board = Board::new(BoardSize::Four);
        take(&mut board, &[0, 5, 10, 15], Mark::O);
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new(BoardSize::Three);
        take(&mut board, &[2, 4, 6], Mark::X);
        assert_eq!(check_winner(&board), Some(Mark::X));

        let mut board = Board::new(BoardSize::Four);
        take(&mut board, &[3, 6, 9, 12], Mark::X);
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let mut board = Board::new(BoardSize::Three);
        take(&mut board, &[0, 1], Mark::X);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_three_in_a_row_does_not_win_on_four() {
        // A 4x4 line needs all four cells.
        let mut board = Board::new(BoardSize::Four);
        take(&mut board, &[0, 1, 2], Mark::X);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = Board::new(BoardSize::Three);
        take(&mut board, &[0, 1], Mark::X);
        take(&mut board, &[2], Mark::O);
        assert_eq!(check_winner(&board), None);
    }
}
