//! Core domain types for tactix.

use serde::{Deserialize, Serialize};

/// Player mark in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second; the computer in PvC games).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a player's mark.
    Taken(Mark),
}

/// Supported board sizes.
///
/// Fixed at game start; a reset keeps the size, returning to the main
/// menu discards it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum BoardSize {
    /// 3x3 board, three in a row wins.
    Three,
    /// 4x4 board, four in a row wins.
    Four,
}

impl BoardSize {
    /// Both supported sizes, in menu order.
    pub const ALL: [BoardSize; 2] = [BoardSize::Three, BoardSize::Four];

    /// Cells per side.
    pub fn dim(self) -> usize {
        match self {
            BoardSize::Three => 3,
            BoardSize::Four => 4,
        }
    }

    /// Total cell count (`dim * dim`).
    pub fn cell_count(self) -> usize {
        self.dim() * self.dim()
    }

    /// Display label for menus.
    pub fn label(self) -> &'static str {
        match self {
            BoardSize::Three => "3 x 3",
            BoardSize::Four => "4 x 4",
        }
    }

    /// Looks up a size by side length.
    pub fn from_dim(dim: usize) -> Option<Self> {
        <Self as strum::IntoEnumIterator>::iter().find(|size| size.dim() == dim)
    }
}

/// Game mode - who is the opponent?
///
/// Immutable for the lifetime of a game. In [`Mode::PvC`] the computer
/// always plays O, the second mover.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Mode {
    /// Player vs player - both marks driven by human input.
    PvP,
    /// Player vs computer - the human plays X, the computer plays O.
    PvC,
}

impl Mode {
    /// Both modes, in menu order.
    pub const ALL: [Mode; 2] = [Mode::PvP, Mode::PvC];

    /// Display label for menus.
    pub fn label(self) -> &'static str {
        match self {
            Mode::PvP => "Player vs Player",
            Mode::PvC => "Player vs Computer",
        }
    }

    /// Short code used by CLI flags.
    pub fn code(self) -> &'static str {
        match self {
            Mode::PvP => "pvp",
            Mode::PvC => "pvc",
        }
    }

    /// Looks up a mode by its short code, case-insensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        <Self as strum::IntoEnumIterator>::iter().find(|mode| mode.code().eq_ignore_ascii_case(code))
    }
}

/// Terminal or non-terminal classification of a board state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

/// Row-major board of `dim * dim` cells.
///
/// Index `i` maps to row `i / dim`, column `i % dim`. The cell vector is
/// sized at creation and never resized; a reset builds a fresh board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a new empty board of the given size.
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.cell_count()],
        }
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Gets the cell at the given index.
    pub fn get(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Sets the cell at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds; callers validate through
    /// [`GameState::apply_move`](crate::GameState::apply_move).
    pub fn set(&mut self, pos: usize, cell: Cell) {
        self.cells[pos] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Cell::Empty))
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// Indices of all currently-empty cells, in board order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// All cells as a slice.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        let dim = self.size.dim();
        let mut result = String::new();
        for row in 0..dim {
            for col in 0..dim {
                let symbol = match self.cells[row * dim + col] {
                    Cell::Empty => ".",
                    Cell::Taken(Mark::X) => "X",
                    Cell::Taken(Mark::O) => "O",
                };
                result.push_str(symbol);
                if col < dim - 1 {
                    result.push('|');
                }
            }
            if row < dim - 1 {
                result.push('\n');
                result.push_str(&"-+".repeat(dim - 1));
                result.push_str("-\n");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        for size in BoardSize::ALL {
            let board = Board::new(size);
            assert_eq!(board.cells().len(), size.cell_count());
            assert!((0..size.cell_count()).all(|pos| board.is_empty(pos)));
        }
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new(BoardSize::Three);
        assert_eq!(board.get(9), None);
    }

    #[test]
    fn test_empty_cells_tracks_sets() {
        let mut board = Board::new(BoardSize::Three);
        board.set(4, Cell::Taken(Mark::X));
        board.set(0, Cell::Taken(Mark::O));
        assert_eq!(board.empty_cells(), vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_size_lookup() {
        assert_eq!(BoardSize::from_dim(3), Some(BoardSize::Three));
        assert_eq!(BoardSize::from_dim(4), Some(BoardSize::Four));
        assert_eq!(BoardSize::from_dim(5), None);
    }

    #[test]
    fn test_mode_code_roundtrip() {
        assert_eq!(Mode::from_code("pvp"), Some(Mode::PvP));
        assert_eq!(Mode::from_code("PvC"), Some(Mode::PvC));
        assert_eq!(Mode::from_code("online"), None);
    }

    #[test]
    fn test_display_marks_and_separators() {
        let mut board = Board::new(BoardSize::Three);
        board.set(0, Cell::Taken(Mark::X));
        board.set(4, Cell::Taken(Mark::O));
        assert_eq!(board.display(), "X|.|.\n-+-+-\n.|O|.\n-+-+-\n.|.|.");
    }
}
