//! Uniformly random computer opponent.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::instrument;

use crate::types::Board;

/// Picks a uniformly random empty cell, or `None` on a full board.
///
/// No look-ahead and no blocking or winning heuristics - every legal move
/// is equally likely.
pub fn select_move<R: Rng>(board: &Board, rng: &mut R) -> Option<usize> {
    let open = board.empty_cells();
    if open.is_empty() {
        return None;
    }
    let pick = rng.gen_range(0..open.len());
    Some(open[pick])
}

/// Computer opponent that owns its RNG.
///
/// Plays O in player-vs-computer games. Seedable for reproducible
/// sessions.
#[derive(Debug)]
pub struct ComputerPlayer {
    rng: StdRng,
}

impl ComputerPlayer {
    /// Creates an opponent seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates an opponent with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picks the next move, or `None` when no empty cells remain.
    #[instrument(skip(self, board))]
    pub fn select_move(&mut self, board: &Board) -> Option<usize> {
        select_move(board, &mut self.rng)
    }
}

impl Default for ComputerPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoardSize, Cell, Mark};

    #[test]
    fn test_only_empty_cells_selected() {
        let mut board = Board::new(BoardSize::Three);
        board.set(0, Cell::Taken(Mark::X));
        board.set(4, Cell::Taken(Mark::O));
        board.set(8, Cell::Taken(Mark::X));

        let mut player = ComputerPlayer::seeded(7);
        for _ in 0..200 {
            let pick = player.select_move(&board).unwrap();
            assert!(board.is_empty(pick), "picked occupied cell {pick}");
        }
    }

    #[test]
    fn test_full_board_yields_none() {
        let mut board = Board::new(BoardSize::Three);
        for pos in 0..9 {
            board.set(pos, Cell::Taken(Mark::X));
        }
        assert_eq!(ComputerPlayer::seeded(1).select_move(&board), None);
    }

    #[test]
    fn test_selection_is_roughly_uniform() {
        let board = Board::new(BoardSize::Three);
        let mut player = ComputerPlayer::seeded(42);

        let trials = 9_000;
        let mut counts = [0usize; 9];
        for _ in 0..trials {
            counts[player.select_move(&board).unwrap()] += 1;
        }

        // Expected 1000 per cell; the seeded run stays well inside this band.
        for (pos, count) in counts.iter().enumerate() {
            assert!(
                (800..1200).contains(count),
                "cell {pos} picked {count} times out of {trials}"
            );
        }
    }
}
