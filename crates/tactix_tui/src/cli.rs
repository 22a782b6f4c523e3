//! Command-line interface for tactix.

use clap::Parser;
use tactix_engine::{BoardSize, Mode};

/// Tactix - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tactix")]
#[command(about = "Tic-tac-toe on 3x3 and 4x4 boards, against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board side length, skipping the size menu (3 or 4)
    #[arg(long, value_parser = parse_size)]
    pub size: Option<BoardSize>,

    /// Game mode, skipping the mode menu (pvp or pvc)
    #[arg(long, value_parser = parse_mode)]
    pub mode: Option<Mode>,

    /// Seed for the computer opponent (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<std::path::PathBuf>,
}

fn parse_size(s: &str) -> Result<BoardSize, String> {
    s.parse::<usize>()
        .ok()
        .and_then(BoardSize::from_dim)
        .ok_or_else(|| format!("unsupported board size: {s} (expected 3 or 4)"))
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    Mode::from_code(s).ok_or_else(|| format!("unknown mode: {s} (expected pvp or pvc)"))
}
