//! Widget rendering helpers.

mod board;

pub use board::render_board;
