//! Core board types.

mod square;

pub use square::{Square, SquareIdx, BOARD_SIZE, NUM_SQUARES};
