//! Knight-move graph and shortest-path search on an 8x8 board.
//!
//! The graph is built once and shared read-only; each query allocates its own
//! scratch state, so queries never interfere with one another.
//!
//! # Example
//! ```
//! use knight_path::board::{find_shortest_path, Square};
//!
//! let result = find_shortest_path((0, 0), (7, 7)).unwrap();
//! assert_eq!(result.distance(), 6);
//! assert_eq!(result.path()[0], Square::new(0, 0).unwrap());
//! ```

mod error;
mod graph;
mod search;
mod types;

#[cfg(test)]
mod tests;

pub use error::{Endpoint, PathError, SquareError};
pub use graph::{KnightGraph, KNIGHT_OFFSETS};
pub use search::{find_shortest_path, PathFinder, PathResult};
pub use types::{Square, SquareIdx, BOARD_SIZE, NUM_SQUARES};
