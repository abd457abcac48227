pub mod board;
pub mod cli;

pub use board::{find_shortest_path, KnightGraph, PathError, PathFinder, PathResult, Square};
