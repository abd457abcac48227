//! Precomputed knight-move graph over the 64 squares.

use std::fmt;

use once_cell::sync::Lazy;

use super::types::{Square, SquareIdx, NUM_SQUARES};

/// The eight knight deltas as `(file, rank)`, in adjacency-list order.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-1, -2),
    (1, -2),
    (-2, -1),
    (2, -1),
    (-2, 1),
    (2, 1),
    (-1, 2),
    (1, 2),
];

static SHARED_GRAPH: Lazy<KnightGraph> = Lazy::new(KnightGraph::new);

/// Adjacency lists of the knight graph, indexed by square index.
///
/// Built once and never mutated, so a single instance can back any number of
/// concurrent queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnightGraph {
    adjacency: Vec<Vec<SquareIdx>>,
}

impl KnightGraph {
    /// Build the graph, applying [`KNIGHT_OFFSETS`] in order to every square.
    #[must_use]
    pub fn new() -> Self {
        let adjacency: Vec<Vec<SquareIdx>> = (0..NUM_SQUARES)
            .map(|idx| {
                let from = Square::from_index_const(idx);
                KNIGHT_OFFSETS
                    .iter()
                    .filter_map(|&(df, dr)| from.offset(df, dr))
                    .map(Square::index)
                    .collect()
            })
            .collect();

        #[cfg(feature = "logging")]
        log::debug!(
            "built knight graph: {} squares, {} directed edges",
            adjacency.len(),
            adjacency.iter().map(Vec::len).sum::<usize>()
        );

        KnightGraph { adjacency }
    }

    #[cfg(test)]
    pub(crate) fn from_adjacency(adjacency: Vec<Vec<SquareIdx>>) -> Self {
        assert_eq!(adjacency.len(), NUM_SQUARES);
        KnightGraph { adjacency }
    }

    /// Process-wide graph, built on first access.
    #[must_use]
    pub fn shared() -> &'static KnightGraph {
        &SHARED_GRAPH
    }

    /// Squares one knight move away from `sq`.
    #[inline]
    #[must_use]
    pub fn neighbors(&self, sq: Square) -> &[SquareIdx] {
        self.neighbors_of(sq.index())
    }

    #[inline]
    pub(crate) fn neighbors_of(&self, idx: SquareIdx) -> &[SquareIdx] {
        &self.adjacency[idx.as_usize()]
    }

    pub fn neighbor_squares(&self, sq: Square) -> impl Iterator<Item = Square> + '_ {
        self.neighbors(sq).iter().map(|idx| idx.square())
    }

    #[must_use]
    pub fn degree(&self, sq: Square) -> usize {
        self.neighbors(sq).len()
    }

    #[must_use]
    pub fn is_knight_move(&self, from: Square, to: Square) -> bool {
        self.neighbors(from).contains(&to.index())
    }

    /// Number of directed edges (each knight move counted from both ends).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Iterate over `(square, neighbors)` in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, &[SquareIdx])> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(idx, list)| (Square::from_index_const(idx), list.as_slice()))
    }
}

impl Default for KnightGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for KnightGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (sq, list) in self.iter() {
            write!(f, "{}:", sq.as_index())?;
            for idx in list {
                write!(f, " {}", idx.0)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
