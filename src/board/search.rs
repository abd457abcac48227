//! Breadth-first shortest knight paths.

use std::collections::VecDeque;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::{Endpoint, PathError};
use super::graph::KnightGraph;
use super::types::{Square, SquareIdx, NUM_SQUARES};

/// Per-query bookkeeping for one square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Visit {
    Unvisited,
    Visited {
        distance: usize,
        parent: Option<SquareIdx>,
    },
}

/// A shortest knight path and its length in moves.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathResult {
    distance: usize,
    path: Vec<Square>,
}

impl PathResult {
    /// Number of knight moves.
    #[inline]
    #[must_use]
    pub fn distance(&self) -> usize {
        self.distance
    }

    /// Squares from start to end inclusive; always `distance() + 1` long.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &[Square] {
        &self.path
    }

    #[must_use]
    pub fn start(&self) -> Square {
        self.path[0]
    }

    #[must_use]
    pub fn end(&self) -> Square {
        self.path[self.path.len() - 1]
    }

    /// True when start and end are the same square and no move was made.
    #[must_use]
    pub fn is_already_there(&self) -> bool {
        self.distance == 0
    }

    #[must_use]
    pub fn into_path(self) -> Vec<Square> {
        self.path
    }
}

/// Answers shortest-path queries against a prebuilt [`KnightGraph`].
///
/// Scratch state lives on the stack of each call, so a `PathFinder` can be
/// shared between threads freely.
#[derive(Clone, Copy, Debug)]
pub struct PathFinder<'g> {
    graph: &'g KnightGraph,
}

impl Default for PathFinder<'static> {
    fn default() -> Self {
        PathFinder::new(KnightGraph::shared())
    }
}

impl<'g> PathFinder<'g> {
    #[must_use]
    pub fn new(graph: &'g KnightGraph) -> Self {
        PathFinder { graph }
    }

    #[must_use]
    pub fn graph(&self) -> &'g KnightGraph {
        self.graph
    }

    /// Validate raw `(file, rank)` endpoints, then search.
    ///
    /// Both endpoints are checked before the graph is touched.
    pub fn find_shortest_path(
        &self,
        start: (i32, i32),
        end: (i32, i32),
    ) -> Result<PathResult, PathError> {
        let start = Square::try_from(start).map_err(PathError::invalid(Endpoint::Start))?;
        let end = Square::try_from(end).map_err(PathError::invalid(Endpoint::End))?;
        self.shortest_path(start, end)
    }

    /// Minimum number of knight moves between two squares.
    pub fn distance(&self, start: Square, end: Square) -> Result<usize, PathError> {
        self.shortest_path(start, end).map(|r| r.distance)
    }

    pub fn shortest_path(&self, start: Square, end: Square) -> Result<PathResult, PathError> {
        let mut visits = [Visit::Unvisited; NUM_SQUARES];
        let mut queue: VecDeque<SquareIdx> = VecDeque::with_capacity(NUM_SQUARES);
        let target = end.index();

        visits[start.as_index()] = Visit::Visited {
            distance: 0,
            parent: None,
        };
        queue.push_back(start.index());

        let mut found = false;
        while let Some(&current) = queue.front() {
            if current == target {
                found = true;
                break;
            }
            let Visit::Visited { distance, .. } = visits[current.as_usize()] else {
                unreachable!("queued square {current:?} has no visit record");
            };
            #[cfg(feature = "logging")]
            log::trace!("expanding {} at distance {}", current.square(), distance);
            for &next in self.graph.neighbors_of(current) {
                let slot = &mut visits[next.as_usize()];
                if *slot == Visit::Unvisited {
                    *slot = Visit::Visited {
                        distance: distance + 1,
                        parent: Some(current),
                    };
                    queue.push_back(next);
                }
            }
            queue.pop_front();
        }

        if !found {
            return Err(PathError::Unreachable { start, end });
        }

        let Visit::Visited { distance, .. } = visits[target.as_usize()] else {
            unreachable!("target dequeued without a visit record");
        };
        let path = reconstruct_path(&visits, target);
        debug_assert_eq!(path.len(), distance + 1);

        #[cfg(feature = "logging")]
        log::debug!(
            "path {} -> {}: {} moves, {} squares still queued",
            start,
            end,
            distance,
            queue.len()
        );

        Ok(PathResult { distance, path })
    }
}

/// Walk parent links back from `target` and return the path start-first.
fn reconstruct_path(visits: &[Visit; NUM_SQUARES], target: SquareIdx) -> Vec<Square> {
    let mut path = Vec::new();
    let mut cursor = Some(target);
    while let Some(idx) = cursor {
        path.push(idx.square());
        cursor = match visits[idx.as_usize()] {
            Visit::Visited { parent, .. } => parent,
            Visit::Unvisited => None,
        };
    }
    path.reverse();
    path
}

/// Shortest path between raw `(file, rank)` pairs on the shared graph.
pub fn find_shortest_path(start: (i32, i32), end: (i32, i32)) -> Result<PathResult, PathError> {
    PathFinder::default().find_shortest_path(start, end)
}
