use crate::board::{KnightGraph, Square, SquareIdx, KNIGHT_OFFSETS};

fn sq(file: i32, rank: i32) -> Square {
    Square::new(file, rank).unwrap()
}

#[test]
fn corner_has_two_neighbors_in_offset_order() {
    let graph = KnightGraph::new();
    // Offset (2, 1) precedes (1, 2), so c2 (index 10) precedes b3 (index 17).
    assert_eq!(graph.neighbors(sq(0, 0)), &[SquareIdx(10), SquareIdx(17)]);
}

#[test]
fn center_square_has_all_eight_neighbors_in_offset_order() {
    let graph = KnightGraph::new();
    let from = sq(3, 3);
    let expected: Vec<Square> = KNIGHT_OFFSETS
        .iter()
        .map(|&(df, dr)| sq(3 + df, 3 + dr))
        .collect();
    let actual: Vec<Square> = graph.neighbor_squares(from).collect();
    assert_eq!(actual, expected);
}

#[test]
fn degrees_match_board_geometry() {
    let graph = KnightGraph::new();
    for corner in [sq(0, 0), sq(7, 0), sq(0, 7), sq(7, 7)] {
        assert_eq!(graph.degree(corner), 2, "corner {corner}");
    }
    assert_eq!(graph.degree(sq(1, 0)), 3);
    assert_eq!(graph.degree(sq(1, 1)), 4);
    assert_eq!(graph.degree(sq(0, 3)), 4);
    for file in 2..6 {
        for rank in 2..6 {
            assert_eq!(graph.degree(sq(file, rank)), 8);
        }
    }
    for (from, list) in graph.iter() {
        assert!((2..=8).contains(&list.len()), "{from} has {}", list.len());
    }
}

#[test]
fn edge_count_is_twice_the_undirected_total() {
    // 168 undirected knight moves on 8x8.
    assert_eq!(KnightGraph::new().edge_count(), 336);
}

#[test]
fn adjacency_is_symmetric() {
    let graph = KnightGraph::new();
    for (from, list) in graph.iter() {
        for idx in list {
            assert!(
                graph.is_knight_move(idx.square(), from),
                "{} -> {from} missing",
                idx.square()
            );
        }
    }
}

#[test]
fn no_move_wraps_around_the_board_edge() {
    let graph = KnightGraph::new();
    for (from, _) in graph.iter() {
        for to in graph.neighbor_squares(from) {
            let df = (to.file() - from.file()).abs();
            let dr = (to.rank() - from.rank()).abs();
            assert!(
                (df, dr) == (1, 2) || (df, dr) == (2, 1),
                "{from} -> {to} is not a knight move"
            );
        }
    }
}

#[test]
fn shared_graph_matches_fresh_build() {
    assert_eq!(KnightGraph::shared(), &KnightGraph::new());
    assert!(std::ptr::eq(KnightGraph::shared(), KnightGraph::shared()));
}

#[test]
fn display_lists_every_square() {
    let listing = KnightGraph::new().to_string();
    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines.len(), 64);
    assert_eq!(lines[0], "0: 10 17");
    assert_eq!(lines[63], "63: 46 53");
}
