//! Board module tests.
//!
//! - `graph.rs` - Knight graph construction and shape
//! - `search.rs` - Shortest-path queries and edge cases
//! - `proptest.rs` - Property-based tests

mod graph;
