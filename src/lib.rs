//! Generic containers and graph algorithms meant to be embedded as building
//! blocks: a comparator-driven [binary heap](common::BinaryHeap), a keyed
//! [priority queue](common::PriorityQueue), a
//! [disjoint-set forest](common::DisjointSetForest) and a labeled
//! [graph](Graph) with shortest path, spanning tree, traversal, topological
//! sort, cycle and Euler path algorithms on top.
//!
//! # Examples
//!
//! ```
//! use algokit::{algo, Graph};
//!
//! let mut graph = Graph::new_directed();
//! graph.extend_with_vertices(["A", "B", "C", "D"]);
//! graph
//!     .extend_with_edges([("A", "B", 1), ("B", "C", 2), ("A", "C", 5), ("C", "D", 1)])
//!     .unwrap();
//!
//! let paths = algo::dijkstra(&graph, &"A").unwrap();
//! assert_eq!(paths.dist(&"D"), Some(&4));
//! assert_eq!(paths.path_to(&"D"), Some(vec!["A", "B", "C", "D"]));
//! ```

// Logging is opt-in through the `tracing` feature. Without it, the macros
// expand to nothing.
macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
    };
}

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    };
}

pub mod algo;
pub mod common;
pub mod core;
pub mod graph;
pub mod infra;
pub mod visit;

pub use crate::{
    common::{BinaryHeap, DisjointSetForest, MaxHeap, MinHeap, PriorityQueue},
    core::{Compare, Natural, Reversed, Weight},
    graph::Graph,
};
