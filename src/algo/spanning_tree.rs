//! Find a [minimum spanning tree] of a graph.
//!
//! Edge directions are ignored. If the graph is not connected, the result is
//! a minimum spanning forest, that is, a minimum spanning tree for each
//! connected component, which can be recognized by
//! [`is_spanning`](SpanningTree::is_spanning) returning `false`.
//!
//! See available parameters [here](SpanningTreeBuilder#implementations).
//!
//! [minimum spanning tree]: https://en.wikipedia.org/wiki/Minimum_spanning_tree
//!
//! # Examples
//!
//! ```
//! use algokit::{algo::SpanningTree, Graph};
//!
//! let mut graph = Graph::new_undirected();
//! graph.extend_with_vertices(["A", "B", "C"]);
//! graph
//!     .extend_with_edges([("A", "B", 4), ("B", "C", 2), ("A", "C", 5)])
//!     .unwrap();
//!
//! let tree = SpanningTree::on(&graph).run().unwrap();
//!
//! assert_eq!(tree.edges(), &[("B", "C", 2), ("A", "B", 4)]);
//! assert_eq!(tree.total_weight(), 6);
//! assert!(tree.is_spanning());
//! ```

use std::hash::Hash;

use thiserror::Error;

use crate::{core::weight::Weight, graph::Graph};

mod builder;
mod kruskal;
mod prim;

pub use builder::SpanningTreeBuilder;

pub(crate) use self::{kruskal::kruskal, prim::prim};

/// Edges of a minimum spanning tree (or forest).
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<V, W> {
    edges: Vec<(V, V, W)>,
    vertex_count: usize,
}

impl<V, W> SpanningTree<V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    pub(crate) fn from_raw(graph: &Graph<V, W>, edges: Vec<(usize, usize, W)>) -> Self {
        let edges = edges
            .into_iter()
            .map(|(u, v, w)| (graph.label(u).clone(), graph.label(v).clone(), w))
            .collect();

        Self {
            edges,
            vertex_count: graph.vertex_count(),
        }
    }

    /// Edges in the order in which they were accepted by the algorithm.
    pub fn edges(&self) -> &[(V, V, W)] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<(V, V, W)> {
        self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Sum of the edge weights.
    pub fn total_weight(&self) -> W {
        self.edges
            .iter()
            .fold(W::zero(), |acc, (_, _, w)| acc + w.clone())
    }

    /// Number of trees in the forest. Isolated vertices count as trees too.
    pub fn component_count(&self) -> usize {
        self.vertex_count - self.edges.len()
    }

    /// `true` if the edges connect all vertices of the graph, `false` if
    /// this is a spanning forest of a disconnected graph.
    pub fn is_spanning(&self) -> bool {
        self.component_count() <= 1
    }
}

/// Algorithm for [`SpanningTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Algo {
    /// [Kruskal's
    /// algorithm](https://en.wikipedia.org/wiki/Kruskal%27s_algorithm).
    ///
    /// Sorts the edges by weight and greedily accepts every edge that does
    /// not close a cycle, keeping track of the components in a disjoint-set
    /// forest. Runs in _O(|E| log |E|)_.
    ///
    /// # Use cases
    ///
    /// * Sparse graphs given as an edge list.
    /// * Clustering by cutting the heaviest edges of the tree.
    Kruskal,

    /// [Prim's algorithm](https://en.wikipedia.org/wiki/Prim%27s_algorithm).
    ///
    /// Grows the tree from a root vertex by repeatedly adding the cheapest
    /// edge leaving it. Runs in _O(|E| log |E|)_ with a binary heap.
    ///
    /// # Use cases
    ///
    /// * Dense graphs.
    /// * Growing the tree from a specific vertex.
    Prim,
}

mod algo {
    use super::Algo;

    #[derive(Debug)]
    pub struct AnyAlgo;

    #[derive(Debug)]
    pub struct SpecificAlgo(pub Option<Algo>);
}

/// The error encountered during a [`SpanningTree`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The root vertex does not exist.
    #[error("vertex does not exist")]
    UnknownVertex,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::{
        common::DisjointSetForest,
        infra::proptest::{graph_directed, graph_undirected},
    };

    use super::*;

    fn create_basic_graph() -> Graph<char, u32> {
        let mut graph = Graph::new_undirected();
        graph.extend_with_vertices(['a', 'b', 'c', 'd', 'e', 'f']);
        graph
            .extend_with_edges([
                ('a', 'b', 7),
                ('a', 'd', 5),
                ('b', 'c', 8),
                ('b', 'd', 9),
                ('b', 'e', 7),
                ('c', 'e', 5),
                ('d', 'e', 15),
                ('d', 'f', 6),
                ('e', 'f', 8),
            ])
            .unwrap();
        graph
    }

    fn create_disconnected_graph() -> Graph<u8, i32> {
        let mut graph = Graph::new_undirected();
        graph.extend_with_vertices(0..6);
        graph
            .extend_with_edges([(0, 1, 2), (1, 2, 1), (0, 2, 3), (3, 4, -1)])
            .unwrap();
        graph
    }

    #[test]
    fn kruskal_scenario() {
        let mut graph = Graph::new_undirected();
        graph.extend_with_vertices(["A", "B", "C"]);
        graph
            .extend_with_edges([("A", "B", 4), ("B", "C", 2), ("A", "C", 5)])
            .unwrap();

        let tree = SpanningTree::on(&graph).kruskal().run().unwrap();

        assert_eq!(tree.edges(), &[("B", "C", 2), ("A", "B", 4)]);
        assert_eq!(tree.total_weight(), 6);
    }

    #[test]
    fn kruskal_basic() {
        let graph = create_basic_graph();
        let tree = SpanningTree::on(&graph).using(Algo::Kruskal).run().unwrap();

        assert_eq!(tree.edge_count(), 5);
        assert_eq!(tree.total_weight(), 30);
        assert!(tree.is_spanning());
        assert_eq!(tree.component_count(), 1);
    }

    #[test]
    fn prim_basic() {
        let graph = create_basic_graph();
        let tree = SpanningTree::on(&graph).using(Algo::Prim).run().unwrap();

        assert_eq!(
            tree.edges(),
            &[
                ('a', 'd', 5),
                ('d', 'f', 6),
                ('a', 'b', 7),
                ('b', 'e', 7),
                ('e', 'c', 5),
            ]
        );
        assert_eq!(tree.total_weight(), 30);
    }

    #[test]
    fn prim_with_root() {
        let graph = create_basic_graph();
        let tree = SpanningTree::on(&graph).prim().root(&'f').run().unwrap();

        assert_eq!(tree.edges()[0], ('f', 'd', 6));
        assert_eq!(tree.total_weight(), 30);
    }

    #[test]
    fn prim_unknown_root() {
        let graph = create_basic_graph();

        assert_matches!(
            SpanningTree::on(&graph).prim().root(&'x').run(),
            Err(Error::UnknownVertex)
        );
    }

    #[test]
    fn ties_keep_insertion_order() {
        let mut graph = Graph::new_undirected();
        graph.extend_with_vertices([0, 1, 2]);
        graph
            .extend_with_edges([(1, 2, 1), (0, 1, 1), (0, 2, 1)])
            .unwrap();

        let tree = SpanningTree::on(&graph).kruskal().run().unwrap();
        assert_eq!(tree.edges(), &[(1, 2, 1), (0, 1, 1)]);
    }

    #[test]
    fn disconnected_forest() {
        let graph = create_disconnected_graph();

        for algo in [Algo::Kruskal, Algo::Prim] {
            let tree = SpanningTree::on(&graph).using(algo).run().unwrap();

            assert_eq!(tree.edge_count(), 3);
            assert_eq!(tree.total_weight(), 2);
            assert!(!tree.is_spanning());
            // {0, 1, 2}, {3, 4}, {5}
            assert_eq!(tree.component_count(), 3);
        }
    }

    #[test]
    fn directed_input_ignores_direction() {
        let mut graph = Graph::new_directed();
        graph.extend_with_vertices(["a", "b", "c"]);
        graph
            .extend_with_edges([("b", "a", 1), ("c", "b", 1), ("a", "c", 5)])
            .unwrap();

        for algo in [Algo::Kruskal, Algo::Prim] {
            let tree = SpanningTree::on(&graph).using(algo).run().unwrap();

            assert!(tree.is_spanning());
            assert_eq!(tree.total_weight(), 2);
        }
    }

    #[test]
    fn self_loops_ignored() {
        let mut graph = Graph::new_undirected();
        graph.extend_with_vertices([0, 1]);
        graph.extend_with_edges([(0, 0, -5), (0, 1, 3)]).unwrap();

        for algo in [Algo::Kruskal, Algo::Prim] {
            let tree = SpanningTree::on(&graph).using(algo).run().unwrap();
            assert_eq!(tree.edges(), &[(0, 1, 3)]);
        }
    }

    #[test]
    fn empty_and_single() {
        let mut graph = Graph::<u8, u8>::new_undirected();

        let tree = SpanningTree::on(&graph).run().unwrap();
        assert_eq!(tree.edge_count(), 0);
        assert!(tree.is_spanning());

        graph.add_vertex(1);
        let tree = SpanningTree::on(&graph).prim().run().unwrap();
        assert_eq!(tree.edge_count(), 0);
        assert!(tree.is_spanning());
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_kruskal_prim_agree_connected(graph in graph_undirected(any::<u16>(), 0..1000u32).max_size(64).connected()) {
            let kruskal = SpanningTree::on(&graph).kruskal().run().unwrap();
            let prim = SpanningTree::on(&graph).prim().run().unwrap();

            prop_assert!(kruskal.is_spanning());
            prop_assert!(prim.is_spanning());
            prop_assert_eq!(kruskal.edge_count(), graph.vertex_count().saturating_sub(1));
            prop_assert_eq!(prim.edge_count(), graph.vertex_count().saturating_sub(1));
            prop_assert_eq!(kruskal.total_weight(), prim.total_weight());
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_spanning_forest_is_acyclic(graph in graph_directed(any::<u16>(), any::<i16>()).max_size(64)) {
            for algo in [Algo::Kruskal, Algo::Prim] {
                let tree = SpanningTree::on(&graph).using(algo).run().unwrap();

                let mut sets: DisjointSetForest<_> = graph.vertices().copied().collect();
                for (u, v, _) in tree.edges() {
                    prop_assert!(graph.edge(u, v).is_some() || graph.edge(v, u).is_some());
                    prop_assert_eq!(sets.union(u, v), Ok(true));
                }
            }
        }
    }
}
