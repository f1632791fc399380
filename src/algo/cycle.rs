//! Detect whether a graph contains a [cycle].
//!
//! In a directed graph, a cycle must follow the edge directions. In an
//! undirected graph, walking an edge there and back does not count, so a
//! cycle needs at least three distinct edges, or a self-loop.
//!
//! [cycle]: https://en.wikipedia.org/wiki/Cycle_(graph_theory)
//!
//! # Examples
//!
//! ```
//! use algokit::{algo::is_cyclic, Graph};
//!
//! let mut graph = Graph::new_directed();
//! graph.extend_with_vertices([1, 2, 3]);
//! graph.extend_with_edges([(1, 2, 1), (2, 3, 1), (1, 3, 1)]).unwrap();
//!
//! assert!(!is_cyclic(&graph));
//!
//! graph.add_edge(&3, &1, 1).unwrap();
//! assert!(is_cyclic(&graph));
//! ```

use std::hash::Hash;

use fixedbitset::FixedBitSet;

use crate::{common::DisjointSets, core::weight::Weight, graph::Graph};

/// Returns `true` if the graph contains a cycle.
pub fn is_cyclic<V, W>(graph: &Graph<V, W>) -> bool
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    let cyclic = if graph.is_directed() {
        has_back_edge(graph)
    } else {
        closes_component(graph)
    };

    debug!(
        directed = graph.is_directed(),
        vertices = graph.vertex_count(),
        cyclic,
        "is_cyclic"
    );

    cyclic
}

// Depth-first search with three colors: undiscovered, on the stack
// (`discovered` but not `closed`) and closed. An edge to a vertex on the
// stack closes a cycle.
fn has_back_edge<V, W>(graph: &Graph<V, W>) -> bool
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    let n = graph.vertex_count();

    let mut discovered = FixedBitSet::with_capacity(n);
    let mut closed = FixedBitSet::with_capacity(n);
    let mut stack = Vec::new();

    for root in 0..n {
        if discovered.contains(root) {
            continue;
        }

        discovered.insert(root);
        stack.push((root, 0));

        while let Some((vertex, pos)) = stack.last_mut() {
            let vertex = *vertex;

            match graph.outgoing[vertex].get(*pos) {
                Some(&(next, _)) => {
                    *pos += 1;

                    if !discovered.contains(next) {
                        discovered.insert(next);
                        stack.push((next, 0));
                    } else if !closed.contains(next) {
                        trace!(from = vertex, to = next, "back_edge");
                        return true;
                    }
                }
                None => {
                    stack.pop();
                    closed.insert(vertex);
                }
            }
        }
    }

    false
}

// Every undirected edge merges the components of its endpoints. An edge
// whose endpoints are already connected closes a cycle.
fn closes_component<V, W>(graph: &Graph<V, W>) -> bool
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    let mut sets = DisjointSets::new(graph.vertex_count());

    graph.edges.iter().any(|edge| !sets.union(edge.src, edge.dst))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        algo::toposort::TopoSort,
        infra::proptest::{graph_directed, graph_undirected},
    };

    use super::*;

    #[test]
    fn directed_dag() {
        let mut graph = Graph::new_directed();
        graph.extend_with_vertices(0..5);
        graph
            .extend_with_edges([(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1), (3, 4, 1)])
            .unwrap();

        // Diamond 0 -> {1, 2} -> 3 is not a cycle in a directed graph.
        assert!(!is_cyclic(&graph));
    }

    #[test]
    fn directed_cycle_in_second_tree() {
        let mut graph = Graph::new_directed();
        graph.extend_with_vertices(0..5);
        graph
            .extend_with_edges([(0, 1, 1), (2, 3, 1), (3, 4, 1), (4, 2, 1)])
            .unwrap();

        assert!(is_cyclic(&graph));
    }

    #[test]
    fn directed_two_cycle() {
        let mut graph = Graph::new_directed();
        graph.extend_with_vertices(["a", "b"]);
        graph
            .extend_with_edges([("a", "b", 1), ("b", "a", 1)])
            .unwrap();

        assert!(is_cyclic(&graph));
    }

    #[test]
    fn directed_self_loop() {
        let mut graph = Graph::new_directed();
        graph.add_vertex('x');
        graph.add_edge(&'x', &'x', 1).unwrap();

        assert!(is_cyclic(&graph));
    }

    #[test]
    fn undirected_tree() {
        let mut graph = Graph::new_undirected();
        graph.extend_with_vertices(0..5);
        graph
            .extend_with_edges([(0, 1, 1), (0, 2, 1), (2, 3, 1), (2, 4, 1)])
            .unwrap();

        assert!(!is_cyclic(&graph));
    }

    #[test]
    fn undirected_triangle() {
        let mut graph = Graph::new_undirected();
        graph.extend_with_vertices(0..3);
        graph
            .extend_with_edges([(0, 1, 1), (1, 2, 1), (2, 0, 1)])
            .unwrap();

        assert!(is_cyclic(&graph));
    }

    #[test]
    fn undirected_self_loop() {
        let mut graph = Graph::new_undirected();
        graph.extend_with_vertices(0..2);
        graph.extend_with_edges([(0, 1, 1), (1, 1, 1)]).unwrap();

        assert!(is_cyclic(&graph));
    }

    #[test]
    fn empty() {
        assert!(!is_cyclic(&Graph::<u8, u8>::new_directed()));
        assert!(!is_cyclic(&Graph::<u8, u8>::new_undirected()));
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_acyclic_directed(graph in graph_directed(any::<u16>(), Just(1u8)).acyclic()) {
            prop_assert!(!is_cyclic(&graph));
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_cyclic_iff_no_toposort(graph in graph_directed(any::<u16>(), Just(1u8)).allow_loops()) {
            let sorted = TopoSort::on(&graph).run().into_vec();
            prop_assert_eq!(is_cyclic(&graph), sorted.is_err());
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_undirected_forest_edge_count(graph in graph_undirected(any::<u16>(), Just(1u8))) {
            // A forest on n vertices with c components has exactly n - c edges.
            let components = crate::algo::connected::connected_components(&graph).len();
            let forest = graph.edge_count() + components == graph.vertex_count();
            prop_assert_eq!(is_cyclic(&graph), !forest);
        }
    }
}
