//! Split a graph into its [connected components].
//!
//! Edge directions are ignored, so for directed graphs these are the weakly
//! connected components.
//!
//! [connected components]: https://en.wikipedia.org/wiki/Component_(graph_theory)
//!
//! # Examples
//!
//! ```
//! use algokit::{
//!     algo::{connected_components, is_connected},
//!     Graph,
//! };
//!
//! let mut graph = Graph::new_undirected();
//! graph.extend_with_vertices(["a", "b", "c", "d"]);
//! graph.extend_with_edges([("a", "c", 1), ("d", "b", 1)]).unwrap();
//!
//! assert_eq!(
//!     connected_components(&graph),
//!     vec![vec!["a", "c"], vec!["b", "d"]]
//! );
//! assert!(!is_connected(&graph));
//! ```

use std::hash::Hash;

use crate::{common::DisjointSets, core::weight::Weight, graph::Graph};

/// Returns the connected components. Vertices within a component and the
/// components themselves (by their first vertex) are in insertion order.
pub fn connected_components<V, W>(graph: &Graph<V, W>) -> Vec<Vec<V>>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    let n = graph.vertex_count();
    let mut sets = union_edges(graph);

    // Component slot of each representative.
    let mut slot = vec![None; n];
    let mut components: Vec<Vec<V>> = Vec::new();

    for v in 0..n {
        let root = sets.find(v);
        let i = *slot[root].get_or_insert_with(|| {
            components.push(Vec::new());
            components.len() - 1
        });
        components[i].push(graph.label(v).clone());
    }

    debug!(vertices = n, components = components.len(), "connected_components");

    components
}

/// Returns `true` if every vertex can be reached from every other one when
/// ignoring edge directions. An empty graph is connected.
pub fn is_connected<V, W>(graph: &Graph<V, W>) -> bool
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    union_edges(graph).set_count() <= 1
}

fn union_edges<V, W>(graph: &Graph<V, W>) -> DisjointSets
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    let mut sets = DisjointSets::new(graph.vertex_count());

    for edge in graph.edges.iter() {
        sets.union(edge.src, edge.dst);
    }

    sets
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        infra::proptest::{graph_directed, graph_undirected},
        visit::breadth_first_search,
    };

    use super::*;

    #[test]
    fn components_ordered_by_first_vertex() {
        let mut graph = Graph::new_undirected();
        graph.extend_with_vertices(0..7);
        graph
            .extend_with_edges([(5, 1, 1), (3, 6, 1), (1, 3, 1), (4, 2, 1)])
            .unwrap();

        assert_eq!(
            connected_components(&graph),
            vec![vec![0], vec![1, 3, 5, 6], vec![2, 4]]
        );
        assert!(!is_connected(&graph));
    }

    #[test]
    fn directed_weakly_connected() {
        let mut graph = Graph::new_directed();
        graph.extend_with_vertices(["a", "b", "c"]);
        graph
            .extend_with_edges([("a", "b", 1), ("c", "b", 1)])
            .unwrap();

        // "c" is not reachable from "a", but the graph is weakly connected.
        assert!(is_connected(&graph));
        assert_eq!(connected_components(&graph), vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn empty_and_single() {
        let mut graph = Graph::<u8, u8>::new_undirected();

        assert!(is_connected(&graph));
        assert!(connected_components(&graph).is_empty());

        graph.add_vertex(7);
        assert!(is_connected(&graph));
        assert_eq!(connected_components(&graph), vec![vec![7]]);
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_connected_strategy(graph in graph_directed(any::<u16>(), Just(1u8)).connected()) {
            prop_assert!(is_connected(&graph));
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_components_match_bfs(graph in graph_undirected(any::<u16>(), Just(1u8))) {
            let components = connected_components(&graph);

            prop_assert_eq!(components.iter().map(Vec::len).sum::<usize>(), graph.vertex_count());

            for component in components {
                let tree = breadth_first_search(&graph, &component[0]).unwrap();
                prop_assert_eq!(tree.len(), component.len());

                for v in &component {
                    prop_assert!(tree.contains(v));
                }
            }
        }
    }
}
