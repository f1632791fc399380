//! Graph algorithms.
//!
//! The more involved problems (shortest paths, spanning trees and topological
//! sorting) are exposed through a builder on the result type, which lets the
//! caller pick the algorithm and set optional parameters:
//!
//! ```
//! use algokit::{
//!     algo::{shortest_paths, ShortestPaths},
//!     Graph,
//! };
//!
//! let mut graph = Graph::new_directed();
//! graph.extend_with_vertices([0, 1, 2]);
//! graph.extend_with_edges([(0, 1, 5), (1, 2, -2)]).unwrap();
//!
//! let paths = ShortestPaths::on(&graph)
//!     .using(shortest_paths::Algo::Spfa)
//!     .run(&0)
//!     .unwrap();
//!
//! assert_eq!(paths.dist(&2), Some(&3));
//! ```
//!
//! For each algorithm, there is also a plain function with sensible defaults
//! in this module.

use std::hash::Hash;

use crate::{
    core::{error::UnknownVertexError, weight::Weight},
    graph::Graph,
};

pub mod all_pairs;
pub mod connected;
pub mod cycle;
pub mod euler;
pub mod shortest_paths;
pub mod spanning_tree;
pub mod toposort;

pub use all_pairs::{floyd_warshall, AllPairsShortestPaths};
pub use connected::{connected_components, is_connected};
pub use cycle::is_cyclic;
pub use euler::{euler_path, has_euler_path};
pub use shortest_paths::ShortestPaths;
pub use spanning_tree::SpanningTree;
pub use toposort::TopoSort;

pub use crate::visit::{breadth_first_search, depth_first_search, SearchTree};

/// Shortest paths from `source` using [Dijkstra's
/// algorithm](shortest_paths::Algo::Dijkstra). Fails on a negative edge.
pub fn dijkstra<V, W>(
    graph: &Graph<V, W>,
    source: &V,
) -> Result<ShortestPaths<V, W>, shortest_paths::Error>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    ShortestPaths::on(graph).dijkstra().run(source)
}

/// Shortest paths from `source` using the [Bellman-Ford
/// algorithm](shortest_paths::Algo::BellmanFord). Fails on a negative cycle
/// reachable from `source`.
pub fn bellman_ford<V, W>(
    graph: &Graph<V, W>,
    source: &V,
) -> Result<ShortestPaths<V, W>, shortest_paths::Error>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    ShortestPaths::on(graph).bellman_ford().run(source)
}

/// Shortest paths from `source` using the [shortest path faster
/// algorithm](shortest_paths::Algo::Spfa). Fails on a negative cycle
/// reachable from `source`.
pub fn spfa<V, W>(
    graph: &Graph<V, W>,
    source: &V,
) -> Result<ShortestPaths<V, W>, shortest_paths::Error>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    ShortestPaths::on(graph).spfa().run(source)
}

/// Paths from `source` with the fewest edges, ignoring the weights.
pub fn bfs_shortest_path<V, W>(
    graph: &Graph<V, W>,
    source: &V,
) -> Result<ShortestPaths<V, usize>, UnknownVertexError>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    // Without a goal, the search can fail only on an unknown source.
    ShortestPaths::on(graph)
        .bfs()
        .run(source)
        .map_err(|_| UnknownVertexError)
}

/// Minimum spanning tree (or forest) using [Kruskal's
/// algorithm](spanning_tree::Algo::Kruskal).
pub fn kruskal<V, W>(graph: &Graph<V, W>) -> SpanningTree<V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    SpanningTree::from_raw(graph, spanning_tree::kruskal(graph))
}

/// Minimum spanning tree (or forest) using [Prim's
/// algorithm](spanning_tree::Algo::Prim), grown from the first vertex.
pub fn prim<V, W>(graph: &Graph<V, W>) -> SpanningTree<V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    SpanningTree::from_raw(graph, spanning_tree::prim(graph, None))
}

/// Topological order using [Kahn's algorithm](toposort::Algo::Kahn).
pub fn topological_sort<V, W>(graph: &Graph<V, W>) -> Result<Vec<V>, toposort::Error<V>>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    TopoSort::on(graph).run().into_vec()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn create_scenario_graph() -> Graph<&'static str, i32> {
        let mut graph = Graph::new_directed();
        graph.extend_with_vertices(["A", "B", "C", "D"]);
        graph
            .extend_with_edges([("A", "B", 1), ("B", "C", 2), ("A", "C", 5), ("C", "D", 1)])
            .unwrap();
        graph
    }

    #[test]
    fn shortest_path_functions_agree() {
        let graph = create_scenario_graph();

        let expected = [("A", 0), ("B", 1), ("C", 3), ("D", 4)];

        for paths in [
            dijkstra(&graph, &"A").unwrap(),
            bellman_ford(&graph, &"A").unwrap(),
            spfa(&graph, &"A").unwrap(),
        ] {
            for (v, dist) in expected {
                assert_eq!(paths.dist(&v), Some(&dist));
            }
        }

        let all = floyd_warshall(&graph).unwrap();
        for (v, dist) in expected {
            assert_eq!(all.dist(&"A", &v), Some(&dist));
        }
    }

    #[test]
    fn bfs_shortest_path_counts_edges() {
        let graph = create_scenario_graph();
        let paths = bfs_shortest_path(&graph, &"A").unwrap();

        assert_eq!(paths.dist(&"C"), Some(&1));
        assert_eq!(paths.dist(&"D"), Some(&2));
        assert_eq!(paths.path_to(&"D"), Some(vec!["A", "C", "D"]));

        assert_matches!(bfs_shortest_path(&graph, &"X"), Err(UnknownVertexError));
    }

    #[test]
    fn negative_cycle_functions() {
        let mut graph = create_scenario_graph();
        graph.add_edge(&"D", &"B", -4).unwrap();

        assert_matches!(
            bellman_ford(&graph, &"A"),
            Err(shortest_paths::Error::NegativeCycle)
        );
        assert_matches!(spfa(&graph, &"A"), Err(shortest_paths::Error::NegativeCycle));
        assert_matches!(
            dijkstra(&graph, &"A"),
            Err(shortest_paths::Error::NegativeWeight)
        );
    }

    #[test]
    fn spanning_tree_functions() {
        let mut graph = Graph::new_undirected();
        graph.extend_with_vertices(["A", "B", "C"]);
        graph
            .extend_with_edges([("A", "B", 4), ("B", "C", 2), ("A", "C", 5)])
            .unwrap();

        let tree = kruskal(&graph);
        assert_eq!(tree.edges(), &[("B", "C", 2), ("A", "B", 4)]);
        assert_eq!(tree.total_weight(), 6);

        let tree = prim(&graph);
        assert_eq!(tree.edges(), &[("A", "B", 4), ("B", "C", 2)]);
        assert_eq!(tree.total_weight(), 6);
    }

    #[test]
    fn topological_sort_function() {
        let graph = create_scenario_graph();
        assert_eq!(topological_sort(&graph), Ok(vec!["A", "B", "C", "D"]));

        let mut graph = graph;
        graph.add_edge(&"D", &"A", 1).unwrap();
        assert_matches!(topological_sort(&graph), Err(toposort::Error::Cycle { .. }));
    }
}
