//! Find an [Eulerian path], a walk that uses every edge exactly once.
//!
//! Such a path exists if and only if all vertices with at least one edge lie
//! in a single connected component (ignoring directions) and the degrees
//! allow it:
//!
//! * in an undirected graph, zero or two vertices have odd degree,
//! * in a directed graph, every vertex has equal in and out degrees, or
//!   exactly one vertex has one more outgoing edge than incoming (the start)
//!   and exactly one has one more incoming edge than outgoing (the end).
//!
//! The path is built by [Hierholzer's algorithm] in _O(|V| + |E|)_. A missing
//! path is not an error, the functions return `false` or `None` instead.
//!
//! [Eulerian path]: https://en.wikipedia.org/wiki/Eulerian_path
//! [Hierholzer's algorithm]: https://en.wikipedia.org/wiki/Eulerian_path#Hierholzer's_algorithm
//!
//! # Examples
//!
//! ```
//! use algokit::{
//!     algo::{euler_path, has_euler_path},
//!     Graph,
//! };
//!
//! let mut graph = Graph::new_directed();
//! graph.extend_with_vertices(["a", "b", "c", "d"]);
//! graph
//!     .extend_with_edges([("a", "b", 1), ("b", "c", 1), ("c", "a", 1), ("a", "d", 1)])
//!     .unwrap();
//!
//! assert!(has_euler_path(&graph));
//! assert_eq!(euler_path(&graph), Some(vec!["a", "b", "c", "a", "d"]));
//!
//! graph.add_edge(&"d", &"b", 1).unwrap();
//! graph.add_edge(&"d", &"c", 1).unwrap();
//! assert_eq!(euler_path(&graph), None);
//! ```

use std::hash::Hash;

use bitvec::prelude::*;

use crate::{common::DisjointSets, core::weight::Weight, graph::Graph};

/// Returns `true` if the graph has an Eulerian path.
pub fn has_euler_path<V, W>(graph: &Graph<V, W>) -> bool
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    graph.vertex_count() == 0 || find_start(graph).is_some()
}

/// Returns the vertices of an Eulerian path in the order of traversal, or
/// `None` if there is no such path.
///
/// The path starts at the vertex with odd degree (undirected) or with surplus
/// of outgoing edges (directed) if there is one, and at the first vertex with
/// an edge otherwise. For a graph without edges, the path consists of the
/// first vertex alone.
pub fn euler_path<V, W>(graph: &Graph<V, W>) -> Option<Vec<V>>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    if graph.vertex_count() == 0 {
        return Some(Vec::new());
    }

    let start = find_start(graph)?;
    let path = hierholzer(graph, start);

    debug!(start, len = path.len(), edges = graph.edge_count(), "euler_path");

    // Guaranteed by the degree and connectivity conditions.
    if path.len() != graph.edge_count() + 1 {
        return None;
    }

    Some(
        path.into_iter()
            .map(|v| graph.label(v).clone())
            .collect(),
    )
}

/// Checks the conditions of existence and returns the start vertex.
fn find_start<V, W>(graph: &Graph<V, W>) -> Option<usize>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    let n = graph.vertex_count();

    if !edges_connected(graph) {
        return None;
    }

    let first_with_edge = (0..n).find(|&v| graph.degree_of(v) > 0);

    let odd_start = if graph.is_directed() {
        let mut start = None;
        let mut end = None;

        for v in 0..n {
            let out_deg = graph.out_degree_of(v) as isize;
            let in_deg = graph.in_degree_of(v) as isize;

            match out_deg - in_deg {
                0 => {}
                1 if start.is_none() => start = Some(v),
                -1 if end.is_none() => end = Some(v),
                _ => return None,
            }
        }

        match (start, end) {
            (Some(start), Some(_)) => Some(start),
            (None, None) => None,
            _ => return None,
        }
    } else {
        let mut odd = (0..n).filter(|&v| graph.degree_of(v) % 2 == 1);

        match (odd.next(), odd.next(), odd.next()) {
            (Some(first), Some(_), None) => Some(first),
            (None, _, _) => None,
            _ => return None,
        }
    };

    // An edge-less graph is trivially traversed by its first vertex.
    odd_start.or(first_with_edge).or(Some(0))
}

/// All vertices with at least one edge are in a single component.
fn edges_connected<V, W>(graph: &Graph<V, W>) -> bool
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    let mut sets = DisjointSets::new(graph.vertex_count());

    for edge in graph.edges.iter() {
        sets.union(edge.src, edge.dst);
    }

    let mut roots = (0..graph.vertex_count())
        .filter(|&v| graph.degree_of(v) > 0)
        .map(|v| sets.find(v));

    match roots.next() {
        Some(root) => roots.all(|other| other == root),
        None => true,
    }
}

fn hierholzer<V, W>(graph: &Graph<V, W>, start: usize) -> Vec<usize>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    // Undirected edges are present in adjacency lists of both endpoints, the
    // mask ensures that each is walked only once.
    let mut used = bitvec![usize, Lsb0; 0; graph.edge_count()];
    let mut next_pos = vec![0; graph.vertex_count()];

    let mut stack = vec![start];
    let mut path = Vec::with_capacity(graph.edge_count() + 1);

    while let Some(&vertex) = stack.last() {
        let adjacent = &graph.outgoing[vertex];
        let pos = &mut next_pos[vertex];

        while *pos < adjacent.len() && used[adjacent[*pos].1] {
            *pos += 1;
        }

        match adjacent.get(*pos) {
            Some(&(next, edge)) => {
                used.set(edge, true);
                stack.push(next);
            }
            None => {
                // Dead end, the vertex is final in the remaining circuit.
                stack.pop();
                path.push(vertex);
            }
        }
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use std::fmt::Debug;

    use proptest::prelude::*;
    use rustc_hash::FxHashMap;

    use crate::infra::proptest::{graph_directed, graph_undirected};

    use super::*;

    fn assert_valid<V, W>(graph: &Graph<V, W>, path: &[V])
    where
        V: Eq + Hash + Clone + Debug,
        W: Weight,
    {
        if graph.vertex_count() == 0 {
            assert!(path.is_empty());
            return;
        }

        assert_eq!(path.len(), graph.edge_count() + 1);

        let key = |u: &V, v: &V| {
            let (u, v) = (graph.index_of(u).unwrap(), graph.index_of(v).unwrap());
            if graph.is_directed() || u <= v {
                (u, v)
            } else {
                (v, u)
            }
        };

        let mut used = FxHashMap::default();
        for pair in path.windows(2) {
            assert!(
                graph.edge(&pair[0], &pair[1]).is_some(),
                "{:?} -> {:?} is not an edge",
                pair[0],
                pair[1]
            );
            *used.entry(key(&pair[0], &pair[1])).or_insert(0) += 1;
        }

        assert_eq!(used.len(), graph.edge_count());
        assert!(used.values().all(|&count| count == 1));
    }

    #[test]
    fn undirected_open_path() {
        let mut graph = Graph::new_undirected();
        graph.extend_with_vertices(0..4);
        graph
            .extend_with_edges([(0, 1, 1), (1, 2, 1), (2, 0, 1), (2, 3, 1)])
            .unwrap();

        assert!(has_euler_path(&graph));
        assert_eq!(euler_path(&graph), Some(vec![2, 1, 0, 2, 3]));
    }

    #[test]
    fn undirected_circuit() {
        let mut graph = Graph::new_undirected();
        graph.extend_with_vertices(["a", "b", "c", "d", "e"]);
        graph
            .extend_with_edges([
                ("a", "b", 1),
                ("b", "c", 1),
                ("c", "a", 1),
                ("c", "d", 1),
                ("d", "e", 1),
                ("e", "c", 1),
            ])
            .unwrap();

        let path = euler_path(&graph).unwrap();

        assert_eq!(path.first(), Some(&"a"));
        assert_eq!(path.last(), Some(&"a"));
        assert_valid(&graph, &path);
    }

    #[test]
    fn undirected_too_many_odd() {
        let mut graph = Graph::new_undirected();
        graph.extend_with_vertices(0..4);
        graph
            .extend_with_edges([(0, 1, 1), (0, 2, 1), (0, 3, 1)])
            .unwrap();

        assert!(!has_euler_path(&graph));
        assert_eq!(euler_path(&graph), None);
    }

    #[test]
    fn undirected_self_loop() {
        let mut graph = Graph::new_undirected();
        graph.extend_with_vertices(0..2);
        graph.extend_with_edges([(0, 1, 1), (1, 1, 1)]).unwrap();

        let path = euler_path(&graph).unwrap();
        assert_eq!(path, vec![0, 1, 1]);
    }

    #[test]
    fn directed_unbalanced() {
        let mut graph = Graph::new_directed();
        graph.extend_with_vertices(0..3);
        graph.extend_with_edges([(0, 1, 1), (2, 1, 1)]).unwrap();

        // Vertex 1 has two more incoming edges than outgoing.
        assert!(!has_euler_path(&graph));
    }

    #[test]
    fn directed_circuit() {
        let mut graph = Graph::new_directed();
        graph.extend_with_vertices(0..3);
        graph
            .extend_with_edges([(0, 1, 1), (1, 2, 1), (2, 0, 1), (1, 1, 1)])
            .unwrap();

        let path = euler_path(&graph).unwrap();

        assert_eq!(path, vec![0, 1, 1, 2, 0]);
        assert_valid(&graph, &path);
    }

    #[test]
    fn disconnected_edges() {
        let mut graph = Graph::new_undirected();
        graph.extend_with_vertices(0..4);
        graph.extend_with_edges([(0, 1, 1), (2, 3, 1)]).unwrap();

        assert!(!has_euler_path(&graph));
        assert_eq!(euler_path(&graph), None);
    }

    #[test]
    fn isolated_vertices_ignored() {
        let mut graph = Graph::new_undirected();
        graph.extend_with_vertices(0..4);
        graph.add_edge(&1, &2, 1).unwrap();

        assert_eq!(euler_path(&graph), Some(vec![1, 2]));
    }

    #[test]
    fn without_edges() {
        let mut graph = Graph::<&str, u8>::new_directed();

        assert!(has_euler_path(&graph));
        assert_eq!(euler_path(&graph), Some(vec![]));

        graph.extend_with_vertices(["x", "y"]);

        assert!(has_euler_path(&graph));
        assert_eq!(euler_path(&graph), Some(vec!["x"]));
    }

    #[test]
    fn empty_graph_path_is_valid() {
        let graph = Graph::<u16, u8>::new_undirected();
        let path = euler_path(&graph).unwrap();

        assert!(path.is_empty());
        assert_valid(&graph, &path);

        let graph = Graph::<u16, u8>::new_directed();
        assert_valid(&graph, &euler_path(&graph).unwrap());
    }

    // Tries every trail by backtracking.
    fn brute_force_exists<V, W>(graph: &Graph<V, W>) -> bool
    where
        V: Eq + Hash + Clone,
        W: Weight,
    {
        fn extend<V, W>(graph: &Graph<V, W>, at: usize, used: &mut [bool], left: usize) -> bool
        where
            V: Eq + Hash + Clone,
            W: Weight,
        {
            if left == 0 {
                return true;
            }

            for (i, edge) in graph.edges.iter().enumerate() {
                if used[i] {
                    continue;
                }

                let next = if edge.src == at {
                    edge.dst
                } else if !graph.is_directed() && edge.dst == at {
                    edge.src
                } else {
                    continue;
                };

                used[i] = true;
                let found = extend(graph, next, used, left - 1);
                used[i] = false;

                if found {
                    return true;
                }
            }

            false
        }

        let mut used = vec![false; graph.edge_count()];
        graph.vertex_count() == 0
            || (0..graph.vertex_count()).any(|v| extend(graph, v, &mut used, graph.edge_count()))
    }

    fn assert_agrees_with_brute_force<W: Weight>(graph: &Graph<usize, W>) {
        let expected = brute_force_exists(graph);

        assert_eq!(has_euler_path(graph), expected);
        match euler_path(graph) {
            Some(path) => {
                assert!(expected);
                assert_valid(graph, &path);
            }
            None => assert!(!expected),
        }
    }

    #[test]
    fn existence_matches_brute_force_undirected() {
        // Every simple undirected graph on four vertices.
        let pairs = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

        for mask in 0u32..(1 << pairs.len()) {
            let mut graph = Graph::new_undirected();
            graph.extend_with_vertices(0..4);

            for (i, &(u, v)) in pairs.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    graph.add_edge(&u, &v, 1u8).unwrap();
                }
            }

            assert_agrees_with_brute_force(&graph);
        }
    }

    #[test]
    fn existence_matches_brute_force_directed() {
        // Every directed graph on three vertices, self-loops included.
        let pairs: Vec<_> = (0..3).flat_map(|u| (0..3).map(move |v| (u, v))).collect();

        for mask in 0u32..(1 << pairs.len()) {
            let mut graph = Graph::new_directed();
            graph.extend_with_vertices(0..3);

            for (i, &(u, v)) in pairs.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    graph.add_edge(&u, &v, 1u8).unwrap();
                }
            }

            assert_agrees_with_brute_force(&graph);
        }
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_euler_path_valid_undirected(graph in graph_undirected(any::<u16>(), Just(1u8)).max_size(12).allow_loops()) {
            match euler_path(&graph) {
                Some(path) => {
                    prop_assert!(has_euler_path(&graph));
                    assert_valid(&graph, &path);
                }
                None => prop_assert!(!has_euler_path(&graph)),
            }
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_euler_path_valid_directed(graph in graph_directed(any::<u16>(), Just(1u8)).max_size(12).allow_loops()) {
            match euler_path(&graph) {
                Some(path) => {
                    prop_assert!(has_euler_path(&graph));
                    assert_valid(&graph, &path);
                }
                None => prop_assert!(!has_euler_path(&graph)),
            }
        }
    }
}
