//! Find shortest paths between all pairs of vertices using the
//! [Floyd–Warshall
//! algorithm](https://en.wikipedia.org/wiki/Floyd%E2%80%93Warshall_algorithm).
//!
//! The algorithm runs in _O(|V|³)_ time and needs _O(|V|²)_ memory regardless
//! of the number of edges, so it pays off for small or dense graphs. Negative
//! edge weights are supported as long as there is no negative cycle.
//!
//! # Examples
//!
//! ```
//! use algokit::{algo::floyd_warshall, Graph};
//!
//! let mut graph = Graph::new_directed();
//! graph.extend_with_vertices(["a", "b", "c"]);
//! graph
//!     .extend_with_edges([("a", "b", 4), ("b", "c", -2), ("a", "c", 3)])
//!     .unwrap();
//!
//! let paths = floyd_warshall(&graph).unwrap();
//!
//! assert_eq!(paths.dist(&"a", &"c"), Some(&2));
//! assert_eq!(paths.path(&"a", &"c"), Some(vec!["a", "b", "c"]));
//! assert_eq!(paths.dist(&"c", &"a"), None);
//! ```

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::{common::Matrix, core::weight::Weight, graph::Graph};

use super::shortest_paths::Error;

/// Shortest path distances between all pairs of vertices.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct AllPairsShortestPaths<V, W> {
    vertices: Vec<V>,
    index: FxHashMap<V, usize>,
    dist: Matrix<Option<W>>,
    // First hop on the shortest path from row to column.
    next: Matrix<Option<usize>>,
}

impl<V, W> AllPairsShortestPaths<V, W>
where
    V: Eq + Hash + Clone,
{
    /// Returns the distance from `from` to `to`, or `None` if there is no
    /// path or one of the vertices does not exist.
    pub fn dist(&self, from: &V, to: &V) -> Option<&W> {
        let (u, v) = (self.index_of(from)?, self.index_of(to)?);
        self.dist[(u, v)].as_ref()
    }

    /// Returns the vertices on the shortest path from `from` to `to`, both
    /// ends included, or `None` if there is no path.
    pub fn path(&self, from: &V, to: &V) -> Option<Vec<V>> {
        let (mut u, v) = (self.index_of(from)?, self.index_of(to)?);
        self.dist[(u, v)].as_ref()?;

        let mut path = vec![self.vertices[u].clone()];

        while u != v {
            u = self.next[(u, v)]?;
            path.push(self.vertices[u].clone());
        }

        Some(path)
    }

    /// Iterates over all pairs connected by a path, together with their
    /// distance, row by row in vertex insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &V, &W)> + '_ {
        self.dist.iter().filter_map(move |((u, v), dist)| {
            dist.as_ref()
                .map(|dist| (&self.vertices[u], &self.vertices[v], dist))
        })
    }

    fn index_of(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }
}

/// Computes shortest paths between all pairs of vertices.
///
/// Fails with [`Error::NegativeCycle`] if the graph contains a negative cycle.
/// In an undirected graph, any edge with negative weight is such a cycle.
pub fn floyd_warshall<V, W>(graph: &Graph<V, W>) -> Result<AllPairsShortestPaths<V, W>, Error>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    let n = graph.vertex_count();

    debug!(vertices = n, edges = graph.edge_count(), "floyd_warshall");

    let mut dist = Matrix::filled(n, None);
    let mut next = Matrix::filled(n, None);

    for v in 0..n {
        dist[(v, v)] = Some(W::zero());
        next[(v, v)] = Some(v);
    }

    let mut init = |u: usize, v: usize, weight: &W| {
        let better = match &dist[(u, v)] {
            Some(curr) => weight < curr,
            None => true,
        };

        if better {
            dist[(u, v)] = Some(weight.clone());
            next[(u, v)] = Some(v);
        }
    };

    for edge in graph.edges.iter() {
        init(edge.src, edge.dst, &edge.weight);

        if !graph.is_directed() {
            init(edge.dst, edge.src, &edge.weight);
        }
    }

    for k in 0..n {
        for i in 0..n {
            let Some(ik) = dist[(i, k)].clone() else {
                continue;
            };

            for j in 0..n {
                let Some(kj) = &dist[(k, j)] else {
                    continue;
                };

                let candidate = ik.clone() + kj.clone();
                let better = match &dist[(i, j)] {
                    Some(curr) => candidate < *curr,
                    None => true,
                };

                if better {
                    dist[(i, j)] = Some(candidate);
                    next[(i, j)] = next[(i, k)];
                }
            }
        }

        if dist.diagonal().any(|d| d.as_ref().is_some_and(Weight::is_negative)) {
            return Err(Error::NegativeCycle);
        }
    }

    Ok(AllPairsShortestPaths {
        vertices: graph.vertices.clone(),
        index: graph.index.clone(),
        dist,
        next,
    })
}
