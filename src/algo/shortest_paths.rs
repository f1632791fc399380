//! Find [single source shortest paths] and their distances in a graph.
//!
//! See available parameters [here](ShortestPathsBuilder#implementations).
//!
//! Note that more efficient algorithms can be applied if the edges do not have
//! negative weights. If nonnegative weights can be guaranteed at compile
//! time, use an [unsigned type](crate::core::weight::Weight::is_unsigned)
//! like `u8`, `u32` or `usize`.
//!
//! [single source shortest paths]:
//!     https://en.wikipedia.org/wiki/Shortest_path_problem#Single-source_shortest_paths
//!
//! # Examples
//!
//! ```
//! use algokit::{algo::ShortestPaths, Graph};
//!
//! let mut graph = Graph::new_undirected();
//!
//! graph.extend_with_vertices([
//!     "Prague",
//!     "Bratislava",
//!     "Vienna",
//!     "Munich",
//!     "Nuremberg",
//!     "Florence",
//!     "Rome",
//! ]);
//!
//! graph
//!     .extend_with_edges([
//!         ("Prague", "Bratislava", 328u32),
//!         ("Prague", "Nuremberg", 297),
//!         ("Prague", "Vienna", 293),
//!         ("Bratislava", "Vienna", 79),
//!         ("Nuremberg", "Munich", 170),
//!         ("Vienna", "Munich", 402),
//!         ("Vienna", "Florence", 863),
//!         ("Munich", "Florence", 646),
//!         ("Florence", "Rome", 278),
//!     ])
//!     .unwrap();
//!
//! let shortest_paths = ShortestPaths::on(&graph)
//!     .goal(&"Prague")
//!     .run(&"Rome")
//!     .unwrap();
//!
//! assert_eq!(shortest_paths[&"Prague"], 1391);
//! assert_eq!(
//!     shortest_paths.path_to(&"Prague"),
//!     Some(vec!["Rome", "Florence", "Munich", "Nuremberg", "Prague"])
//! );
//! ```

use std::{hash::Hash, ops::Index};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{core::weight::Weight, graph::Graph};

mod bellman_ford;
mod bfs;
mod builder;
mod dijkstra;
mod spfa;

pub use builder::ShortestPathsBuilder;

pub(crate) use self::{
    bellman_ford::bellman_ford, bfs::bfs, dijkstra::dijkstra, spfa::spfa,
};

/// Shortest paths and their distances from a single source vertex.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<V, W>
where
    V: Eq + Hash,
{
    source: V,
    dist: FxHashMap<V, W>,
    pred: FxHashMap<V, V>,
}

impl<V, W> ShortestPaths<V, W>
where
    V: Eq + Hash + Clone,
{
    /// Converts per-index results into a table keyed by vertex labels.
    /// Unreachable vertices are left out.
    pub(crate) fn from_raw<E: Weight>(
        graph: &Graph<V, E>,
        source: usize,
        raw: RawShortestPaths<W>,
    ) -> Self {
        let RawShortestPaths { dist, pred } = raw;

        let dist = dist
            .into_iter()
            .enumerate()
            .filter_map(|(v, d)| d.map(|d| (graph.label(v).clone(), d)))
            .collect();

        let pred = pred
            .into_iter()
            .enumerate()
            .filter_map(|(v, p)| p.map(|u| (graph.label(v).clone(), graph.label(u).clone())))
            .collect();

        Self {
            source: graph.label(source).clone(),
            dist,
            pred,
        }
    }

    /// Source vertex where the search was started.
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Returns the path distance between the source vertex and the given
    /// vertex, or `None` if it's not known.
    ///
    /// There are two causes why the distance between two vertices is not
    /// known: (1) the vertices are not connected, or (2) the
    /// [goal](ShortestPathsBuilder::goal) was reached before visiting the
    /// given vertex.
    pub fn dist(&self, to: &V) -> Option<&W> {
        self.dist.get(to)
    }

    /// Returns an iterator over vertices on the path between the given vertex
    /// and the source vertex, in this order, excluding the given vertex
    /// itself. The iterator is empty if the path is not known.
    pub fn reconstruct(&self, to: &V) -> PathReconstruction<'_, V> {
        PathReconstruction {
            curr: to.clone(),
            pred: &self.pred,
        }
    }

    /// Returns the vertices on the shortest path from the source to the given
    /// vertex, both ends included, or `None` if the vertex was not reached.
    pub fn path_to(&self, to: &V) -> Option<Vec<V>> {
        if !self.dist.contains_key(to) {
            return None;
        }

        let mut path = vec![to.clone()];
        path.extend(self.reconstruct(to));
        path.reverse();
        Some(path)
    }

    /// Iterates over all vertices with known distance, in no particular
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &W)> + '_ {
        self.dist.iter()
    }

    /// Number of vertices with known distance, including the source.
    pub fn reached_count(&self) -> usize {
        self.dist.len()
    }
}

impl<V, W> Index<&V> for ShortestPaths<V, W>
where
    V: Eq + Hash + Clone,
{
    type Output = W;

    /// # Panics
    ///
    /// Panics if the distance to the vertex is not known.
    fn index(&self, index: &V) -> &Self::Output {
        match self.dist(index) {
            Some(dist) => dist,
            None => panic!("vertex not reached"),
        }
    }
}

/// Distances and predecessors over vertex indices.
pub(crate) struct RawShortestPaths<W> {
    pub dist: Vec<Option<W>>,
    pub pred: Vec<Option<usize>>,
}

impl<W: Clone> RawShortestPaths<W> {
    pub fn new(vertex_count: usize, source: usize, zero: W) -> Self {
        let mut dist = vec![None; vertex_count];
        dist[source] = Some(zero);

        Self {
            dist,
            pred: vec![None; vertex_count],
        }
    }
}

impl<W: Weight> RawShortestPaths<W> {
    /// Relaxes the edge `u -> v`. Returns `true` if the distance of `v`
    /// improved.
    pub fn relax(&mut self, u: usize, v: usize, weight: &W) -> bool {
        let Some(u_dist) = &self.dist[u] else {
            return false;
        };

        let next = u_dist.clone() + weight.clone();
        let better = match &self.dist[v] {
            Some(v_dist) => next < *v_dist,
            None => true,
        };

        if better {
            trace!(from = u, to = v, dist = ?next, "relax");
            self.dist[v] = Some(next);
            self.pred[v] = Some(u);
        }

        better
    }
}

/// Algorithm for [`ShortestPaths`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Algo {
    /// [Dijkstra's
    /// algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
    ///
    /// Dijkstra's algorithm is a popular method on a graph with non-negative
    /// edge weights. It operates by iteratively selecting the vertex with the
    /// smallest known distance from the source and updating the distances of
    /// its neighbors.
    ///
    /// Fails with [`Error::NegativeWeight`] as soon as it meets an edge with
    /// negative weight.
    ///
    /// # Use cases
    ///
    /// * Finding the shortest path in road networks.
    /// * Optimizing routing in communication networks.
    /// * Navigation and GPS systems.
    Dijkstra,

    /// [Bellman–Ford
    /// algorithm](https://en.wikipedia.org/wiki/Bellman%E2%80%93Ford_algorithm).
    ///
    /// The Bellman-Ford algorithm can handle graphs with negative edge weights
    /// and can detect negative weight cycles in a graph. However, it is
    /// generally slower than Dijkstra's algorithm.
    ///
    /// # Use cases
    ///
    /// * Finding shortest paths in graphs that may contain negative weight
    ///   edges.
    /// * Detecting negative weight cycles in financial models.
    /// * Network routing protocols like RIP (Routing Information Protocol).
    BellmanFord,

    /// [Shortest Path Faster
    /// Algorithm](https://en.wikipedia.org/wiki/Shortest_path_faster_algorithm).
    ///
    /// A queue-based improvement of Bellman-Ford that only revisits vertices
    /// whose distance changed. Same worst case, usually much faster on
    /// sparse graphs.
    Spfa,
}

mod algo {
    use super::Algo;

    #[derive(Debug)]
    pub struct AnyAlgo;

    #[derive(Debug)]
    pub struct SpecificAlgo(pub Option<Algo>);

    #[derive(Debug)]
    pub struct Bfs;
}

/// The error encountered during a [`ShortestPaths`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The source or the goal vertex does not exist.
    #[error("vertex does not exist")]
    UnknownVertex,

    /// An edge with negative weight encountered.
    #[error("edge with negative weight encountered")]
    NegativeWeight,

    /// A negative cycle encountered.
    #[error("negative cycle encountered")]
    NegativeCycle,

    /// The specified goal not reached.
    #[error("specified goal not reached")]
    GoalNotReached,
}

/// Iterator over the vertices on the path from a vertex to the source vertex.
///
/// Returned by [`ShortestPaths::reconstruct`].
pub struct PathReconstruction<'a, V> {
    curr: V,
    pred: &'a FxHashMap<V, V>,
}

impl<'a, V> Iterator for PathReconstruction<'a, V>
where
    V: Eq + Hash + Clone,
{
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr = self.pred.get(&self.curr).cloned()?;
        Some(self.curr.clone())
    }
}
