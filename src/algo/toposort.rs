//! Find a [topological order] of the vertices of a directed acyclic graph.
//!
//! The order is computed lazily. If the graph contains a cycle, the iterator
//! yields [`Error::Cycle`] naming an edge on that cycle and stops. In an
//! undirected graph, every edge is a cycle of length two, so only edge-less
//! undirected graphs can be sorted.
//!
//! See available parameters [here](TopoSortBuilder#implementations).
//!
//! [topological order]: https://en.wikipedia.org/wiki/Topological_sorting
//!
//! # Examples
//!
//! ```
//! use algokit::{
//!     algo::{toposort::Error, TopoSort},
//!     Graph,
//! };
//!
//! let mut graph = Graph::new_directed();
//! graph.extend_with_vertices(["shirt", "tie", "jacket", "belt", "trousers"]);
//! graph
//!     .extend_with_edges([
//!         ("shirt", "tie", 1),
//!         ("tie", "jacket", 1),
//!         ("shirt", "belt", 1),
//!         ("belt", "jacket", 1),
//!         ("trousers", "belt", 1),
//!     ])
//!     .unwrap();
//!
//! let order = TopoSort::on(&graph).run().into_vec().unwrap();
//! assert_eq!(order, vec!["shirt", "trousers", "tie", "belt", "jacket"]);
//!
//! graph.add_unweighted_edge(&"jacket", &"shirt").unwrap();
//!
//! let result = TopoSort::on(&graph).run().into_vec();
//! assert!(matches!(result, Err(Error::Cycle { .. })));
//! ```

use std::{hash::Hash, iter::FusedIterator};

use thiserror::Error;

use crate::{core::weight::Weight, graph::Graph};

mod builder;
mod dfs;
mod kahn;

pub use builder::TopoSortBuilder;

use self::{dfs::DfsIter, kahn::KahnIter};

/// Lazy topological order of a graph.
///
/// See [module](self) documentation for more details and example.
pub struct TopoSort<'a, V, W> {
    inner: TopoSortInner<'a, V, W>,
}

enum TopoSortInner<'a, V, W> {
    Kahn(KahnIter<'a, V, W>),
    Dfs(DfsIter<'a, V, W>),
}

impl<'a, V, W> TopoSort<'a, V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    /// Collects the whole order, or the first error.
    pub fn into_vec(self) -> Result<Vec<V>, Error<V>> {
        self.collect()
    }
}

impl<'a, V, W> Iterator for TopoSort<'a, V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    type Item = Result<V, Error<V>>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = match &mut self.inner {
            TopoSortInner::Kahn(kahn) => kahn.next()?,
            TopoSortInner::Dfs(dfs) => dfs.next()?,
        };

        let graph = self.graph();

        Some(match next {
            Ok(vertex) => Ok(graph.label(vertex).clone()),
            Err((from, to)) => Err(Error::Cycle {
                from: graph.label(from).clone(),
                to: graph.label(to).clone(),
            }),
        })
    }
}

impl<'a, V, W> FusedIterator for TopoSort<'a, V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
}

impl<'a, V, W> TopoSort<'a, V, W> {
    fn graph(&self) -> &'a Graph<V, W> {
        match &self.inner {
            TopoSortInner::Kahn(kahn) => kahn.graph,
            TopoSortInner::Dfs(dfs) => dfs.graph,
        }
    }
}

/// Algorithm for [`TopoSort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Algo {
    /// [Kahn's
    /// algorithm](https://en.wikipedia.org/wiki/Topological_sorting#Kahn's_algorithm).
    ///
    /// Repeatedly removes a vertex with no remaining incoming edges. Vertices
    /// that are ready at the same time are reported in insertion order.
    Kahn,

    /// Traversal of the reversed graph in [depth-first
    /// search](https://en.wikipedia.org/wiki/Topological_sorting#Depth-first_search)
    /// manner, reporting each vertex once all of its predecessors are
    /// reported.
    Dfs,
}

mod algo {
    use super::Algo;

    #[derive(Debug)]
    pub struct AnyAlgo;

    #[derive(Debug)]
    pub struct SpecificAlgo(pub Option<Algo>);
}

/// The error encountered during a [`TopoSort`] run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error<V> {
    /// The graph contains a cycle going through the edge `from -> to`.
    #[error("graph contains a cycle")]
    Cycle { from: V, to: V },
}
