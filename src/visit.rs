//! Lazy graph traversals.
//!
//! All traversals in this module are **iterative**, that is, they don't use
//! recursion. The traversal can be stopped at any point by simply dropping
//! the iterator, and it is not limited by the size of the program stack.
//!
//! Neighbors of a vertex are discovered in the order in which the connecting
//! edges were added.
//!
//! # Examples
//!
//! ```
//! use algokit::{visit::Dfs, Graph};
//!
//! let mut graph = Graph::new_directed();
//! graph.extend_with_vertices(["a", "b", "c", "d"]);
//! graph
//!     .extend_with_edges([("a", "b", 1), ("b", "d", 1), ("a", "c", 1), ("c", "a", 1)])
//!     .unwrap();
//!
//! let order = Dfs::new(&graph, &"a").unwrap().copied().collect::<Vec<_>>();
//! assert_eq!(order, vec!["a", "b", "d", "c"]);
//! ```

pub mod bfs;
pub mod dfs;

#[doc(inline)]
pub use self::{bfs::Bfs, dfs::Dfs};

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::{
    core::{error::UnknownVertexError, weight::Weight},
    graph::Graph,
};

/// Vertices reachable from a root in the order they were visited, together
/// with the edge through which each of them was discovered.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTree<V>
where
    V: Eq + Hash,
{
    root: V,
    order: Vec<V>,
    pred: FxHashMap<V, V>,
}

impl<V> SearchTree<V>
where
    V: Eq + Hash + Clone,
{
    fn build<W: Weight>(
        graph: &Graph<V, W>,
        visit: impl Iterator<Item = (usize, Option<usize>)>,
    ) -> Option<Self> {
        let mut order = Vec::new();
        let mut pred = FxHashMap::default();

        for (v, parent) in visit {
            let label = graph.label(v).clone();

            if let Some(u) = parent {
                pred.insert(label.clone(), graph.label(u).clone());
            }

            order.push(label);
        }

        let root = order.first()?.clone();
        Some(Self { root, order, pred })
    }

    pub fn root(&self) -> &V {
        &self.root
    }

    /// Visited vertices, starting with the root.
    pub fn order(&self) -> &[V] {
        &self.order
    }

    pub fn into_order(self) -> Vec<V> {
        self.order
    }

    /// Number of reached vertices, including the root.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, vertex: &V) -> bool {
        *vertex == self.root || self.pred.contains_key(vertex)
    }

    /// The vertex from which the given vertex was discovered. `None` for the
    /// root and for unreached vertices.
    pub fn parent(&self, vertex: &V) -> Option<&V> {
        self.pred.get(vertex)
    }

    /// Path along the tree edges from the root to the given vertex, or
    /// `None` if the vertex was not reached.
    pub fn path_to(&self, vertex: &V) -> Option<Vec<V>> {
        if !self.contains(vertex) {
            return None;
        }

        let mut path = vec![vertex.clone()];
        let mut current = vertex;

        while let Some(parent) = self.pred.get(current) {
            path.push(parent.clone());
            current = parent;
        }

        path.reverse();
        Some(path)
    }
}

/// Runs breadth-first search from `root` and returns the search tree.
pub fn breadth_first_search<V, W>(
    graph: &Graph<V, W>,
    root: &V,
) -> Result<SearchTree<V>, UnknownVertexError>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    let bfs = Bfs::new(graph, root)?;
    SearchTree::build(graph, bfs.into_raw()).ok_or(UnknownVertexError)
}

/// Runs depth-first search from `root` and returns the search tree with the
/// vertices in preorder.
pub fn depth_first_search<V, W>(
    graph: &Graph<V, W>,
    root: &V,
) -> Result<SearchTree<V>, UnknownVertexError>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    let dfs = Dfs::new(graph, root)?;
    SearchTree::build(graph, dfs.into_raw()).ok_or(UnknownVertexError)
}
