use std::{hash::Hash, iter::FusedIterator};

use fixedbitset::FixedBitSet;

use crate::{
    common::VisitSet,
    core::{error::UnknownVertexError, weight::Weight},
    graph::Graph,
};

/// Depth-first traversal yielding vertex labels in preorder.
///
/// The order is the same as that of the textbook recursive formulation: the
/// neighbors of a vertex are explored one after another in edge insertion
/// order, each fully before the next one.
#[derive(Debug)]
pub struct Dfs<'a, V, W> {
    graph: &'a Graph<V, W>,
    raw: RawDfs,
}

impl<'a, V, W> Dfs<'a, V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    pub fn new(graph: &'a Graph<V, W>, root: &V) -> Result<Self, UnknownVertexError> {
        let root = graph.index_of(root).ok_or(UnknownVertexError)?;
        Ok(Self {
            graph,
            raw: RawDfs::new(graph.vertex_count(), root),
        })
    }

    /// Current depth of the traversal, that is, the length of the path from
    /// the root to the most recently visited vertex that still has
    /// unexplored edges.
    pub fn depth(&self) -> usize {
        self.raw.stack.len().saturating_sub(1)
    }

    /// Iterates over `(vertex, parent)` index pairs.
    pub(crate) fn into_raw(self) -> impl Iterator<Item = (usize, Option<usize>)> + 'a {
        let graph = self.graph;
        let mut raw = self.raw;
        std::iter::from_fn(move || raw.next(graph))
    }
}

impl<'a, V, W> Iterator for Dfs<'a, V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        self.raw.next(graph).map(|(v, _)| graph.label(v))
    }
}

impl<'a, V, W> FusedIterator for Dfs<'a, V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
}

/// Index-level depth-first search state.
#[derive(Debug)]
pub(crate) struct RawDfs {
    // Vertex and the position of its next unexplored outgoing edge.
    stack: Vec<(usize, usize)>,
    visited: FixedBitSet,
    root: Option<usize>,
}

impl RawDfs {
    pub fn new(vertex_count: usize, root: usize) -> Self {
        Self {
            stack: Vec::new(),
            visited: FixedBitSet::with_capacity(vertex_count),
            root: Some(root),
        }
    }

    pub fn next<V, W>(&mut self, graph: &Graph<V, W>) -> Option<(usize, Option<usize>)>
    where
        V: Eq + Hash + Clone,
        W: Weight,
    {
        if let Some(root) = self.root.take() {
            self.visited.visit(root);
            self.stack.push((root, 0));
            return Some((root, None));
        }

        while let Some((u, pos)) = self.stack.last_mut() {
            let u = *u;

            match graph.outgoing[u].get(*pos) {
                Some(&(v, _)) => {
                    *pos += 1;

                    if self.visited.visit(v) {
                        self.stack.push((v, 0));
                        return Some((v, Some(u)));
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::infra::testing::create_complete;

    use super::*;

    #[test]
    fn preorder_follows_edge_order() {
        let mut graph = Graph::new_directed();
        graph.extend_with_vertices(["r", "a", "b", "a1", "a2", "b1"]);
        graph
            .extend_with_edges([
                ("r", "a", 1),
                ("r", "b", 1),
                ("a", "a1", 1),
                ("a", "a2", 1),
                ("b", "b1", 1),
                ("a2", "r", 1),
            ])
            .unwrap();

        let order = Dfs::new(&graph, &"r").unwrap().copied().collect::<Vec<_>>();
        assert_eq!(order, vec!["r", "a", "a1", "a2", "b", "b1"]);
    }

    #[test]
    fn complete_graph_goes_deep() {
        let graph = create_complete(5, false, |_, _| 1u32);

        let mut dfs = Dfs::new(&graph, &0).unwrap();
        let order = dfs.by_ref().copied().collect::<Vec<_>>();

        assert_eq!(order, vec![0, 1, 2, 3, 4]);
        assert_eq!(dfs.depth(), 0);
        assert_eq!(dfs.next(), None);
    }

    #[test]
    fn depth_tracks_stack() {
        let graph = create_complete(4, true, |_, _| 1u32);

        let mut dfs = Dfs::new(&graph, &0).unwrap();
        dfs.next();
        dfs.next();
        dfs.next();

        assert_eq!(dfs.depth(), 2);
    }

    #[test]
    fn unknown_root() {
        let graph = Graph::<u8, u8>::new_directed();
        assert_matches!(Dfs::new(&graph, &0), Err(UnknownVertexError));
    }
}
