use std::{collections::VecDeque, hash::Hash, iter::FusedIterator};

use fixedbitset::FixedBitSet;

use crate::{
    common::VisitSet,
    core::{error::UnknownVertexError, weight::Weight},
    graph::Graph,
};

/// Breadth-first traversal yielding vertex labels in level order.
#[derive(Debug)]
pub struct Bfs<'a, V, W> {
    graph: &'a Graph<V, W>,
    raw: RawBfs,
}

impl<'a, V, W> Bfs<'a, V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    pub fn new(graph: &'a Graph<V, W>, root: &V) -> Result<Self, UnknownVertexError> {
        let root = graph.index_of(root).ok_or(UnknownVertexError)?;
        Ok(Self {
            graph,
            raw: RawBfs::new(graph.vertex_count(), root),
        })
    }

    /// Number of vertices discovered so far, including those not yet
    /// yielded.
    pub fn discovered_count(&self) -> usize {
        self.raw.visited.visited_count()
    }

    /// Iterates over `(vertex, parent)` index pairs.
    pub(crate) fn into_raw(self) -> impl Iterator<Item = (usize, Option<usize>)> + 'a {
        let graph = self.graph;
        let mut raw = self.raw;
        std::iter::from_fn(move || raw.next(graph))
    }
}

impl<'a, V, W> Iterator for Bfs<'a, V, W>
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

impl<'a, V, W> FusedIterator for Bfs<'a, V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
}

/// Index-level breadth-first search state.
#[derive(Debug)]
pub(crate) struct RawBfs {
    queue: VecDeque<(usize, Option<usize>)>,
    visited: FixedBitSet,
}

impl RawBfs {
    pub fn new(vertex_count: usize, root: usize) -> Self {
        let mut visited = FixedBitSet::with_capacity(vertex_count);
        visited.visit(root);

        let mut queue = VecDeque::new();
        queue.push_back((root, None));

        Self { queue, visited }
    }

    pub fn next<V, W>(&mut self, graph: &Graph<V, W>) -> Option<(usize, Option<usize>)>
    where
        V: Eq + Hash + Clone,
        W: Weight,
    {
        let (u, parent) = self.queue.pop_front()?;

        for (v, _) in graph.successors_of(u) {
            // Marked on discovery so that each vertex is queued at most once.
            if self.visited.visit(v) {
                self.queue.push_back((v, Some(u)));
            }
        }

        Some((u, parent))
    }
}
