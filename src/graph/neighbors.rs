use std::{iter::FusedIterator, slice};

use super::{Adjacent, Graph};

/// Iterator over `(neighbor, weight)` pairs of a vertex.
///
/// Returned by [`Graph::neighbors`] and [`Graph::predecessors`]. Calling
/// these methods again starts a fresh pass.
#[derive(Debug, Clone)]
pub struct Neighbors<'a, V, W> {
    graph: &'a Graph<V, W>,
    inner: slice::Iter<'a, Adjacent>,
}

impl<'a, V, W> Neighbors<'a, V, W> {
    pub(crate) fn new(graph: &'a Graph<V, W>, list: &'a [Adjacent]) -> Self {
        Self {
            graph,
            inner: list.iter(),
        }
    }
}

impl<'a, V, W> Iterator for Neighbors<'a, V, W> {
    type Item = (&'a V, &'a W);

    fn next(&mut self) -> Option<Self::Item> {
        let &(v, e) = self.inner.next()?;
        Some((&self.graph.vertices[v], &self.graph.edges[e].weight))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V, W> ExactSizeIterator for Neighbors<'_, V, W> {}

impl<V, W> FusedIterator for Neighbors<'_, V, W> {}
