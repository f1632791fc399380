use std::{iter::FusedIterator, slice};

use super::{EdgeData, Graph};

/// Reference to an edge of a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRef<'a, V, W> {
    pub src: &'a V,
    pub dst: &'a V,
    pub weight: &'a W,
}

/// Iterator over all edges of a graph in insertion order.
///
/// Returned by [`Graph::edges`].
#[derive(Debug, Clone)]
pub struct Edges<'a, V, W> {
    vertices: &'a [V],
    inner: slice::Iter<'a, EdgeData<W>>,
}

impl<'a, V, W> Edges<'a, V, W> {
    pub(crate) fn new(graph: &'a Graph<V, W>) -> Self {
        Self {
            vertices: &graph.vertices,
            inner: graph.edges.iter(),
        }
    }
}

impl<'a, V, W> Iterator for Edges<'a, V, W> {
    type Item = EdgeRef<'a, V, W>;

    fn next(&mut self) -> Option<Self::Item> {
        let edge = self.inner.next()?;
        Some(EdgeRef {
            src: &self.vertices[edge.src],
            dst: &self.vertices[edge.dst],
            weight: &edge.weight,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V, W> ExactSizeIterator for Edges<'_, V, W> {}

impl<V, W> FusedIterator for Edges<'_, V, W> {}
