//! Labeled graph, directed or undirected, with weighted edges.
//!
//! Vertices are identified by labels of any hashable type. Every vertex keeps
//! a list of its incident edges in insertion order, and a hash map from
//! endpoint pairs to edges makes [`Graph::edge`] lookups _O(1)_ on average.
//!
//! Internally, vertices are numbered densely in insertion order. Algorithms
//! use these numbers to index arrays and bit sets instead of hashing labels
//! over and over again.
//!
//! # Examples
//!
//! ```
//! use algokit::Graph;
//!
//! let mut graph = Graph::new_undirected();
//!
//! graph.add_vertex("a");
//! graph.add_vertex("b");
//! graph.add_vertex("c");
//!
//! graph.add_edge(&"a", &"b", 4).unwrap();
//! graph.add_edge(&"b", &"c", 2).unwrap();
//!
//! // Undirected edges are symmetric.
//! assert_eq!(graph.edge(&"b", &"a"), Some(&4));
//! assert_eq!(graph.edge(&"a", &"c"), None);
//!
//! let neighbors = graph
//!     .neighbors(&"b")
//!     .unwrap()
//!     .map(|(v, w)| (*v, *w))
//!     .collect::<Vec<_>>();
//! assert_eq!(neighbors, vec![("a", 4), ("c", 2)]);
//! ```

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::core::{
    error::{AddEdgeError, AddEdgeErrorKind, UnknownVertexError},
    weight::Weight,
};

mod edges;
mod neighbors;

pub use edges::{EdgeRef, Edges};
pub use neighbors::Neighbors;

/// Stored edge between two vertex indices.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct EdgeData<W> {
    pub src: usize,
    pub dst: usize,
    pub weight: W,
}

/// Entry of an adjacency list: the vertex on the other end and the edge.
pub(crate) type Adjacent = (usize, usize);

/// Labeled graph with weighted edges.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct Graph<V, W = i64> {
    directed: bool,
    pub(crate) vertices: Vec<V>,
    pub(crate) index: FxHashMap<V, usize>,
    pub(crate) edges: Vec<EdgeData<W>>,
    // Endpoints are ordered for directed graphs and sorted for undirected.
    pub(crate) lookup: FxHashMap<(usize, usize), usize>,
    pub(crate) outgoing: Vec<Vec<Adjacent>>,
    // Unused for undirected graphs, where outgoing lists are symmetric.
    pub(crate) incoming: Vec<Vec<Adjacent>>,
}

impl<V, W> Graph<V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    /// Creates an empty graph. The directedness can't be changed later.
    pub fn new(directed: bool) -> Self {
        Self::with_capacity(directed, 0, 0)
    }

    pub fn new_directed() -> Self {
        Self::new(true)
    }

    pub fn new_undirected() -> Self {
        Self::new(false)
    }

    pub fn with_capacity(directed: bool, vertex_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            directed,
            vertices: Vec::with_capacity(vertex_capacity),
            index: FxHashMap::with_capacity_and_hasher(vertex_capacity, Default::default()),
            edges: Vec::with_capacity(edge_capacity),
            lookup: FxHashMap::with_capacity_and_hasher(edge_capacity, Default::default()),
            outgoing: Vec::with_capacity(vertex_capacity),
            incoming: Vec::new(),
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains_vertex(&self, label: &V) -> bool {
        self.index.contains_key(label)
    }

    /// Adds a vertex. Adding a label that is already present is a no-op and
    /// returns `false`.
    pub fn add_vertex(&mut self, label: V) -> bool {
        if self.index.contains_key(&label) {
            return false;
        }

        let i = self.vertices.len();
        self.index.insert(label.clone(), i);
        self.vertices.push(label);
        self.outgoing.push(Vec::new());

        if self.directed {
            self.incoming.push(Vec::new());
        }

        true
    }

    pub fn extend_with_vertices<I>(&mut self, labels: I)
    where
        I: IntoIterator<Item = V>,
    {
        for label in labels {
            self.add_vertex(label);
        }
    }

    /// Adds an edge between two existing vertices.
    ///
    /// If the edge already exists, its weight is overwritten and the previous
    /// one is returned. For undirected graphs, `(a, b)` and `(b, a)` are the
    /// same edge.
    pub fn add_edge(&mut self, src: &V, dst: &V, weight: W) -> Result<Option<W>, AddEdgeError<W>> {
        let Some(&u) = self.index.get(src) else {
            return Err(AddEdgeError::new(weight, AddEdgeErrorKind::SourceAbsent));
        };
        let Some(&v) = self.index.get(dst) else {
            return Err(AddEdgeError::new(weight, AddEdgeErrorKind::DestinationAbsent));
        };

        let key = self.key(u, v);

        if let Some(&e) = self.lookup.get(&key) {
            let previous = std::mem::replace(&mut self.edges[e].weight, weight);
            return Ok(Some(previous));
        }

        let e = self.edges.len();
        self.edges.push(EdgeData {
            src: u,
            dst: v,
            weight,
        });
        self.lookup.insert(key, e);

        self.outgoing[u].push((v, e));
        if self.directed {
            self.incoming[v].push((u, e));
        } else if u != v {
            self.outgoing[v].push((u, e));
        }

        Ok(None)
    }

    /// Adds an edge with the [unit weight](Weight::one).
    pub fn add_unweighted_edge(&mut self, src: &V, dst: &V) -> Result<Option<W>, AddEdgeError<W>> {
        self.add_edge(src, dst, W::one())
    }

    pub fn extend_with_edges<I>(&mut self, edges: I) -> Result<(), AddEdgeError<W>>
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        for (src, dst, weight) in edges {
            self.add_edge(&src, &dst, weight)?;
        }

        Ok(())
    }

    /// Returns the weight of the edge from `src` to `dst`, or `None` if there
    /// is no such edge (including the case when a vertex does not exist).
    pub fn edge(&self, src: &V, dst: &V) -> Option<&W> {
        let u = self.index_of(src)?;
        let v = self.index_of(dst)?;
        self.lookup
            .get(&self.key(u, v))
            .map(|&e| &self.edges[e].weight)
    }

    /// Returns the outgoing neighbors of a vertex together with the weights of
    /// the connecting edges, in the order the edges were added.
    ///
    /// For undirected graphs, these are all adjacent vertices.
    pub fn neighbors(&self, label: &V) -> Result<Neighbors<'_, V, W>, UnknownVertexError> {
        let u = self.index_of(label).ok_or(UnknownVertexError)?;
        Ok(Neighbors::new(self, &self.outgoing[u]))
    }

    /// Returns the vertices with an edge to the given vertex.
    ///
    /// For undirected graphs, this is the same as
    /// [`neighbors`](Graph::neighbors).
    pub fn predecessors(&self, label: &V) -> Result<Neighbors<'_, V, W>, UnknownVertexError> {
        let u = self.index_of(label).ok_or(UnknownVertexError)?;
        Ok(Neighbors::new(self, self.incoming_list(u)))
    }

    /// Iterates over vertex labels in insertion order.
    pub fn vertices(&self) -> std::slice::Iter<'_, V> {
        self.vertices.iter()
    }

    /// Iterates over all edges in insertion order. Undirected edges are
    /// reported once, with the endpoints in the order they were first added.
    pub fn edges(&self) -> Edges<'_, V, W> {
        Edges::new(self)
    }

    pub fn out_degree(&self, label: &V) -> Result<usize, UnknownVertexError> {
        let u = self.index_of(label).ok_or(UnknownVertexError)?;
        Ok(self.out_degree_of(u))
    }

    pub fn in_degree(&self, label: &V) -> Result<usize, UnknownVertexError> {
        let u = self.index_of(label).ok_or(UnknownVertexError)?;
        Ok(self.in_degree_of(u))
    }

    /// Number of edge endpoints at the vertex. A self-loop counts twice.
    pub fn degree(&self, label: &V) -> Result<usize, UnknownVertexError> {
        let u = self.index_of(label).ok_or(UnknownVertexError)?;
        Ok(self.degree_of(u))
    }

    pub(crate) fn index_of(&self, label: &V) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub(crate) fn label(&self, u: usize) -> &V {
        &self.vertices[u]
    }

    /// Edges leaving the vertex, as `(other end, weight)`.
    pub(crate) fn successors_of(&self, u: usize) -> impl Iterator<Item = (usize, &W)> + '_ {
        self.outgoing[u]
            .iter()
            .map(move |&(v, e)| (v, &self.edges[e].weight))
    }

    /// All incident edges regardless of direction, as `(other end, edge)`.
    /// An undirected self-loop is reported once.
    pub(crate) fn adjacent_of(&self, u: usize) -> impl Iterator<Item = Adjacent> + '_ {
        let incoming: &[Adjacent] = if self.directed {
            &self.incoming[u]
        } else {
            &[]
        };
        self.outgoing[u].iter().chain(incoming).copied()
    }

    pub(crate) fn incoming_list(&self, u: usize) -> &[Adjacent] {
        if self.directed {
            &self.incoming[u]
        } else {
            &self.outgoing[u]
        }
    }

    pub(crate) fn out_degree_of(&self, u: usize) -> usize {
        if self.directed {
            self.outgoing[u].len()
        } else {
            self.degree_of(u)
        }
    }

    pub(crate) fn in_degree_of(&self, u: usize) -> usize {
        if self.directed {
            self.incoming[u].len()
        } else {
            self.degree_of(u)
        }
    }

    pub(crate) fn degree_of(&self, u: usize) -> usize {
        if self.directed {
            self.outgoing[u].len() + self.incoming[u].len()
        } else {
            let loops = self.outgoing[u].iter().filter(|&&(v, _)| v == u).count();
            self.outgoing[u].len() + loops
        }
    }

    fn key(&self, u: usize, v: usize) -> (usize, usize) {
        if self.directed || u <= v {
            (u, v)
        } else {
            (v, u)
        }
    }
}

impl<V, W> Default for Graph<V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    /// Creates an empty undirected graph.
    fn default() -> Self {
        Self::new_undirected()
    }
}
