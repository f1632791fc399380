use std::fmt;

use thiserror::Error;

/// An operation referenced a vertex that was never added to the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("vertex does not exist")]
pub struct UnknownVertexError;

#[derive(Debug, Error, PartialEq)]
#[error("adding edge failed: {kind}")]
pub struct AddEdgeError<W> {
    /// The weight that could not be stored, handed back to the caller.
    pub weight: W,
    pub kind: AddEdgeErrorKind,
}

impl<W> AddEdgeError<W> {
    pub fn new(weight: W, kind: AddEdgeErrorKind) -> Self {
        Self { weight, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    SourceAbsent,
    DestinationAbsent,
}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddEdgeErrorKind::SourceAbsent => "source does not exist",
            AddEdgeErrorKind::DestinationAbsent => "destination does not exist",
        };
        f.write_str(reason)
    }
}

impl<W> From<AddEdgeError<W>> for UnknownVertexError {
    fn from(_: AddEdgeError<W>) -> Self {
        UnknownVertexError
    }
}

/// Extraction attempted on an empty [heap](crate::common::BinaryHeap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("heap is empty")]
pub struct EmptyHeapError;

/// A [disjoint-set forest](crate::common::DisjointSetForest) query on an
/// element that was never registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("element is not registered in any set")]
pub struct UnknownElementError;
