use std::hash::Hash;

use thiserror::Error;

use crate::{core::weight::Weight, graph::Graph};

/// Creates a complete graph on vertices `0..vertex_count` where the edge
/// between `u` and `v` has weight `weight(u, v)`.
pub fn create_complete<W, F>(vertex_count: usize, directed: bool, weight: F) -> Graph<usize, W>
where
    W: Weight,
    F: Fn(usize, usize) -> W,
{
    let edge_count = if directed {
        vertex_count * vertex_count.saturating_sub(1)
    } else {
        vertex_count * vertex_count.saturating_sub(1) / 2
    };

    let mut graph = Graph::with_capacity(directed, vertex_count, edge_count);
    graph.extend_with_vertices(0..vertex_count);

    for u in 0..vertex_count {
        for v in 0..vertex_count {
            if u == v || (!directed && v < u) {
                continue;
            }

            // Both endpoints exist.
            let _ = graph.add_edge(&u, &v, weight(u, v));
        }
    }

    graph
}

/// Creates a path `0 - 1 - ... - (vertex_count - 1)` with unit weights.
pub fn create_path<W: Weight>(vertex_count: usize, directed: bool) -> Graph<usize, W> {
    let mut graph = Graph::with_capacity(directed, vertex_count, vertex_count.saturating_sub(1));
    graph.extend_with_vertices(0..vertex_count);

    for v in 1..vertex_count {
        let _ = graph.add_unweighted_edge(&(v - 1), &v);
    }

    graph
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("label map size ({0}) is not equal to vertex count ({1})")]
    LabelMapVertexCountMismatch(usize, usize),
    #[error("label of vertex {0} (zero-based) maps to a different vertex")]
    LabelMapInvalid(usize),
    #[error("adjacency list count ({0}) is not equal to vertex count ({1})")]
    AdjacencyVertexCountMismatch(usize, usize),
    #[error("edge lookup size ({0}) is not equal to edge count ({1})")]
    LookupEdgeCountMismatch(usize, usize),
    #[error("edge {0} (zero-based) is not found by its endpoints")]
    LookupInvalid(usize),
    #[error("adjacency entry of vertex {0} (zero-based) refers to edge {1} with other endpoints")]
    AdjacencyInvalid(usize, usize),
    #[error("sum of degrees ({0}) is not equal to doubled edge count ({1})")]
    HandshakingLemma(usize, usize),
    #[error("sum of in degrees ({0}) is not equal to sum of out degrees ({1})")]
    HandshakingLemmaDirected(usize, usize),
}

/// Checks the internal invariants of a graph.
pub fn check_consistency<V, W>(graph: &Graph<V, W>) -> Result<(), ConsistencyCheckError>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    let n = graph.vertex_count();
    let m = graph.edge_count();

    if graph.index.len() != n {
        return Err(ConsistencyCheckError::LabelMapVertexCountMismatch(
            graph.index.len(),
            n,
        ));
    }

    if let Some(i) = (0..n).find(|&i| graph.index_of(graph.label(i)) != Some(i)) {
        return Err(ConsistencyCheckError::LabelMapInvalid(i));
    }

    let expected_incoming = if graph.is_directed() { n } else { 0 };
    if graph.outgoing.len() != n || graph.incoming.len() != expected_incoming {
        return Err(ConsistencyCheckError::AdjacencyVertexCountMismatch(
            graph.outgoing.len(),
            n,
        ));
    }

    if graph.lookup.len() != m {
        return Err(ConsistencyCheckError::LookupEdgeCountMismatch(
            graph.lookup.len(),
            m,
        ));
    }

    for (e, edge) in graph.edges.iter().enumerate() {
        let src = graph.label(edge.src);
        let dst = graph.label(edge.dst);

        if graph.edge(src, dst) != Some(&edge.weight) {
            return Err(ConsistencyCheckError::LookupInvalid(e));
        }
    }

    for u in 0..n {
        for &(v, e) in graph.outgoing[u].iter() {
            let edge = &graph.edges[e];
            let matches = (edge.src == u && edge.dst == v)
                || (!graph.is_directed() && edge.src == v && edge.dst == u);

            if !matches {
                return Err(ConsistencyCheckError::AdjacencyInvalid(u, e));
            }
        }

        if graph.is_directed() {
            for &(v, e) in graph.incoming[u].iter() {
                let edge = &graph.edges[e];

                if edge.src != v || edge.dst != u {
                    return Err(ConsistencyCheckError::AdjacencyInvalid(u, e));
                }
            }
        }
    }

    // https://en.wikipedia.org/wiki/Handshaking_lemma
    if graph.is_directed() {
        let in_deg_sum = (0..n).map(|u| graph.in_degree_of(u)).sum::<usize>();
        let out_deg_sum = (0..n).map(|u| graph.out_degree_of(u)).sum::<usize>();

        if in_deg_sum != m || out_deg_sum != m {
            return Err(ConsistencyCheckError::HandshakingLemmaDirected(
                in_deg_sum,
                out_deg_sum,
            ));
        }
    } else {
        let deg_sum = (0..n).map(|u| graph.degree_of(u)).sum::<usize>();

        if deg_sum != 2 * m {
            return Err(ConsistencyCheckError::HandshakingLemma(deg_sum, 2 * m));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_graph_edge_count() {
        let undirected = create_complete(5, false, |_, _| 1u32);
        let directed = create_complete(5, true, |_, _| 1u32);

        assert_eq!(undirected.edge_count(), 10);
        assert_eq!(directed.edge_count(), 20);
        check_consistency(&undirected).unwrap();
        check_consistency(&directed).unwrap();
    }

    #[test]
    fn path_graph() {
        let graph = create_path::<u32>(4, true);

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edge(&2, &3), Some(&1));
        check_consistency(&graph).unwrap();

        let empty = create_path::<u32>(0, false);
        assert!(empty.is_empty());
    }

    #[test]
    fn detects_broken_lookup() {
        let mut graph = create_path::<u32>(3, false);
        graph.lookup.clear();

        assert_eq!(
            check_consistency(&graph),
            Err(ConsistencyCheckError::LookupEdgeCountMismatch(0, 2))
        );
    }
}
