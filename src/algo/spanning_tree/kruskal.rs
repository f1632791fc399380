use std::hash::Hash;

use crate::{common::DisjointSets, core::weight::Weight, graph::Graph};

pub fn kruskal<V, W>(graph: &Graph<V, W>) -> Vec<(usize, usize, W)>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    let n = graph.vertex_count();

    // The sort is stable, so edges of equal weight are considered in the order
    // in which they were added.
    let mut edges = graph.edges.iter().collect::<Vec<_>>();
    edges.sort_by(|lhs, rhs| lhs.weight.cmp_weight(&rhs.weight));

    let mut sets = DisjointSets::new(n);
    let mut tree = Vec::with_capacity(n.saturating_sub(1));

    for edge in edges {
        // A tree on n vertices has n - 1 edges.
        if tree.len() + 1 >= n {
            break;
        }

        // Self-loops and edges closing a cycle fail to merge.
        if sets.union(edge.src, edge.dst) {
            trace!(from = edge.src, to = edge.dst, weight = ?edge.weight, "accept");
            tree.push((edge.src, edge.dst, edge.weight.clone()));
        }
    }

    tree
}
