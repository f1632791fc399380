use std::hash::Hash;

use fixedbitset::FixedBitSet;

use crate::{
    common::{MinHeap, VisitSet},
    core::weight::{Weight, Weighted},
    graph::Graph,
};

pub fn prim<V, W>(graph: &Graph<V, W>, root: Option<usize>) -> Vec<(usize, usize, W)>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    let n = graph.vertex_count();

    let mut visited = FixedBitSet::with_capacity(n);
    let mut tree = Vec::with_capacity(n.saturating_sub(1));
    let mut queue = MinHeap::new();

    // Start from the root and then from every vertex not reached yet, which
    // grows one tree per connected component.
    let starts = root.into_iter().chain(0..n);

    for start in starts {
        if visited.is_visited(&start) {
            continue;
        }

        trace!(start, "prim_tree");
        visited.visit(start);
        push_frontier(graph, start, &visited, &mut queue);

        while let Some(Weighted((from, to), weight)) = queue.pop() {
            // Cheaper edge to `to` was already taken.
            if visited.is_visited(&to) {
                continue;
            }

            visited.visit(to);
            tree.push((from, to, weight));
            push_frontier(graph, to, &visited, &mut queue);
        }
    }

    tree
}

fn push_frontier<V, W>(
    graph: &Graph<V, W>,
    vertex: usize,
    visited: &FixedBitSet,
    queue: &mut MinHeap<Weighted<(usize, usize), W>>,
) where
    V: Eq + Hash + Clone,
    W: Weight,
{
    for (next, edge) in graph.adjacent_of(vertex) {
        if !visited.is_visited(&next) {
            let weight = graph.edges[edge].weight.clone();
            queue.insert(Weighted((vertex, next), weight));
        }
    }
}
