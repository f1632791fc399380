use std::hash::Hash;

use fixedbitset::FixedBitSet;

use crate::{
    common::{MinHeap, VisitSet},
    core::weight::{Weight, Weighted},
    graph::Graph,
};

use super::{Error, RawShortestPaths};

pub fn dijkstra<V, W>(
    graph: &Graph<V, W>,
    source: usize,
    goal: Option<usize>,
) -> Result<RawShortestPaths<W>, Error>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    let n = graph.vertex_count();

    let mut visited = FixedBitSet::with_capacity(n);
    let mut paths = RawShortestPaths::new(n, source, W::zero());
    let mut queue = MinHeap::new();

    queue.insert(Weighted(source, W::zero()));

    while let Some(Weighted(vertex, _)) = queue.pop() {
        // This can happen due to duplication of vertices when doing relaxation
        // in our implementation.
        if visited.is_visited(&vertex) {
            continue;
        }

        // The vertex is finished.
        visited.visit(vertex);

        if goal == Some(vertex) {
            break;
        }

        for (next, weight) in graph.successors_of(vertex) {
            // The check for unsignedness should eliminate the negativity check,
            // because the implementation of `is_unsigned` method is always a
            // constant boolean in practice.
            if weight.is_negative() {
                return Err(Error::NegativeWeight);
            }

            if visited.is_visited(&next) {
                continue;
            }

            // A textbook version of the algorithm would update the priority
            // of `next`. Adding it as a new item causes duplicities which is
            // unfortunate for dense graphs, but should be fine in practice.
            if paths.relax(vertex, next, weight) {
                if let Some(next_dist) = paths.dist[next].clone() {
                    queue.insert(Weighted(next, next_dist));
                }
            }
        }
    }

    if let Some(goal) = goal {
        if !visited.is_visited(&goal) {
            return Err(Error::GoalNotReached);
        }
    }

    // Tentative distances of vertices not finished due to early termination
    // are not reported.
    for (v, dist) in paths.dist.iter_mut().enumerate() {
        if !visited.is_visited(&v) {
            *dist = None;
            paths.pred[v] = None;
        }
    }

    debug!(finished = visited.visited_count(), "dijkstra");

    Ok(paths)
}
