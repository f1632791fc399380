use std::{collections::VecDeque, hash::Hash};

use fixedbitset::FixedBitSet;

use crate::{core::weight::Weight, graph::Graph};

use super::{Error, RawShortestPaths};

pub fn spfa<V, W>(
    graph: &Graph<V, W>,
    source: usize,
    goal: Option<usize>,
) -> Result<RawShortestPaths<W>, Error>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    let n = graph.vertex_count();

    let mut paths = RawShortestPaths::new(n, source, W::zero());
    let mut queue = VecDeque::new();
    let mut in_queue = FixedBitSet::with_capacity(n);
    let mut enqueued = vec![0usize; n];

    queue.push_back(source);
    in_queue.insert(source);
    enqueued[source] = 1;

    while let Some(vertex) = queue.pop_front() {
        in_queue.set(vertex, false);

        for (next, weight) in graph.successors_of(vertex) {
            if !paths.relax(vertex, next, weight) || in_queue.contains(next) {
                continue;
            }

            // Without a negative cycle, the distances settle within |V| - 1
            // rounds and a vertex is enqueued at most once per round.
            enqueued[next] += 1;
            if enqueued[next] >= n.max(2) {
                return Err(Error::NegativeCycle);
            }

            queue.push_back(next);
            in_queue.insert(next);
        }
    }

    if let Some(goal) = goal {
        if paths.dist[goal].is_none() {
            return Err(Error::GoalNotReached);
        }
    }

    Ok(paths)
}
