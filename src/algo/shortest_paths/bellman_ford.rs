use std::hash::Hash;

use crate::{core::weight::Weight, graph::Graph};

use super::{Error, RawShortestPaths};

pub fn bellman_ford<V, W>(
    graph: &Graph<V, W>,
    source: usize,
    goal: Option<usize>,
) -> Result<RawShortestPaths<W>, Error>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    let n = graph.vertex_count();
    let directed = graph.is_directed();

    let mut paths = RawShortestPaths::new(n, source, W::zero());
    let mut terminated_early = false;

    // Try to relax edges |V| - 1 times.
    for _ in 1..n {
        let mut relaxed = false;

        for edge in graph.edges.iter() {
            relaxed |= paths.relax(edge.src, edge.dst, &edge.weight);

            // Undirected edge is stored only once but can be used in both
            // directions.
            if !directed {
                relaxed |= paths.relax(edge.dst, edge.src, &edge.weight);
            }
        }

        // If no distance was improved, then subsequent iterations would not
        // improve as well. So we can terminate early.
        if !relaxed {
            debug!("bellman_ford_converged");
            terminated_early = true;
            break;
        }
    }

    // Check for negative cycles. If the main loop was terminated early, then
    // the absence of cycle is guaranteed.
    if !terminated_early {
        let improves = |u: usize, v: usize, weight: &W| match (&paths.dist[u], &paths.dist[v]) {
            (Some(u_dist), Some(v_dist)) => u_dist.clone() + weight.clone() < *v_dist,
            (Some(_), None) => true,
            (None, _) => false,
        };

        for edge in graph.edges.iter() {
            if improves(edge.src, edge.dst, &edge.weight)
                || (!directed && improves(edge.dst, edge.src, &edge.weight))
            {
                return Err(Error::NegativeCycle);
            }
        }
    }

    if let Some(goal) = goal {
        if paths.dist[goal].is_none() {
            return Err(Error::GoalNotReached);
        }
    }

    Ok(paths)
}
