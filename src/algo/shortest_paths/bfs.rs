use std::hash::Hash;

use crate::{core::weight::Weight, graph::Graph, visit::bfs::RawBfs};

use super::{Error, RawShortestPaths};

pub fn bfs<V, W>(
    graph: &Graph<V, W>,
    source: usize,
    goal: Option<usize>,
) -> Result<RawShortestPaths<usize>, Error>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    let n = graph.vertex_count();

    let mut paths = RawShortestPaths::new(n, source, 0);
    let mut raw = RawBfs::new(n, source);
    let mut reached_goal = false;

    // Vertices come in level order and the first discovery of a vertex fixes
    // its parent, so the distance is one more than the parent's.
    while let Some((vertex, parent)) = raw.next(graph) {
        if let Some(parent) = parent {
            paths.relax(parent, vertex, &1);
        }

        if goal == Some(vertex) {
            reached_goal = true;
            break;
        }
    }

    if goal.is_some() && !reached_goal {
        return Err(Error::GoalNotReached);
    }

    Ok(paths)
}
