use std::{collections::VecDeque, hash::Hash};

use fixedbitset::FixedBitSet;

use crate::{core::weight::Weight, graph::Graph};

pub fn kahn<V, W>(graph: &Graph<V, W>) -> KahnIter<'_, V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    let n = graph.vertex_count();
    let mut in_deg = Vec::with_capacity(n);
    let mut queue = VecDeque::new();

    for v in 0..n {
        let deg = graph.in_degree_of(v);
        in_deg.push(deg);

        if deg == 0 {
            queue.push_back(v);
        }
    }

    debug!(vertices = n, ready = queue.len(), "toposort_kahn");

    KahnIter {
        graph,
        in_deg,
        queue,
        visited: 0,
        done: false,
    }
}

pub struct KahnIter<'a, V, W> {
    pub(super) graph: &'a Graph<V, W>,
    // Number of incoming edges from vertices not reported yet.
    in_deg: Vec<usize>,
    // FIFO so that vertices ready at the same time keep insertion order.
    queue: VecDeque<usize>,
    visited: usize,
    done: bool,
}

impl<'a, V, W> KahnIter<'a, V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    /// Finds an edge on a cycle among the vertices that were never reported.
    ///
    /// Every such vertex has a predecessor that was not reported either, so
    /// walking backwards through these predecessors must eventually repeat a
    /// vertex.
    fn find_cycle(&self) -> Option<(usize, usize)> {
        let n = self.graph.vertex_count();
        let mut vertex = (0..n).find(|&v| self.in_deg[v] > 0)?;
        let mut seen = FixedBitSet::with_capacity(n);

        loop {
            seen.insert(vertex);

            let (pred, _) = self
                .graph
                .incoming_list(vertex)
                .iter()
                .copied()
                .find(|&(u, _)| self.in_deg[u] > 0)?;

            if seen.contains(pred) {
                return Some((pred, vertex));
            }

            vertex = pred;
        }
    }
}

impl<'a, V, W> Iterator for KahnIter<'a, V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    type Item = Result<usize, (usize, usize)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if let Some(vertex) = self.queue.pop_front() {
            self.visited += 1;

            for (next, _) in self.graph.successors_of(vertex) {
                let deg = &mut self.in_deg[next];
                *deg -= 1;

                if *deg == 0 {
                    self.queue.push_back(next);
                }
            }

            Some(Ok(vertex))
        } else {
            self.done = true;

            if self.visited == self.graph.vertex_count() {
                None
            } else {
                debug!(reported = self.visited, "toposort_cycle");
                self.find_cycle().map(Err)
            }
        }
    }
}
